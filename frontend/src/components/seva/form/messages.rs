pub enum Msg {
    /// Form submitted; field values are read from the refs.
    Submit,
    /// The service accepted the new entry.
    Saved,
    SaveFailed(String),
}
