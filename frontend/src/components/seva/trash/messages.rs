use common::model::seva::SevaEntry;

pub enum Msg {
    TrashLoaded(Vec<SevaEntry>),
    LoadFailed(String),
    /// Restore checkbox toggled on the row with this id.
    Restore(i64),
    Restored(i64),
    RestoreFailed(String),
    /// Permanent-delete checkbox toggled on the row with this id.
    Purge(i64),
    Purged(i64),
    PurgeFailed(String),
}
