use common::model::seva::SevaEntry;

pub enum FetchState {
    Loading,
    Loaded,
    Failed,
}

/// State for the trash table: the trashed set as last fetched, shown in
/// service order. Confirmed restores and purges each drop exactly one id.
pub struct TrashComponent {
    pub entries: Vec<SevaEntry>,
    pub fetch: FetchState,
    pub loaded: bool,
}

impl TrashComponent {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            fetch: FetchState::Loading,
            loaded: false,
        }
    }
}
