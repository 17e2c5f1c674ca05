use yew::prelude::*;

use common::model::search::SearchField;
use common::model::seva::SevaEntry;
use common::order::SortOrder;

/// Where the table is between a request and its rows.
pub enum FetchState {
    Loading,
    Loaded,
    Failed,
}

/// State for the entries table.
///
/// `entries` is the last set the service returned, kept unsorted; the view
/// derives the visible order from it on every render. It is only replaced
/// wholesale by a successful fetch/search, or shrunk by one id when the
/// service confirms a delete.
pub struct SevaTableComponent {
    pub entries: Vec<SevaEntry>,
    pub sort: SortOrder,
    pub search_field: SearchField,
    pub fetch: FetchState,

    /// Free-text search box.
    pub search_input_ref: NodeRef,
    /// Datepicker input, `MM/DD/YYYY`.
    pub date_input_ref: NodeRef,

    /// Guard so the first-render fetch runs once.
    pub loaded: bool,
}

impl SevaTableComponent {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            sort: SortOrder::default(),
            search_field: SearchField::default(),
            fetch: FetchState::Loading,
            search_input_ref: Default::default(),
            date_input_ref: Default::default(),
            loaded: false,
        }
    }
}
