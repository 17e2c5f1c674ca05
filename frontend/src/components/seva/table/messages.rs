use common::model::search::SearchField;
use common::model::seva::SevaEntry;
use common::order::SortOrder;

pub enum Msg {
    /// A list/search response arrived; replaces the held set wholesale.
    EntriesLoaded(Vec<SevaEntry>),
    LoadFailed(String),
    SetSort(SortOrder),
    SetSearchField(SearchField),
    /// Search form submitted; the query is read from the input ref.
    SubmitSearch,
    /// Datepicker value changed.
    DateChanged,
    /// Delete checkbox of the row with this id was toggled.
    Delete(i64),
    /// The service confirmed the soft delete of this id.
    Deleted(i64),
    DeleteFailed(String),
}
