/// Fields the record service accepts in `GET /search?field=...`.
///
/// The wire values match the service's column names; `label` is the Hindi
/// caption shown next to the search box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchField {
    #[default]
    PaathName,
    PersonName,
    GotraName,
    StartDate,
}

impl SearchField {
    pub fn as_str(self) -> &'static str {
        match self {
            SearchField::PaathName => "paath_name",
            SearchField::PersonName => "person_name",
            SearchField::GotraName => "gotra_name",
            SearchField::StartDate => "start_date",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SearchField::PaathName => "पाठ का नाम",
            SearchField::PersonName => "व्यक्ति का नाम",
            SearchField::GotraName => "गोत्र",
            SearchField::StartDate => "आरंभ तिथि",
        }
    }

    pub const ALL: [SearchField; 4] = [
        SearchField::PaathName,
        SearchField::PersonName,
        SearchField::GotraName,
        SearchField::StartDate,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_search_field_is_paath_name() {
        assert_eq!(SearchField::default(), SearchField::PaathName);
    }

    #[test]
    fn wire_values_match_service_columns() {
        assert_eq!(SearchField::PaathName.as_str(), "paath_name");
        assert_eq!(SearchField::PersonName.as_str(), "person_name");
        assert_eq!(SearchField::GotraName.as_str(), "gotra_name");
        assert_eq!(SearchField::StartDate.as_str(), "start_date");
    }
}
