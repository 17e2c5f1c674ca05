//! Pure mapping from an entry sequence to the row models the table view
//! paints. Keeping this DOM-free lets the row construction be unit tested
//! natively; turning rows into markup is the frontend's job.

use crate::model::seva::SevaEntry;

/// One table row, carrying the entry id its checkbox acts on.
#[derive(Debug, Clone, PartialEq)]
pub struct SevaRow {
    pub id: i64,
    pub paath_name: String,
    pub person_name: String,
    pub gotra_name: String,
    pub start_date: String,
    pub end_date: String,
}

impl From<&SevaEntry> for SevaRow {
    fn from(entry: &SevaEntry) -> Self {
        SevaRow {
            id: entry.id,
            paath_name: entry.paath_name.clone(),
            person_name: entry.person_name.clone(),
            gotra_name: entry.gotra_name.clone(),
            start_date: entry.start_date.clone(),
            end_date: entry.end_date.clone(),
        }
    }
}

/// What the table body shows: either one full-width placeholder row, or one
/// data row per entry in the given order.
#[derive(Debug, Clone, PartialEq)]
pub enum TableBody {
    Empty,
    Rows(Vec<SevaRow>),
}

impl TableBody {
    pub fn from_entries(entries: &[SevaEntry]) -> TableBody {
        if entries.is_empty() {
            TableBody::Empty
        } else {
            TableBody::Rows(entries.iter().map(SevaRow::from).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: i64) -> SevaEntry {
        SevaEntry {
            id,
            paath_name: format!("paath-{id}"),
            person_name: format!("person-{id}"),
            gotra_name: format!("gotra-{id}"),
            start_date: "2024-01-01".into(),
            end_date: "2024-01-02".into(),
        }
    }

    #[test]
    fn empty_input_yields_the_placeholder_body() {
        assert_eq!(TableBody::from_entries(&[]), TableBody::Empty);
    }

    #[test]
    fn each_entry_yields_one_row_with_its_own_id() {
        let set = [entry(4), entry(9), entry(2)];
        match TableBody::from_entries(&set) {
            TableBody::Rows(rows) => {
                assert_eq!(rows.len(), 3);
                let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
                assert_eq!(ids, [4, 9, 2]);
                assert_eq!(rows[1].paath_name, "paath-9");
            }
            TableBody::Empty => panic!("expected data rows"),
        }
    }

    #[test]
    fn mapping_is_idempotent() {
        let set = [entry(1), entry(2)];
        assert_eq!(
            TableBody::from_entries(&set),
            TableBody::from_entries(&set)
        );
    }
}
