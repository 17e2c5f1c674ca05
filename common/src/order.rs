//! Client-side ordering of the fetched entry set by start date.

use crate::model::seva::SevaEntry;

/// Display order of the entries table, keyed on `start_date`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

/// Returns a sorted copy of `entries`; the input set is left untouched so a
/// later sort-only change can reorder it again without refetching.
///
/// The sort is stable in both directions: descending reverses the comparator
/// rather than the result, so entries sharing a `start_date` keep their
/// original relative order.
pub fn sort_by_start_date(entries: &[SevaEntry], order: SortOrder) -> Vec<SevaEntry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| {
        let (ka, kb) = (date_key(&a.start_date), date_key(&b.start_date));
        match order {
            SortOrder::Asc => ka.cmp(&kb),
            SortOrder::Desc => kb.cmp(&ka),
        }
    });
    sorted
}

/// `YYYY-MM-DD` as a comparable `(year, month, day)` triple. Missing or
/// non-numeric components compare as 0, which sinks malformed dates together
/// instead of panicking on them.
fn date_key(iso: &str) -> (u32, u32, u32) {
    let mut parts = iso
        .split('-')
        .map(|p| p.parse::<u32>().unwrap_or(0));
    let mut next = || parts.next().unwrap_or(0);
    (next(), next(), next())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: i64, start: &str) -> SevaEntry {
        SevaEntry {
            id,
            paath_name: format!("paath-{id}"),
            person_name: format!("person-{id}"),
            gotra_name: format!("gotra-{id}"),
            start_date: start.to_string(),
            end_date: start.to_string(),
        }
    }

    fn ids(entries: &[SevaEntry]) -> Vec<i64> {
        entries.iter().map(|e| e.id).collect()
    }

    #[test]
    fn ascending_puts_earliest_first() {
        let set = [entry(1, "2024-03-01"), entry(2, "2024-01-01")];
        assert_eq!(ids(&sort_by_start_date(&set, SortOrder::Asc)), [2, 1]);
    }

    #[test]
    fn descending_puts_latest_first() {
        let set = [entry(1, "2024-03-01"), entry(2, "2024-01-01")];
        assert_eq!(ids(&sort_by_start_date(&set, SortOrder::Desc)), [1, 2]);
    }

    #[test]
    fn equal_dates_keep_original_order_in_both_directions() {
        let set = [
            entry(10, "2024-06-01"),
            entry(11, "2024-06-01"),
            entry(12, "2024-06-01"),
        ];
        assert_eq!(ids(&sort_by_start_date(&set, SortOrder::Asc)), [10, 11, 12]);
        assert_eq!(ids(&sort_by_start_date(&set, SortOrder::Desc)), [10, 11, 12]);
    }

    #[test]
    fn input_set_is_not_mutated() {
        let set = [entry(1, "2024-03-01"), entry(2, "2024-01-01")];
        let _ = sort_by_start_date(&set, SortOrder::Asc);
        assert_eq!(ids(&set), [1, 2]);
    }

    #[test]
    fn calendar_order_beats_string_order_for_unpadded_years() {
        // 999-12-31 must sort before 2024-01-01 even though "9" > "2".
        let set = [entry(1, "999-12-31"), entry(2, "2024-01-01")];
        assert_eq!(ids(&sort_by_start_date(&set, SortOrder::Asc)), [1, 2]);
    }

    #[test]
    fn malformed_dates_sink_together_without_panicking() {
        let set = [entry(1, "not-a-date"), entry(2, "2024-01-01"), entry(3, "")];
        assert_eq!(ids(&sort_by_start_date(&set, SortOrder::Asc)), [1, 3, 2]);
    }

    #[test]
    fn default_order_is_descending() {
        assert_eq!(SortOrder::default(), SortOrder::Desc);
    }
}
