//! Date reformatting between the datepicker's `MM/DD/YYYY` and the record
//! service's ISO `YYYY-MM-DD`.

/// Converts `MM/DD/YYYY` to `YYYY-MM-DD`, zero-padding month and day.
///
/// Pure string manipulation: anything that does not split on `/` into exactly
/// three parts (including input that is already ISO) passes through unchanged,
/// and no calendar validity check is made. The record service is the
/// authority on whether a date is real.
pub fn mdy_to_iso(raw: &str) -> String {
    let mut parts = raw.split('/');
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(month), Some(day), Some(year), None) => {
            format!("{year}-{month:0>2}-{day:0>2}")
        }
        _ => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_padded_input() {
        assert_eq!(mdy_to_iso("01/05/2024"), "2024-01-05");
        assert_eq!(mdy_to_iso("12/31/1999"), "1999-12-31");
    }

    #[test]
    fn pads_single_digit_month_and_day() {
        assert_eq!(mdy_to_iso("1/1/2024"), "2024-01-01");
        assert_eq!(mdy_to_iso("3/15/2024"), "2024-03-15");
    }

    #[test]
    fn iso_input_passes_through() {
        assert_eq!(mdy_to_iso("2024-01-05"), "2024-01-05");
    }

    #[test]
    fn calendar_validity_is_not_checked() {
        // Delegated to the record service on purpose.
        assert_eq!(mdy_to_iso("13/40/2024"), "2024-13-40");
    }

    #[test]
    fn wrong_shape_passes_through() {
        assert_eq!(mdy_to_iso(""), "");
        assert_eq!(mdy_to_iso("01/2024"), "01/2024");
        assert_eq!(mdy_to_iso("1/2/3/4"), "1/2/3/4");
    }
}
