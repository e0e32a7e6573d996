//! Timestamps for the trace file name and the run log entries.

use chrono::Local;
use chrono::NaiveDateTime;
use once_cell::sync::Lazy;

/// The moment the process started, captured once. Repeated trace writes
/// within one run target the same file name.
static START_TIME: Lazy<NaiveDateTime> = Lazy::new(|| Local::now().naive_local());

/// The name of the trace file for this run, e.g.
/// `Mon_Dec_12_2016 22_17_43.txt`.
pub fn trace_file_name() -> String {
    format_trace_name(*START_TIME)
}

/// The timestamp prefixed to every run log entry, e.g.
/// `Mon Dec 12 2016 22:17:43`.
pub(crate) fn log_entry_date() -> String {
    format_log_date(Local::now().naive_local())
}

fn format_trace_name(moment: NaiveDateTime) -> String {
    format!("{}.txt", moment.format("%a_%b_%d_%Y %H_%M_%S"))
}

fn format_log_date(moment: NaiveDateTime) -> String {
    moment.format("%a %b %d %Y %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::format_log_date;
    use super::format_trace_name;

    fn reference_moment() -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2016, 12, 12)
            .unwrap()
            .and_hms_opt(22, 17, 43)
            .unwrap()
    }

    #[test]
    fn trace_name_uses_short_names_and_padded_fields() {
        assert_eq!(
            format_trace_name(reference_moment()),
            "Mon_Dec_12_2016 22_17_43.txt"
        );
    }

    #[test]
    fn single_digit_fields_are_zero_padded() {
        let moment = NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(7, 4, 9)
            .unwrap();

        assert_eq!(format_trace_name(moment), "Tue_Mar_05_2024 07_04_09.txt");
    }

    #[test]
    fn log_date_is_space_and_colon_separated() {
        assert_eq!(
            format_log_date(reference_moment()),
            "Mon Dec 12 2016 22:17:43"
        );
    }
}
