use std::io::{self, Write};

use crate::record::{NameRecord, ResultSet};

pub const HEADER: &str = "Names found in file:";

/// Formats one report row. Names are left-justified and padded to `width`
/// characters.
pub fn format_row(record: &NameRecord, width: usize) -> String {
    format!(
        "First Name: {:<width$} Last Name: {:<width$}",
        record.first(),
        record.last(),
        width = width
    )
}

/// Writes the header followed by one row per record, in order.
pub fn render<W>(out: &mut W, records: &ResultSet, width: usize) -> io::Result<()>
where
    W: Write + ?Sized,
{
    writeln!(out)?;
    writeln!(out, "{}", HEADER)?;
    for record in records {
        writeln!(out, "{}", format_row(record, width))?;
    }
    out.flush()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::record::MAX_FIELD_LEN;

    fn render_to_string(records: &ResultSet) -> String {
        let mut out = Vec::new();
        render(&mut out, records, MAX_FIELD_LEN).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn format_row_pads_both_fields() {
        let row = format_row(&NameRecord::new("Alice", "Smith", MAX_FIELD_LEN), MAX_FIELD_LEN);
        assert_eq!(
            "First Name: Alice                Last Name: Smith               ",
            row
        );
    }

    #[test]
    fn format_row_never_exceeds_width_for_truncated_names() {
        let record = NameRecord::new(&"X".repeat(30), &"Y".repeat(30), MAX_FIELD_LEN);
        let row = format_row(&record, MAX_FIELD_LEN);
        assert_eq!(
            format!("First Name: {} Last Name: {}", "X".repeat(20), "Y".repeat(20)),
            row
        );
    }

    #[test]
    fn format_row_pads_by_chars() {
        let row = format_row(&NameRecord::new("Zoë", "Müller", MAX_FIELD_LEN), MAX_FIELD_LEN);
        let first_field: String = row.chars().skip("First Name: ".len()).take(20).collect();
        assert_eq!("Zoë                 ", first_field);
    }

    #[test]
    fn render_should_work() {
        let records: ResultSet = vec![
            NameRecord::new("Alice", "Smith", MAX_FIELD_LEN),
            NameRecord::new("Bob", "Jones", MAX_FIELD_LEN),
        ]
        .into_iter()
        .collect();

        let expect = "\nNames found in file:\n\
            First Name: Alice                Last Name: Smith               \n\
            First Name: Bob                  Last Name: Jones               \n";
        assert_eq!(expect, render_to_string(&records));
    }

    #[test]
    fn render_empty_prints_header_only() {
        assert_eq!("\nNames found in file:\n", render_to_string(&ResultSet::new()));
    }
}
