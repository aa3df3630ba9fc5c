use std::fmt;

/// Longest first or last name kept by default, in characters.
pub const MAX_FIELD_LEN: usize = 20;

/// Keeps at most `max` characters of `s`.
///
/// Characters are Unicode scalar values, so a multi-byte character is never cut
/// in half. This differs from a byte-based cut, which counts UTF-8 bytes.
/// Strings already within the limit come back unchanged.
pub fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// A first/last name pair parsed from one input line.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct NameRecord {
    first: String,
    last: String,
}

impl NameRecord {
    pub fn new(first: &str, last: &str, max_len: usize) -> Self {
        Self {
            first: truncate(first, max_len).to_string(),
            last: truncate(last, max_len).to_string(),
        }
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn last(&self) -> &str {
        &self.last
    }
}

impl fmt::Display for NameRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first, self.last)
    }
}

/// Records in the order their lines appeared in the file.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct ResultSet {
    records: Vec<NameRecord>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: NameRecord) {
        self.records.push(record)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NameRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<NameRecord> for ResultSet {
    fn from_iter<T: IntoIterator<Item = NameRecord>>(iter: T) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a NameRecord;
    type IntoIter = std::slice::Iter<'a, NameRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn truncate_should_work() {
        assert_eq!(
            "AAAAAAAAAAAAAAAAAAAA",
            truncate("AAAAAAAAAAAAAAAAAAAAAAAAA", 20)
        );
        assert_eq!("Alice", truncate("Alice", 20));
        assert_eq!("", truncate("", 20));
        assert_eq!("abc", truncate("abcdef", 3));
    }

    #[test]
    fn truncate_is_idempotent() {
        let inputs = ["", "Bob", "exactlytwentychars!!", "a much longer name than twenty"];
        for input in inputs {
            let once = truncate(input, MAX_FIELD_LEN);
            assert_eq!(once, truncate(once, MAX_FIELD_LEN));
            assert!(once.chars().count() <= MAX_FIELD_LEN);
        }
    }

    #[test]
    fn truncate_keeps_multibyte_chars_whole() {
        let name = "ÉÉÉÉÉÉÉÉÉÉÉÉÉÉÉÉÉÉÉÉÉÉ";
        let cut = truncate(name, 20);
        assert_eq!(20, cut.chars().count());
        assert_eq!(40, cut.len());
    }

    #[test]
    fn name_record_truncates_fields() {
        let rec = NameRecord::new("AAAAAAAAAAAAAAAAAAAAAAAAA", "Smith", MAX_FIELD_LEN);
        assert_eq!("AAAAAAAAAAAAAAAAAAAA", rec.first());
        assert_eq!("Smith", rec.last());
        assert_eq!("AAAAAAAAAAAAAAAAAAAA Smith", rec.to_string());
    }

    #[test]
    fn result_set_keeps_order() {
        let set: ResultSet = vec![
            NameRecord::new("Bob", "Jones", MAX_FIELD_LEN),
            NameRecord::new("Alice", "Smith", MAX_FIELD_LEN),
        ]
        .into_iter()
        .collect();

        assert_eq!(2, set.len());
        let firsts: Vec<&str> = set.iter().map(NameRecord::first).collect();
        assert_eq!(vec!["Bob", "Alice"], firsts);
        assert!(ResultSet::new().is_empty());
    }
}
