//! Type-ahead matching.

use crate::model::OptionRecord;

/// Index of the first option whose lower-cased label starts with `query`.
///
/// `query` is expected lower-cased already; an empty query matches nothing.
pub fn find_prefix(options: &[OptionRecord], query: &str) -> Option<usize> {
    if query.is_empty() {
        return None;
    }
    options
        .iter()
        .position(|option| option.label.to_lowercase().starts_with(query))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(labels: &[&str]) -> Vec<OptionRecord> {
        labels
            .iter()
            .map(|label| OptionRecord {
                label: label.to_string(),
                value: label.to_lowercase(),
                selected: false,
                native: String::new(),
            })
            .collect()
    }

    #[test]
    fn first_match_in_order_wins() {
        let options = records(&["Apple", "Apricot", "Banana"]);
        assert_eq!(find_prefix(&options, "a"), Some(0));
        assert_eq!(find_prefix(&options, "apr"), Some(1));
        assert_eq!(find_prefix(&options, "b"), Some(2));
    }

    #[test]
    fn case_insensitive_label() {
        let options = records(&["cherry", "CHOCOLATE"]);
        assert_eq!(find_prefix(&options, "cho"), Some(1));
    }

    #[test]
    fn no_match_or_empty_query() {
        let options = records(&["Apple"]);
        assert_eq!(find_prefix(&options, "z"), None);
        assert_eq!(find_prefix(&options, ""), None);
    }
}
