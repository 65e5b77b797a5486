/// Formats an integer with Indian (`en-IN`) digit grouping: the last three
/// digits form one group and every group above it has two digits, so
/// `1234567` renders as `12,34,567`.
pub fn group_digits(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut groups: Vec<&str> = Vec::new();

    let (head, tail) = if digits.len() > 3 {
        digits.split_at(digits.len() - 3)
    } else {
        ("", digits.as_str())
    };

    let mut rest = head;
    while rest.len() > 2 {
        let (front, back) = rest.split_at(rest.len() - 2);
        groups.push(back);
        rest = front;
    }
    if !rest.is_empty() {
        groups.push(rest);
    }
    groups.reverse();
    groups.push(tail);

    let grouped = groups.join(",");
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Grouped value followed by the caller's suffix, e.g. `10,000+`.
pub fn with_suffix(value: i64, suffix: &str) -> String {
    format!("{}{}", group_digits(value), suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_numbers_are_not_grouped() {
        assert_eq!(group_digits(0), "0");
        assert_eq!(group_digits(7), "7");
        assert_eq!(group_digits(999), "999");
    }

    #[test]
    fn thousands_use_a_single_separator() {
        assert_eq!(group_digits(1000), "1,000");
        assert_eq!(group_digits(10_000), "10,000");
        assert_eq!(group_digits(99_999), "99,999");
    }

    #[test]
    fn lakh_and_crore_grouping() {
        assert_eq!(group_digits(100_000), "1,00,000");
        assert_eq!(group_digits(12_345_678), "1,23,45,678");
        assert_eq!(group_digits(1_000_000_000), "1,00,00,00,000");
    }

    #[test]
    fn negative_values_keep_their_sign() {
        assert_eq!(group_digits(-1500), "-1,500");
    }

    #[test]
    fn suffix_is_appended_after_grouping() {
        assert_eq!(with_suffix(5000, "+"), "5,000+");
        assert_eq!(with_suffix(12, ""), "12");
    }
}
