//! Spreadsheet column labels.

/// Label for a 1-based column index in bijective base-26 numeration:
/// 1 → "A", 26 → "Z", 27 → "AA", 52 → "AZ", 53 → "BA".
#[must_use]
pub fn column_label(index: u32) -> String {
    let mut index = index;
    let mut label = String::new();
    while index > 0 {
        index -= 1;
        let letter = char::from(b'A' + u8::try_from(index % 26).unwrap_or(0));
        label.insert(0, letter);
        index /= 26;
    }
    label
}

#[cfg(test)]
mod tests {
    use super::column_label;

    #[test]
    fn single_letter_labels() {
        assert_eq!(column_label(1), "A");
        assert_eq!(column_label(2), "B");
        assert_eq!(column_label(26), "Z");
    }

    #[test]
    fn double_letter_labels() {
        assert_eq!(column_label(27), "AA");
        assert_eq!(column_label(28), "AB");
        assert_eq!(column_label(52), "AZ");
        assert_eq!(column_label(53), "BA");
        assert_eq!(column_label(702), "ZZ");
    }

    #[test]
    fn triple_letter_labels() {
        assert_eq!(column_label(703), "AAA");
    }
}
