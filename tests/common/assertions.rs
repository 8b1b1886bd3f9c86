//! Assertion helpers for tests.

use pretty_assertions::assert_eq;

/// Split a palette document into its header lines and color rows.
///
/// The header ends at the CC0 link followed by the closing `#` line.
pub fn split_document(text: &str) -> (Vec<&str>, Vec<&str>) {
    let lines: Vec<&str> = text.lines().collect();
    let link = lines
        .iter()
        .position(|l| l.ends_with("zero/1.0/>."))
        .expect("Palette header has no CC0 link line");
    let (header, rows) = lines.split_at(link + 2);
    (header.to_vec(), rows.to_vec())
}

/// Assert every row has the `RRR GGG BBB\t#` layout.
pub fn assert_row_layout(rows: &[&str]) {
    for row in rows {
        assert_eq!(row.len(), 13, "Unexpected row width: {row:?}");
        assert!(row.ends_with("\t#"), "Row without empty-name marker: {row:?}");
        assert_eq!(&row[3..4], " ", "Missing separator in {row:?}");
        assert_eq!(&row[7..8], " ", "Missing separator in {row:?}");
        for field in [&row[0..3], &row[4..7], &row[8..11]] {
            let value: u32 = field
                .trim_start()
                .parse()
                .unwrap_or_else(|_| panic!("Row {row:?} has non-numeric channel {field:?}"));
            assert!(value <= 255, "Channel out of range in {row:?}");
        }
    }
}

/// Parse the three channel values of a row.
pub fn row_values(row: &str) -> [u8; 3] {
    let mut values = row[..11]
        .split_whitespace()
        .map(|v| v.parse::<u8>().expect("Channel is not a u8"));
    [
        values.next().expect("missing red"),
        values.next().expect("missing green"),
        values.next().expect("missing blue"),
    ]
}
