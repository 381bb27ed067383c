//! Spreadsheet-style labels and sample data.

use crate::value::CellValue;

/// Spreadsheet column label for a zero-based column index: A, B, ..., Z, AA, AB, ...
pub fn column_label(index: usize) -> String {
    let mut label = Vec::new();
    let mut dividend = index + 1;

    while dividend > 0 {
        let modulo = (dividend - 1) % 26;
        label.push(b'A' + modulo as u8);
        dividend = (dividend - 1) / 26;
    }

    label.reverse();
    String::from_utf8_lossy(&label).into_owned()
}

/// Sample data where each cell holds its column label followed by its row index,
/// e.g. `A0`, `B0`, ... on row 0 and `A1`, `B1`, ... on row 1.
pub fn sample_data(rows: usize, cols: usize) -> Vec<Vec<CellValue>> {
    (0..rows)
        .map(|row| {
            (0..cols)
                .map(|col| CellValue::Text(format!("{}{}", column_label(col), row)))
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_label() {
        assert_eq!(column_label(0), "A");
        assert_eq!(column_label(25), "Z");
        assert_eq!(column_label(26), "AA");
        assert_eq!(column_label(27), "AB");
        assert_eq!(column_label(701), "ZZ");
        assert_eq!(column_label(702), "AAA");
    }

    #[test]
    fn test_sample_data() {
        let data = sample_data(2, 3);
        assert_eq!(data.len(), 2);
        assert_eq!(data[0], vec![CellValue::from("A0"), CellValue::from("B0"), CellValue::from("C0")]);
        assert_eq!(data[1][2], CellValue::from("C1"));
    }
}
