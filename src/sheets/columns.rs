// Copyright 2025 Webmobix Solutions AG
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUTHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Column bookkeeping for appends by column name.
//!
//! A header row is turned into a [`ColumnMap`] (name -> column letter), the
//! caller's requested columns into a row template, and short rows into
//! full-width rows that line up with the sheet header.

use crate::sheets::client::Row;
use crate::utils::{Result, SheetOpsError};
use std::collections::{HashMap, HashSet};

/// Header names mapped to their column letters, plus the header width.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMap {
    letters: HashMap<String, String>,
    width: usize,
}

impl ColumnMap {
    /// Builds the map from a header row.
    ///
    /// Empty cells are not addressable by name but still count towards the
    /// width and shift the letters of the cells after them. When a name repeats,
    /// the rightmost column wins.
    pub fn from_header(header: &[serde_json::Value]) -> Self {
        let mut letters = HashMap::new();
        for (index, cell) in header.iter().enumerate() {
            let name = json_value_to_string(cell);
            if name.is_empty() {
                continue;
            }
            letters.insert(name, column_index_to_letter(index));
        }

        Self {
            letters,
            width: header.len(),
        }
    }

    /// Column letter for `name`, if the header has it.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.letters.get(name).map(String::as_str)
    }

    /// Zero-based position of `name` in the header.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.get(name).and_then(column_letter_to_index)
    }

    /// Number of header cells, named or not.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of named columns.
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Named columns in header order.
    pub fn columns(&self) -> Vec<(&str, &str)> {
        let mut columns: Vec<(&str, &str)> = self
            .letters
            .iter()
            .map(|(name, letter)| (name.as_str(), letter.as_str()))
            .collect();
        columns.sort_by_key(|(_, letter)| column_letter_to_index(letter));
        columns
    }

    pub fn as_map(&self) -> &HashMap<String, String> {
        &self.letters
    }
}

/// Resolves requested column names to their sheet positions, in request order.
pub fn resolve_positions(
    columns: &ColumnMap,
    requested: &[serde_json::Value],
    range: &str,
) -> Result<Vec<usize>> {
    let mut seen = HashSet::new();
    let mut positions = Vec::with_capacity(requested.len());

    for cell in requested {
        let name = json_value_to_string(cell);
        let position = columns
            .index_of(&name)
            .ok_or_else(|| SheetOpsError::UnknownColumn {
                column: name.clone(),
                range: range.to_string(),
            })?;
        if !seen.insert(position) {
            return Err(SheetOpsError::DuplicateColumn { column: name });
        }
        positions.push(position);
    }

    Ok(positions)
}

/// Marks which of `width` columns receive a value.
pub fn build_template(width: usize, positions: &[usize]) -> Vec<bool> {
    let mut template = vec![false; width];
    for &position in positions {
        if let Some(slot) = template.get_mut(position) {
            *slot = true;
        }
    }
    template
}

/// Spreads each row's values over the full header width.
///
/// The value at `row[i]` lands at `positions[i]`; columns left unset by the
/// template are filled with an empty string. Rows whose length differs from
/// the number of requested columns are rejected.
pub fn expand_rows(template: &[bool], positions: &[usize], rows: Vec<Row>) -> Result<Vec<Row>> {
    rows.into_iter()
        .enumerate()
        .map(|(index, row)| {
            if row.len() != positions.len() {
                return Err(SheetOpsError::RowLengthMismatch {
                    row: index + 1,
                    expected: positions.len(),
                    actual: row.len(),
                });
            }

            let mut slots: Vec<Option<serde_json::Value>> = vec![None; template.len()];
            for (value, &position) in row.into_iter().zip(positions) {
                if let Some(slot) = slots.get_mut(position) {
                    *slot = Some(value);
                }
            }

            Ok(template
                .iter()
                .zip(slots)
                .map(|(&filled, slot)| match (filled, slot) {
                    (true, Some(value)) => value,
                    _ => serde_json::Value::String(String::new()),
                })
                .collect())
        })
        .collect()
}

/// Converts a zero-based column index to a column letter (0=A, 25=Z, 26=AA, ...).
pub fn column_index_to_letter(index: usize) -> String {
    let mut result = String::new();
    let mut n = index;

    loop {
        result.insert(0, (b'A' + (n % 26) as u8) as char);
        if n < 26 {
            break;
        }
        n = n / 26 - 1;
    }

    result
}

/// Converts a column letter back to its zero-based index (A=0, Z=25, AA=26, ...).
pub fn column_letter_to_index(letter: &str) -> Option<usize> {
    if letter.is_empty() || !letter.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }

    let number = letter.chars().fold(0usize, |acc, c| {
        acc * 26 + (c.to_ascii_uppercase() as usize - 'A' as usize + 1)
    });
    Some(number - 1)
}

pub(crate) fn json_value_to_string(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(num) => num.to_string(),
        serde_json::Value::Bool(flag) => flag.to_string(),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(values: &[&str]) -> Row {
        values.iter().map(|v| json!(v)).collect()
    }

    #[test]
    fn skips_empty_header_cells_but_keeps_their_position() {
        let columns = ColumnMap::from_header(&row(&["A", "", "C"]));

        let expected: HashMap<String, String> = [("A", "A"), ("C", "C")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        assert_eq!(columns.as_map(), &expected);
        assert_eq!(columns.width(), 3);
        assert_eq!(columns.len(), 2);
        assert_eq!(columns.index_of("C"), Some(2));
    }

    #[test]
    fn renders_non_string_header_cells() {
        let columns = ColumnMap::from_header(&[json!("Name"), json!(2024), json!(null)]);
        assert_eq!(columns.get("2024"), Some("B"));
        assert_eq!(columns.width(), 3);
        assert_eq!(columns.len(), 2);
    }

    #[test]
    fn duplicate_header_names_resolve_to_rightmost_column() {
        let columns = ColumnMap::from_header(&row(&["Key", "Value", "Key"]));
        assert_eq!(columns.get("Key"), Some("C"));
    }

    #[test]
    fn columns_are_listed_in_header_order() {
        let header: Row = (0..28).map(|i| json!(format!("c{}", i))).collect();
        let columns = ColumnMap::from_header(&header);

        let listed = columns.columns();
        assert_eq!(listed.first(), Some(&("c0", "A")));
        assert_eq!(listed[25], ("c25", "Z"));
        assert_eq!(listed.last(), Some(&("c27", "AB")));
    }

    #[test]
    fn column_letters_round_trip_past_z() {
        assert_eq!(column_index_to_letter(0), "A");
        assert_eq!(column_index_to_letter(25), "Z");
        assert_eq!(column_index_to_letter(26), "AA");
        assert_eq!(column_index_to_letter(701), "ZZ");
        assert_eq!(column_index_to_letter(702), "AAA");

        assert_eq!(column_letter_to_index("A"), Some(0));
        assert_eq!(column_letter_to_index("aa"), Some(26));
        assert_eq!(column_letter_to_index("AAA"), Some(702));
        assert_eq!(column_letter_to_index(""), None);
        assert_eq!(column_letter_to_index("A1"), None);
    }

    #[test]
    fn template_marks_requested_positions() {
        assert_eq!(build_template(4, &[3, 1]), vec![false, true, false, true]);
        assert_eq!(build_template(2, &[]), vec![false, false]);
    }

    #[test]
    fn unknown_column_is_rejected() {
        let columns = ColumnMap::from_header(&row(&["Column 1", "Column 2"]));
        let err = resolve_positions(&columns, &row(&["Column 3"]), "Sheet1").unwrap_err();

        match err {
            SheetOpsError::UnknownColumn { column, range } => {
                assert_eq!(column, "Column 3");
                assert_eq!(range, "Sheet1");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn duplicate_request_is_rejected() {
        let columns = ColumnMap::from_header(&row(&["Column 1", "Column 2"]));
        let err = resolve_positions(&columns, &row(&["Column 1", "Column 1"]), "Sheet1")
            .unwrap_err();
        assert!(matches!(err, SheetOpsError::DuplicateColumn { column } if column == "Column 1"));
    }

    #[test]
    fn expands_rows_to_full_width() {
        let columns = ColumnMap::from_header(&row(&["Id", "", "Name", "Email"]));
        let positions =
            resolve_positions(&columns, &row(&["Email", "Id"]), "Sheet1").unwrap();
        let template = build_template(columns.width(), &positions);

        let expanded = expand_rows(
            &template,
            &positions,
            vec![row(&["a@example.com", "1"]), vec![json!("b@example.com"), json!(2)]],
        )
        .unwrap();

        assert_eq!(
            expanded,
            vec![
                row(&["1", "", "", "a@example.com"]),
                vec![json!(2), json!(""), json!(""), json!("b@example.com")],
            ]
        );
        assert!(expanded.iter().all(|r| r.len() == columns.width()));
    }

    #[test]
    fn row_length_mismatch_reports_the_row() {
        let template = build_template(3, &[0, 2]);
        let err = expand_rows(
            &template,
            &[0, 2],
            vec![row(&["a", "b"]), row(&["only one"])],
        )
        .unwrap_err();

        match err {
            SheetOpsError::RowLengthMismatch {
                row,
                expected,
                actual,
            } => {
                assert_eq!(row, 2);
                assert_eq!(expected, 2);
                assert_eq!(actual, 1);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
