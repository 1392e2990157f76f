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

use crate::sheets::Row;
use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Parses a JSON array of rows, e.g. `[["Column 1", "Column 2"], ["a", 1]]`.
///
/// Cells must be scalars (string, number, bool or null).
pub fn parse_rows(json: &str) -> Result<Vec<Row>> {
    let value: Value = serde_json::from_str(json).context("Rows are not valid JSON")?;

    let Value::Array(rows) = value else {
        anyhow::bail!("Expected a JSON array of rows");
    };

    let mut parsed = Vec::with_capacity(rows.len());
    for (index, row) in rows.into_iter().enumerate() {
        let Value::Array(cells) = row else {
            anyhow::bail!("Row {} is not an array", index + 1);
        };

        if let Some(position) = cells
            .iter()
            .position(|cell| matches!(cell, Value::Array(_) | Value::Object(_)))
        {
            anyhow::bail!(
                "Row {} cell {} is not a scalar value",
                index + 1,
                position + 1
            );
        }

        parsed.push(cells);
    }

    Ok(parsed)
}

/// Reads rows from a JSON file.
pub fn load_rows<P: AsRef<Path>>(path: P) -> Result<Vec<Row>> {
    let path = path.as_ref();
    debug!("📄 Reading rows from {:?}", path);

    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read rows from {:?}", path))?;
    parse_rows(&content).with_context(|| format!("Invalid rows in {:?}", path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn parses_mixed_scalar_cells() {
        let rows = parse_rows(r#"[["Column 1", "Column 2"], ["Value 1", 2, true, null]]"#)
            .unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec![json!("Column 1"), json!("Column 2")]);
        assert_eq!(rows[1], vec![json!("Value 1"), json!(2), json!(true), json!(null)]);
    }

    #[test]
    fn accepts_empty_input() {
        assert!(parse_rows("[]").unwrap().is_empty());
    }

    #[test]
    fn rejects_non_array_input() {
        let err = parse_rows(r#"{"rows": []}"#).unwrap_err();
        assert!(err.to_string().contains("array of rows"));

        let err = parse_rows(r#"[["ok"], "not a row"]"#).unwrap_err();
        assert!(err.to_string().contains("Row 2 is not an array"));
    }

    #[test]
    fn rejects_nested_cells() {
        let err = parse_rows(r#"[["a", ["nested"]]]"#).unwrap_err();
        assert!(err.to_string().contains("Row 1 cell 2"));
    }

    #[test]
    fn loads_rows_from_file() {
        let temp_dir = TempDir::new().expect("Failed to create temporary directory");
        let path = temp_dir.path().join("rows.json");
        fs::write(&path, r#"[["Name"], ["Ada"]]"#).expect("Failed to write rows");

        let rows = load_rows(&path).unwrap();
        assert_eq!(rows, vec![vec![json!("Name")], vec![json!("Ada")]]);
    }

    #[test]
    fn load_reports_missing_file() {
        let temp_dir = TempDir::new().expect("Failed to create temporary directory");
        let err = load_rows(temp_dir.path().join("missing.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read rows"));
    }
}
