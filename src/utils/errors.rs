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

use thiserror::Error;

/// Errors returned by [`SheetOperations`](crate::sheets::SheetOperations).
///
/// Remote failures are carried untouched in [`SheetOpsError::Remote`]; every
/// other variant describes input that could not be mapped onto the sheet.
#[derive(Error, Debug)]
pub enum SheetOpsError {
    #[error("Google Sheets API error: {0}")]
    Remote(#[from] google_sheets4::Error),

    #[error("No header row found in range '{range}'")]
    NoHeaderRow { range: String },

    #[error("No column names given: the first row must list the target columns")]
    MissingColumnNames,

    #[error("Unknown column '{column}' in range '{range}'")]
    UnknownColumn { column: String, range: String },

    #[error("Column '{column}' requested more than once")]
    DuplicateColumn { column: String },

    #[error("Row {row} has {actual} values but {expected} columns were requested")]
    RowLengthMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

pub type Result<T> = std::result::Result<T, SheetOpsError>;
