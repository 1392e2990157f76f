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

//! Append rows to Google Sheets, by position or by column name.
//!
//! ```no_run
//! use sheets_crud::auth::AuthManager;
//! use sheets_crud::sheets::{InsertAs, SheetOperations};
//! use serde_json::json;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let hub = AuthManager::new("credentials.json".into(), None).build_hub().await?;
//! let sheet = SheetOperations::new(hub, "1PJlIRk4PNwBZrhWTRA4VodT2-lSRLnHX27enkL5ghhE");
//!
//! let rows = vec![
//!     vec![json!("Column 2"), json!("Column 1")],
//!     vec![json!("Value 2"), json!("Value 1")],
//! ];
//! let updated = sheet.insert_into_columns("Sheet1", rows, InsertAs::Raw).await?;
//! println!("{} rows updated", updated);
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod config;
pub mod files;
pub mod sheets;
pub mod utils;

pub use sheets::{AppendOptions, ColumnMap, InsertAs, InsertDataOption, Row, SheetOperations};
pub use utils::{Result, SheetOpsError};
