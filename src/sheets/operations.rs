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

use crate::sheets::client::{AppendOptions, InsertAs, Row, ValuesClient};
use crate::sheets::columns::{self, ColumnMap};
use crate::utils::{Result, SheetOpsError};
use tracing::{debug, info};

/// Append operations against a single spreadsheet.
pub struct SheetOperations<C> {
    client: C,
    spreadsheet_id: String,
}

impl<C: ValuesClient> SheetOperations<C> {
    /// Creates a new SheetOperations instance.
    ///
    /// # Arguments
    ///
    /// * `client` - Values API client, usually a [`SheetsHub`](crate::sheets::SheetsHub)
    /// * `spreadsheet_id` - ID of the spreadsheet, as found in its URL
    ///
    /// The ID is not checked here; a wrong ID surfaces as a remote error on
    /// the first call.
    pub fn new(client: C, spreadsheet_id: impl Into<String>) -> Self {
        Self {
            client,
            spreadsheet_id: spreadsheet_id.into(),
        }
    }

    pub fn spreadsheet_id(&self) -> &str {
        &self.spreadsheet_id
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Appends rows to `range`, cell by cell in the order given.
    ///
    /// # Arguments
    ///
    /// * `range` - A1 range or plain sheet name (e.g. `Sheet1`); with a sheet
    ///   name the rows land right after the last row of the sheet's table
    /// * `values` - Rows to append; rows may differ in length
    /// * `insert_as` - How the service should interpret the values
    ///
    /// # Returns
    ///
    /// The number of rows the service reports as updated.
    pub async fn insert_into(
        &self,
        range: &str,
        values: Vec<Row>,
        insert_as: InsertAs,
    ) -> Result<i32> {
        self.append(range, values, &AppendOptions::new(insert_as))
            .await
    }

    /// Same as [`insert_into`](Self::insert_into) but with full control over
    /// the append options.
    pub async fn append(
        &self,
        range: &str,
        values: Vec<Row>,
        options: &AppendOptions,
    ) -> Result<i32> {
        info!(
            "💾 Appending {} rows to '{}' as {}",
            values.len(),
            range,
            options.insert_as
        );

        let response = self
            .client
            .append_values(&self.spreadsheet_id, range, values, options)
            .await?;

        let updated_rows = response
            .updates
            .and_then(|updates| updates.updated_rows)
            .unwrap_or(0);

        info!("✅ {} rows updated in '{}'", updated_rows, range);
        Ok(updated_rows)
    }

    /// Reads the header row of `range` and maps each named column to its letter.
    ///
    /// # Errors
    ///
    /// * [`SheetOpsError::NoHeaderRow`] if the range holds no rows
    /// * [`SheetOpsError::Remote`] if the read fails
    pub async fn get_columns(&self, range: &str) -> Result<ColumnMap> {
        debug!("📋 Reading header row of '{}'", range);

        let rows = self
            .client
            .read_values(&self.spreadsheet_id, range)
            .await?;
        let header = rows.first().ok_or_else(|| SheetOpsError::NoHeaderRow {
            range: range.to_string(),
        })?;

        let columns = ColumnMap::from_header(header);
        debug!(
            "📋 Found {} named columns ({} total) in '{}'",
            columns.len(),
            columns.width(),
            range
        );
        Ok(columns)
    }

    /// Appends rows addressed by column name.
    ///
    /// The first row of `values` lists the target columns; every following
    /// row carries one value per listed column, in the same order. Columns
    /// the caller does not list are written as empty strings.
    ///
    /// Nothing is written unless every column is known and every row has the
    /// right number of values.
    pub async fn insert_into_columns(
        &self,
        range: &str,
        values: Vec<Row>,
        insert_as: InsertAs,
    ) -> Result<i32> {
        self.append_columns(range, values, &AppendOptions::new(insert_as))
            .await
    }

    /// Same as [`insert_into_columns`](Self::insert_into_columns) but with full
    /// control over the append options.
    pub async fn append_columns(
        &self,
        range: &str,
        values: Vec<Row>,
        options: &AppendOptions,
    ) -> Result<i32> {
        let mut rows = values.into_iter();
        let requested = rows.next().ok_or(SheetOpsError::MissingColumnNames)?;

        let columns = self.get_columns(range).await?;
        let positions = columns::resolve_positions(&columns, &requested, range)?;
        let template = columns::build_template(columns.width(), &positions);
        let expanded = columns::expand_rows(&template, &positions, rows.collect())?;

        if expanded.is_empty() {
            info!("📋 No rows to append to '{}'", range);
            return Ok(0);
        }

        self.append(range, expanded, options).await
    }
}
