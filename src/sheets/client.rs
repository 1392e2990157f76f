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

//! Remote values API used by the sheet operations.
//!
//! [`ValuesClient`] is the only contact point with Google Sheets: one read
//! and one append. The real [`SheetsHub`] implements it directly.

use google_sheets4::{
    Sheets,
    api::{AppendValuesResponse, ValueRange},
    hyper_rustls,
};
use hyper_util::client::legacy::connect::HttpConnector;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// A single row of cell values, as carried by `ValueRange.values`.
pub type Row = Vec<serde_json::Value>;

/// Google Sheets hub over the rustls HTTPS connector.
pub type SheetsHub = Sheets<hyper_rustls::HttpsConnector<HttpConnector>>;

/// How the service should interpret appended values (`valueInputOption`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum InsertAs {
    /// Values are stored as-is.
    #[default]
    Raw,
    /// Values are parsed as if typed into the Sheets UI.
    UserEntered,
    /// Any other option, forwarded verbatim for the service to accept or reject.
    Other(String),
}

impl InsertAs {
    pub fn as_str(&self) -> &str {
        match self {
            InsertAs::Raw => "RAW",
            InsertAs::UserEntered => "USER_ENTERED",
            InsertAs::Other(value) => value,
        }
    }
}

impl FromStr for InsertAs {
    type Err = std::convert::Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(match value {
            "RAW" => InsertAs::Raw,
            "USER_ENTERED" => InsertAs::UserEntered,
            other => InsertAs::Other(other.to_string()),
        })
    }
}

impl fmt::Display for InsertAs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether appended data overwrites cells after the table or inserts new rows
/// (`insertDataOption`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertDataOption {
    Overwrite,
    InsertRows,
}

impl InsertDataOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsertDataOption::Overwrite => "OVERWRITE",
            InsertDataOption::InsertRows => "INSERT_ROWS",
        }
    }
}

/// Query options sent along with an append request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppendOptions {
    pub insert_as: InsertAs,
    /// `None` leaves the choice to the service (it defaults to overwrite).
    pub insert_data_option: Option<InsertDataOption>,
}

impl AppendOptions {
    pub fn new(insert_as: InsertAs) -> Self {
        Self {
            insert_as,
            insert_data_option: None,
        }
    }

    pub fn with_insert_data_option(mut self, option: InsertDataOption) -> Self {
        self.insert_data_option = Some(option);
        self
    }
}

/// Read and append access to spreadsheet values.
#[allow(async_fn_in_trait)]
pub trait ValuesClient {
    /// Returns the rows stored in `range`, or an empty vector when the range
    /// holds no data.
    async fn read_values(
        &self,
        spreadsheet_id: &str,
        range: &str,
    ) -> Result<Vec<Row>, google_sheets4::Error>;

    /// Appends `rows` after the table found in `range`.
    async fn append_values(
        &self,
        spreadsheet_id: &str,
        range: &str,
        rows: Vec<Row>,
        options: &AppendOptions,
    ) -> Result<AppendValuesResponse, google_sheets4::Error>;
}

impl ValuesClient for SheetsHub {
    async fn read_values(
        &self,
        spreadsheet_id: &str,
        range: &str,
    ) -> Result<Vec<Row>, google_sheets4::Error> {
        debug!("🔍 values.get {} on {}", range, spreadsheet_id);
        let (_, value_range) = self
            .spreadsheets()
            .values_get(spreadsheet_id, range)
            .doit()
            .await?;
        Ok(value_range.values.unwrap_or_default())
    }

    async fn append_values(
        &self,
        spreadsheet_id: &str,
        range: &str,
        rows: Vec<Row>,
        options: &AppendOptions,
    ) -> Result<AppendValuesResponse, google_sheets4::Error> {
        debug!(
            "🔍 values.append {} rows to {} on {} ({})",
            rows.len(),
            range,
            spreadsheet_id,
            options.insert_as
        );

        let request = ValueRange {
            values: Some(rows),
            major_dimension: Some("ROWS".to_string()),
            ..Default::default()
        };

        let mut call = self
            .spreadsheets()
            .values_append(request, spreadsheet_id, range)
            .value_input_option(options.insert_as.as_str());
        if let Some(insert_data_option) = options.insert_data_option {
            call = call.insert_data_option(insert_data_option.as_str());
        }

        let (_, response) = call.doit().await?;
        Ok(response)
    }
}
