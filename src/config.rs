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

//! Configuration management for the sheets-crud command line.
//!
//! Holds the target spreadsheet and credential locations, and validates them
//! before any network call is made.

use std::path::PathBuf;

/// Runtime settings shared by every subcommand.
#[derive(Debug, Clone)]
pub struct Config {
    /// Google Sheet ID to work with
    pub spreadsheet_id: String,
    /// Service account key or OAuth2 client secret
    pub credentials_path: PathBuf,
    /// Where installed-flow tokens are cached
    pub token_cache_path: Option<PathBuf>,
}

impl Config {
    /// Creates a new configuration instance.
    ///
    /// # Arguments
    ///
    /// * `spreadsheet_id` - Google Sheet ID
    /// * `credentials_path` - Path to the credentials JSON file
    /// * `token_cache_path` - Optional token cache location
    pub fn new(
        spreadsheet_id: String,
        credentials_path: PathBuf,
        token_cache_path: Option<PathBuf>,
    ) -> Self {
        Self {
            spreadsheet_id,
            credentials_path,
            token_cache_path,
        }
    }

    /// Validates the configuration settings.
    ///
    /// # Errors
    ///
    /// * If the spreadsheet ID is empty
    /// * If the credentials file does not exist or is not a file
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.spreadsheet_id.trim().is_empty() {
            anyhow::bail!("Spreadsheet ID cannot be empty");
        }

        if !self.credentials_path.exists() {
            anyhow::bail!(
                "Credentials file does not exist: {:?}",
                self.credentials_path
            );
        }

        if !self.credentials_path.is_file() {
            anyhow::bail!(
                "Credentials path is not a file: {:?}",
                self.credentials_path
            );
        }

        Ok(())
    }
}
