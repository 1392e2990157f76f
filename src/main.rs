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

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use sheets_crud::auth::AuthManager;
use sheets_crud::config::Config;
use sheets_crud::files;
use sheets_crud::sheets::{
    AppendOptions, InsertAs, InsertDataOption, Row, SheetOperations, SheetsHub,
};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone, ValueEnum)]
enum InsertMode {
    Raw,
    UserEntered,
}

impl From<InsertMode> for InsertAs {
    fn from(mode: InsertMode) -> Self {
        match mode {
            InsertMode::Raw => InsertAs::Raw,
            InsertMode::UserEntered => InsertAs::UserEntered,
        }
    }
}

#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn as_env_filter(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Debug, Args)]
struct AppendArgs {
    /// Sheet name or A1 range to append to (e.g. Sheet1 or Sheet1!A1:D)
    #[arg(long)]
    range: String,

    /// Rows as a JSON array of arrays
    #[arg(long, conflicts_with = "values_file", required_unless_present = "values_file")]
    values: Option<String>,

    /// File holding rows as a JSON array of arrays
    #[arg(long)]
    values_file: Option<PathBuf>,

    /// How the service should interpret the values
    #[arg(long, value_enum, default_value = "raw")]
    insert_as: InsertMode,

    /// Insert new rows instead of overwriting cells below the table
    #[arg(long)]
    insert_rows: bool,
}

impl AppendArgs {
    fn rows(&self) -> anyhow::Result<Vec<Row>> {
        match (&self.values, &self.values_file) {
            (Some(inline), _) => files::parse_rows(inline),
            (None, Some(path)) => files::load_rows(path),
            (None, None) => anyhow::bail!("Either --values or --values-file is required"),
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Append rows in the order given
    Append(AppendArgs),
    /// Append rows by column name; the first row lists the target columns
    AppendColumns(AppendArgs),
    /// Print the header columns of a range
    Columns {
        /// Sheet name or A1 range holding the header row
        #[arg(long)]
        range: String,
    },
}

#[derive(Parser)]
#[command(name = "sheets-crud")]
#[command(about = "Append rows to Google Sheets by position or by column name")]
#[command(version)]
struct Cli {
    /// Google Sheet ID (from the sheet URL)
    #[arg(long)]
    spreadsheet_id: String,

    /// Service account key or OAuth2 client secret
    #[arg(long, global = true, default_value = "credentials.json")]
    credentials: PathBuf,

    /// Where OAuth2 tokens are cached (installed-app credentials only)
    #[arg(long, global = true)]
    token_cache: Option<PathBuf>,

    /// Controls verbosity of log output (overrides RUST_LOG when provided)
    #[arg(long, value_enum, default_value = "info", global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Commands,
}

fn init_logging(level: &LogLevel) -> anyhow::Result<()> {
    use tracing_subscriber::{EnvFilter, fmt};

    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level.as_env_filter()))?;

    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize default crypto provider for rustls
    rustls::crypto::ring::default_provider()
        .install_default()
        .map_err(|_| anyhow::anyhow!("Failed to install rustls crypto provider"))?;

    let cli = Cli::parse();
    init_logging(&cli.log_level)?;

    let config = Config::new(cli.spreadsheet_id, cli.credentials, cli.token_cache);
    config.validate()?;

    let sheet = connect(&config).await?;

    match cli.command {
        Commands::Append(args) => {
            let rows = args.rows()?;
            let updated = sheet.append(&args.range, rows, &append_options(&args)).await?;
            println!("{} rows updated", updated);
        }
        Commands::AppendColumns(args) => {
            let rows = args.rows()?;
            let updated = sheet
                .append_columns(&args.range, rows, &append_options(&args))
                .await?;
            println!("{} rows updated", updated);
        }
        Commands::Columns { range } => {
            let columns = sheet.get_columns(&range).await?;
            for (name, letter) in columns.columns() {
                println!("{} -> {}", name, letter);
            }
        }
    }

    Ok(())
}

async fn connect(config: &Config) -> anyhow::Result<SheetOperations<SheetsHub>> {
    info!("📊 Spreadsheet: {}", config.spreadsheet_id);

    let auth_manager =
        AuthManager::new(config.credentials_path.clone(), config.token_cache_path.clone());
    let hub = auth_manager.build_hub().await.with_context(|| {
        format!(
            "Failed to connect with credentials {:?}",
            auth_manager.credentials_path()
        )
    })?;

    Ok(SheetOperations::new(hub, config.spreadsheet_id.clone()))
}

fn append_options(args: &AppendArgs) -> AppendOptions {
    let options = AppendOptions::new(args.insert_as.clone().into());
    if args.insert_rows {
        options.with_insert_data_option(InsertDataOption::InsertRows)
    } else {
        options
    }
}
