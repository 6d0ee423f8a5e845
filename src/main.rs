//! prodadmin - Entry Point

use clap::Parser;
use prodadmin::api::HttpProductSource;
use prodadmin::model::{AppError, ExportError};
use prodadmin::view::StartupOptions;
use prodadmin::view_state::{PageSize, SortKey, SortSpec};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, info};

/// prodadmin - terminal admin client for a remote product catalog
#[derive(Parser, Debug)]
#[command(name = "prodadmin")]
#[command(version)]
#[command(about = "Browse, search, edit and export products from a catalog REST service")]
pub struct Args {
    /// Product collection URL
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Rows per page on startup (must be positive)
    #[arg(long, value_name = "N", value_parser = parse_page_size)]
    pub page_size: Option<PageSize>,

    /// Start with a title search applied
    #[arg(short, long)]
    pub search: Option<String>,

    /// Start sorted by a column
    #[arg(long, value_name = "FIELD", value_parser = parse_sort_key)]
    pub sort: Option<SortKey>,

    /// Sort descending instead of ascending (with --sort)
    #[arg(long, requires = "sort")]
    pub desc: bool,

    /// Fetch, apply search and sort, write CSV to PATH and exit without the TUI
    #[arg(long, value_name = "PATH")]
    pub export: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,
}

impl Args {
    fn sort_spec(&self) -> Option<SortSpec> {
        self.sort.map(|key| {
            if self.desc {
                SortSpec::descending(key)
            } else {
                SortSpec::ascending(key)
            }
        })
    }
}

fn parse_page_size(raw: &str) -> Result<PageSize, String> {
    let size: usize = raw
        .parse()
        .map_err(|_| format!("'{raw}' is not a whole number"))?;
    PageSize::new(size).map_err(|err| err.to_string())
}

fn parse_sort_key(raw: &str) -> Result<SortKey, String> {
    SortKey::parse(raw)
        .ok_or_else(|| "expected one of: id, title, price, category, description".to_string())
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = prodadmin::config::load_config_with_precedence(args.config.clone())?;
        let merged = prodadmin::config::merge_config(config_file)?;
        let with_env = prodadmin::config::apply_env_overrides(merged);

        prodadmin::config::apply_cli_overrides(
            with_env,
            prodadmin::config::CliOverrides {
                api_url: args.api_url.clone(),
                page_size: args.page_size,
                export_path: args.export.clone(),
                no_color: args.no_color,
            },
        )
    };

    prodadmin::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let source = HttpProductSource::new(config.api_url.clone(), config.request_timeout)?;

    let options = StartupOptions {
        page_size: config.page_size,
        search: args.search.clone(),
        sort: args.sort_spec(),
        export_path: config.export_path.clone(),
        no_color: config.no_color,
    };

    if args.export.is_some() {
        return run_headless_export(&source, &options);
    }

    prodadmin::view::run_with_source(source, options)?;

    Ok(ExitCode::SUCCESS)
}

/// Headless `--export`: write the CSV and report on stdout.
fn run_headless_export(
    source: &HttpProductSource,
    options: &StartupOptions,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let path = &options.export_path;
    let result = prodadmin::export::export_from_source(source, options.engine(), path);
    if report_export(result, path)? {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

/// Print the outcome of a headless export.
///
/// Returns whether a file was written. An empty result is reported on stderr
/// and is not an error; every other failure is passed back to `main`.
fn report_export(result: Result<usize, AppError>, path: &Path) -> Result<bool, AppError> {
    match result {
        Ok(count) => {
            println!("Exported {count} products to {}", path.display());
            Ok(true)
        }
        Err(AppError::Export(ExportError::NothingToExport)) => {
            eprintln!("Nothing to export");
            Ok(false)
        }
        Err(err) => {
            error!(error = %err, "Headless export failed");
            Err(err)
        }
    }
}
