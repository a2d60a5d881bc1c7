//! Companies Directory - Entry Point

use clap::Parser;
use compdir::query::{PageSize, SortDirection, SortField, SortSpec};
use compdir::source::FetchPolicy;
use compdir::state::ViewMode;
use std::path::PathBuf;
use tracing::info;

/// Companies Directory - browse, filter and sort a company list in the terminal
#[derive(Parser, Debug)]
#[command(name = "compdir")]
#[command(version)]
#[command(about = "TUI application for browsing, filtering and sorting a directory of companies")]
pub struct Args {
    /// Base URL of the directory server (companies are read from {URL}/companies)
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// What to do when the server cannot be reached: strict or fallback
    #[arg(long, value_name = "POLICY")]
    pub policy: Option<FetchPolicy>,

    /// Number of companies per page (must be positive)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub page_size: Option<u32>,

    /// Initial view: cards or table
    #[arg(long, value_name = "MODE")]
    pub view: Option<ViewMode>,

    /// Start with a search term applied
    #[arg(short, long)]
    pub search: Option<String>,

    /// Start filtered to one industry (exact match)
    #[arg(short, long)]
    pub industry: Option<String>,

    /// Start filtered to one location (exact match)
    #[arg(short, long)]
    pub location: Option<String>,

    /// Sort field: name, industry, location, employees or founded
    #[arg(long, default_value = "name")]
    pub sort: SortField,

    /// Sort descending instead of ascending
    #[arg(long)]
    pub desc: bool,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    fn cli_overrides(&self) -> compdir::config::CliOverrides {
        compdir::config::CliOverrides {
            api_base_url: self.api_url.clone(),
            fetch_policy: self.policy,
            page_size: self
                .page_size
                .and_then(|n| PageSize::new(usize::try_from(n).ok()?)),
            view_mode: self.view,
        }
    }

    fn sort_spec(&self) -> SortSpec {
        let direction = if self.desc {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        SortSpec::new(self.sort, direction)
    }

    fn view_args(&self) -> compdir::view::CliArgs {
        compdir::view::CliArgs {
            search: self.search.clone(),
            industry: self.industry.clone(),
            location: self.location.clone(),
            sort: self.sort_spec(),
            no_color: self.no_color,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Set NO_COLOR env var if --no-color flag is passed
    // This ensures consistent color handling throughout the application
    if args.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        // 1. Load config file (or None if missing)
        let config_file = compdir::config::load_config_with_precedence(args.config.clone())?;

        // 2. Merge with defaults
        let merged = compdir::config::merge_config(config_file);

        // 3. Apply environment variable overrides
        let with_env = compdir::config::apply_env_overrides(merged);

        // 4. Apply CLI argument overrides (only flags that were given)
        compdir::config::apply_cli_overrides(with_env, args.cli_overrides())
    };

    compdir::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    compdir::view::run_with_config(&config, args.view_args())?;

    Ok(())
}
