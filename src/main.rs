//! pagedots - Entry Point

use clap::Parser;
use pagedots::config::CliOverrides;
use pagedots::model::AppError;
use pagedots::view::{ColorConfig, DemoArgs};
use std::path::PathBuf;
use tracing::info;

/// pagedots - interactive demo of a compact page indicator
#[derive(Parser, Debug)]
#[command(name = "pagedots")]
#[command(version)]
#[command(about = "Interactive demo of a compact, scrolling page indicator")]
pub struct Args {
    /// Number of pages to start with
    #[arg(short, long, default_value = "20")]
    pub pages: usize,

    /// Initially selected page (zero based)
    #[arg(long, default_value = "0")]
    pub page: usize,

    /// Visible dot slots (must be positive)
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
    pub display_count: Option<u64>,

    /// Duration of page transitions in milliseconds
    #[arg(long)]
    pub animate_ms: Option<u64>,

    /// Hide the indicator when there is at most one page
    #[arg(long)]
    pub hides_for_single_page: bool,

    /// Apply page changes without animation
    #[arg(long)]
    pub no_animate: bool,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    /// CLI flags that take part in config resolution.
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            display_count: self.display_count.map(|count| count as usize),
            animate_ms: self.animate_ms,
            hides_for_single_page: self.hides_for_single_page.then_some(true),
            no_animate: self.no_animate,
        }
    }
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Set NO_COLOR env var if --no-color flag is passed
    // This ensures consistent color handling throughout the application
    if args.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = pagedots::config::load_config_with_precedence(args.config.clone())?;
        let merged = pagedots::config::merge_config(config_file)?;
        let with_env = pagedots::config::apply_env_overrides(merged);
        pagedots::config::apply_cli_overrides(with_env, args.overrides())
    };

    pagedots::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let demo = DemoArgs {
        pages: args.pages,
        start_page: args.page,
        colors: ColorConfig::from_env_and_args(args.no_color),
    };

    pagedots::view::run(&config, demo)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::time::Duration;

    #[test]
    fn test_help_does_not_error() {
        let result = Args::try_parse_from(["pagedots", "--help"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let result = Args::try_parse_from(["pagedots", "--version"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_no_args_defaults() {
        let args = Args::parse_from(["pagedots"]);
        assert_eq!(args.pages, 20);
        assert_eq!(args.page, 0);
        assert_eq!(args.display_count, None);
        assert_eq!(args.animate_ms, None);
        assert!(!args.hides_for_single_page);
        assert!(!args.no_animate);
        assert!(!args.no_color);
        assert_eq!(args.config, None);
    }

    #[test]
    fn test_pages_short_and_long() {
        assert_eq!(Args::parse_from(["pagedots", "-p", "3"]).pages, 3);
        assert_eq!(Args::parse_from(["pagedots", "--pages", "50"]).pages, 50);
    }

    #[test]
    fn test_zero_pages_is_allowed() {
        let args = Args::parse_from(["pagedots", "--pages", "0"]);
        assert_eq!(args.pages, 0);
    }

    #[test]
    fn test_display_count_rejects_zero() {
        let result = Args::try_parse_from(["pagedots", "--display-count", "0"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_pages_rejects_negative() {
        let result = Args::try_parse_from(["pagedots", "--pages", "-1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_path() {
        let args = Args::parse_from(["pagedots", "--config", "/custom/config.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_unset_flags_do_not_override() {
        let overrides = Args::parse_from(["pagedots"]).overrides();
        assert_eq!(overrides, CliOverrides::default());
    }

    #[test]
    fn test_flags_map_to_overrides() {
        let args = Args::parse_from([
            "pagedots",
            "-d",
            "5",
            "--animate-ms",
            "120",
            "--hides-for-single-page",
        ]);
        let overrides = args.overrides();
        assert_eq!(overrides.display_count, Some(5));
        assert_eq!(overrides.animate_ms, Some(120));
        assert_eq!(overrides.hides_for_single_page, Some(true));
        assert!(!overrides.no_animate);
    }

    #[test]
    fn test_display_count_flows_through_config_precedence_chain() {
        use pagedots::config::{
            apply_cli_overrides, apply_env_overrides, merge_config, ConfigFile, DotConfig,
        };

        let config_file = ConfigFile {
            dots: Some(DotConfig {
                display_count: 9,
                ..DotConfig::default()
            }),
            animate_duration_ms: Some(500),
            ..ConfigFile::default()
        };

        let merged = merge_config(Some(config_file)).unwrap();
        assert_eq!(merged.dots.display_count, 9, "Config file should override default");

        // Env var not set in this test
        let with_env = apply_env_overrides(merged);

        let args = Args::parse_from(["pagedots", "--display-count", "4", "--no-animate"]);
        let with_cli = apply_cli_overrides(with_env, args.overrides());
        assert_eq!(
            with_cli.dots.display_count, 4,
            "CLI display count should override all other sources"
        );
        assert_eq!(with_cli.animate_duration, Duration::ZERO);
    }
}
