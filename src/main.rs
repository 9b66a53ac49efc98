//! Vehicle-Match: natural-language vehicle matching and ranking
//!
//! Command-line entry point: ranks a catalog file for a query.

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use vehicle_match::{config, Catalog, SearchController, SearchRequest};

const ENV_HELP: &str = "\
An empty query prints the whole catalog.

ENVIRONMENT VARIABLES:
    VEHICLE_MATCH_SETTINGS_PATH    Path to settings.yml
    VEHICLE_MATCH_CATALOG          Catalog file
    VEHICLE_MATCH_DEBUG            Enable debug logging (true/false)
    VEHICLE_MATCH_REMOTE_TIMEOUT   Remote relevance timeout in seconds
    VEHICLE_MATCH_CACHE_ENABLED    Enable the result cache (true/false)
    RUST_LOG                       Log filter, overrides settings";

/// Natural-language vehicle matching and ranking
#[derive(Parser, Debug)]
#[command(name = "vehicle-match")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(after_help = ENV_HELP)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// JSON array of vehicles to rank
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Free-text query (use `--` before words starting with '-')
    #[arg(value_name = "QUERY")]
    query: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration
    let mut settings = config::load(args.config.clone())?;
    if let Some(path) = args.catalog.clone() {
        settings.catalog.path = Some(path);
    }

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting vehicle-match v{}", vehicle_match::VERSION);

    // Load catalog
    let Some(path) = settings.catalog.path.clone() else {
        bail!("No catalog given: pass --catalog <FILE> or set VEHICLE_MATCH_CATALOG");
    };
    let catalog = Catalog::from_file(&path)
        .with_context(|| format!("Failed to load catalog from {}", path.display()))?;

    // Rank
    let controller = SearchController::from_settings(&settings.search);
    let request = SearchRequest::new(args.query.join(" "));
    let outcome = controller.execute(&request, &catalog).await;

    info!(
        "Returned {} of {} vehicles ({}) in {} ms",
        outcome.len(),
        catalog.len(),
        outcome.source,
        outcome.elapsed_ms
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome.vehicles)?);
    } else {
        for vehicle in &outcome.vehicles {
            println!("{}\t{}\t${:.0}", vehicle.id, vehicle.title(), vehicle.price);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_parse_query_and_flags() {
        let args =
            Args::try_parse_from(["vehicle-match", "--catalog", "cars.json", "--json", "family", "suv"])
                .unwrap();
        assert_eq!(args.catalog, Some(PathBuf::from("cars.json")));
        assert!(args.json);
        assert!(args.config.is_none());
        assert_eq!(args.query, vec!["family", "suv"]);
    }

    #[test]
    fn test_short_config_flag() {
        let args = Args::try_parse_from(["vehicle-match", "-c", "s.yml", "nsx"]).unwrap();
        assert_eq!(args.config, Some(PathBuf::from("s.yml")));
        assert_eq!(args.query, vec!["nsx"]);
    }

    #[test]
    fn test_empty_query() {
        let args = Args::try_parse_from(["vehicle-match"]).unwrap();
        assert!(args.query.is_empty());
    }

    #[test]
    fn test_double_dash() {
        let args = Args::try_parse_from(["vehicle-match", "--", "-fast", "car"]).unwrap();
        assert_eq!(args.query, vec!["-fast", "car"]);
    }

    #[test]
    fn test_parse_errors() {
        assert!(Args::try_parse_from(["vehicle-match", "--catalog"]).is_err());
        assert_eq!(
            Args::try_parse_from(["vehicle-match", "--bogus"]).unwrap_err().kind(),
            ErrorKind::UnknownArgument
        );
        assert_eq!(
            Args::try_parse_from(["vehicle-match", "-V"]).unwrap_err().kind(),
            ErrorKind::DisplayVersion
        );
        assert_eq!(
            Args::try_parse_from(["vehicle-match", "--help"]).unwrap_err().kind(),
            ErrorKind::DisplayHelp
        );
    }
}
