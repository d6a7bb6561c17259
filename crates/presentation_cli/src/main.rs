//! Route planner CLI
//!
//! Resolves two place names, plans a route between them and lists
//! restaurants and fuel stations along the way.

#![allow(clippy::print_stdout)]

mod render;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use application::{ActionRunner, ApplicationError, RouteRequest};
use clap::{Parser, Subcommand};
use domain::{DistanceUnit, GeoPoint, TravelMode};
use infrastructure::{AppConfig, build_route_planner, init_tracing};
use tracing::debug;

/// Route planner CLI
#[derive(Parser)]
#[command(name = "route-planner")]
#[command(author, version, about = "Plan routes and find places along the way", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file (default: ./route-planner.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Plan a route between two places
    ///
    /// Example: route-planner route Berlin Hamburg --unit imperial
    Route {
        /// Start location
        start: String,

        /// Destination location
        destination: String,

        /// Vehicle profile (car, bike, foot)
        #[arg(long, default_value = "car")]
        vehicle: TravelMode,

        /// Distance unit (metric, imperial)
        #[arg(long, default_value = "metric")]
        unit: DistanceUnit,

        /// Skip the nearby-places searches
        #[arg(long)]
        no_places: bool,
    },

    /// Show autocomplete candidates for a partial place name
    Suggest {
        /// Partial place name (at least three characters)
        query: String,

        /// Maximum number of candidates
        #[arg(short, long)]
        limit: Option<u8>,
    },

    /// Search for places around a coordinate
    ///
    /// Example: route-planner places 52.52 13.405 restaurant --radius-km 1
    Places {
        /// Latitude of the search center
        #[arg(allow_negative_numbers = true)]
        latitude: f64,

        /// Longitude of the search center
        #[arg(allow_negative_numbers = true)]
        longitude: f64,

        /// Search keyword, e.g. "restaurant" or "fuel"
        keyword: String,

        /// Search radius in kilometres
        #[arg(long)]
        radius_km: Option<f64>,
    },
}

/// Run one action on the runner; Ctrl-C cancels it
async fn run_action<F>(runner: &ActionRunner, action: F) -> Result<String, ApplicationError>
where
    F: Future<Output = Result<String, ApplicationError>> + Send + 'static,
{
    let handle = runner.submit(action)?;

    tokio::select! {
        result = handle.join() => result,
        _ = tokio::signal::ctrl_c() => {
            runner.cancel();
            Err(ApplicationError::Cancelled)
        },
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose).context("failed to initialize logging")?;

    let mut config = AppConfig::load_from(cli.config.as_deref())
        .context("failed to load configuration")?;
    if let Commands::Suggest {
        limit: Some(limit), ..
    } = &cli.command
    {
        config.planner.suggestion_limit = *limit;
    }
    debug!(?config, "Configuration loaded");

    let planner = Arc::new(build_route_planner(&config)?);
    let runner = ActionRunner::new();

    let outcome = match cli.command {
        Commands::Route {
            start,
            destination,
            vehicle,
            unit,
            no_places,
        } => {
            let mut request = RouteRequest::new(start, destination)
                .with_mode(vehicle)
                .with_unit(unit);
            if no_places {
                request = request.without_places();
            }

            println!("🗺️  Planning route...");
            run_action(&runner, async move {
                let plan = planner.plan(&request).await?;
                Ok::<_, ApplicationError>(render::render_plan(&plan))
            })
            .await
        },

        Commands::Suggest { query, .. } => {
            run_action(&runner, async move {
                let suggestions = planner.suggest(&query).await?;
                Ok::<_, ApplicationError>(render::render_suggestions(&suggestions))
            })
            .await
        },

        Commands::Places {
            latitude,
            longitude,
            keyword,
            radius_km,
        } => {
            run_action(&runner, async move {
                let center = GeoPoint::new(latitude, longitude)?;
                let places = planner.search_places(center, &keyword, radius_km).await?;
                Ok::<_, ApplicationError>(render::render_places(&keyword, center, &places))
            })
            .await
        },
    };

    match outcome {
        Ok(text) => println!("{text}"),
        Err(e) if e.is_empty_state() => println!("{}", e.user_message()),
        Err(e) => {
            println!("{}", e.user_message());
            std::process::exit(1);
        },
    }

    Ok(())
}
