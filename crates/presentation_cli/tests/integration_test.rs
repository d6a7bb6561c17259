//! Integration tests for CLI
//!
//! These tests verify CLI functionality without running actual commands,
//! but instead test the command parsing and structure.

#![allow(clippy::panic)] // Allow panic! in tests for clear failure messages

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;
use domain::{DistanceUnit, TravelMode};

// Mock CLI structure for testing (mirrors main.rs)
#[derive(Parser)]
#[command(name = "route-planner")]
#[command(author, version, about = "Plan routes and find places along the way", long_about = None)]
struct Cli {
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    Route {
        start: String,
        destination: String,
        #[arg(long, default_value = "car")]
        vehicle: TravelMode,
        #[arg(long, default_value = "metric")]
        unit: DistanceUnit,
        #[arg(long)]
        no_places: bool,
    },
    Suggest {
        query: String,
        #[arg(short, long)]
        limit: Option<u8>,
    },
    Places {
        #[arg(allow_negative_numbers = true)]
        latitude: f64,
        #[arg(allow_negative_numbers = true)]
        longitude: f64,
        keyword: String,
        #[arg(long)]
        radius_km: Option<f64>,
    },
}

fn parse_args(args: &[&str]) -> Result<Cli, clap::Error> {
    let os_args: Vec<OsString> = args.iter().map(OsString::from).collect();
    Cli::try_parse_from(os_args)
}

#[test]
fn cli_parses_route_with_defaults() {
    let cli = parse_args(&["route-planner", "route", "Berlin", "Hamburg"]).unwrap();
    if let Commands::Route {
        start,
        destination,
        vehicle,
        unit,
        no_places,
    } = cli.command
    {
        assert_eq!(start, "Berlin");
        assert_eq!(destination, "Hamburg");
        assert_eq!(vehicle, TravelMode::Car);
        assert_eq!(unit, DistanceUnit::Metric);
        assert!(!no_places);
    } else {
        panic!("Expected Route command");
    }
}

#[test]
fn cli_parses_route_options() {
    let cli = parse_args(&[
        "route-planner",
        "route",
        "New York",
        "Boston",
        "--vehicle",
        "bike",
        "--unit",
        "imperial",
        "--no-places",
    ])
    .unwrap();
    if let Commands::Route {
        start,
        vehicle,
        unit,
        no_places,
        ..
    } = cli.command
    {
        assert_eq!(start, "New York");
        assert_eq!(vehicle, TravelMode::Bike);
        assert_eq!(unit, DistanceUnit::Imperial);
        assert!(no_places);
    } else {
        panic!("Expected Route command");
    }
}

#[test]
fn cli_rejects_unknown_vehicle() {
    let result = parse_args(&["route-planner", "route", "A1", "B2", "--vehicle", "boat"]);
    assert!(result.is_err());
}

#[test]
fn cli_rejects_unknown_unit() {
    let result = parse_args(&["route-planner", "route", "A1", "B2", "--unit", "furlongs"]);
    assert!(result.is_err());
}

#[test]
fn cli_route_requires_destination() {
    let result = parse_args(&["route-planner", "route", "Berlin"]);
    assert!(result.is_err());
}

#[test]
fn cli_parses_suggest_command() {
    let cli = parse_args(&["route-planner", "suggest", "Ham"]).unwrap();
    if let Commands::Suggest { query, limit } = cli.command {
        assert_eq!(query, "Ham");
        assert!(limit.is_none());
    } else {
        panic!("Expected Suggest command");
    }
}

#[test]
fn cli_parses_suggest_with_limit() {
    let cli = parse_args(&["route-planner", "suggest", "Ham", "-l", "3"]).unwrap();
    if let Commands::Suggest { limit, .. } = cli.command {
        assert_eq!(limit, Some(3));
    } else {
        panic!("Expected Suggest command");
    }
}

#[test]
fn cli_parses_places_with_negative_coordinates() {
    let cli = parse_args(&[
        "route-planner",
        "places",
        "-33.87",
        "-151.21",
        "fuel",
        "--radius-km",
        "1.5",
    ])
    .unwrap();
    if let Commands::Places {
        latitude,
        longitude,
        keyword,
        radius_km,
    } = cli.command
    {
        assert!((latitude - -33.87).abs() < f64::EPSILON);
        assert!((longitude - -151.21).abs() < f64::EPSILON);
        assert_eq!(keyword, "fuel");
        assert_eq!(radius_km, Some(1.5));
    } else {
        panic!("Expected Places command");
    }
}

#[test]
fn cli_places_requires_keyword() {
    let result = parse_args(&["route-planner", "places", "52.5", "13.4"]);
    assert!(result.is_err());
}

#[test]
fn cli_parses_verbose_flag() {
    let cli = parse_args(&["route-planner", "-v", "suggest", "Ham"]).unwrap();
    assert_eq!(cli.verbose, 1);
}

#[test]
fn cli_parses_multiple_verbose_flags() {
    let cli = parse_args(&["route-planner", "-vvv", "suggest", "Ham"]).unwrap();
    assert_eq!(cli.verbose, 3);
}

#[test]
fn cli_parses_global_config_after_subcommand() {
    let cli = parse_args(&["route-planner", "suggest", "Ham", "--config", "custom.toml"]).unwrap();
    assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
}

#[test]
fn cli_requires_subcommand() {
    let result = parse_args(&["route-planner"]);
    assert!(result.is_err());
}
