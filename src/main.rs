use std::env;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use routecast::models::{Horizon, RouteReport};
use routecast::{RouteEvaluator, RoutecastConfig};

const USAGE: &str = "Usage: routecast [--hourly | --days <1|5>] <start> [via...] <end>

Cities are visited in the order given. Set ROUTECAST_API_KEY to your
weather API key; RUST_LOG controls log verbosity.";

#[derive(Debug)]
struct CliArgs {
    cities: Vec<String>,
    horizon: Horizon,
}

fn parse_args(args: &[String]) -> Result<Option<CliArgs>, String> {
    let mut cities = Vec::new();
    let mut horizon = Horizon::Hourly;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(None),
            "--hourly" => horizon = Horizon::Hourly,
            "--days" => {
                let value = iter
                    .next()
                    .ok_or_else(|| "--days needs a value".to_string())?;
                let days: u32 = value
                    .parse()
                    .map_err(|_| format!("--days expects a number, got '{value}'"))?;
                horizon = Horizon::try_from_days(days).map_err(|e| e.user_message())?;
            }
            other if other.starts_with('-') => {
                return Err(format!("Unknown option '{other}'\n\n{USAGE}"));
            }
            city => cities.push(city.to_string()),
        }
    }

    Ok(Some(CliArgs { cities, horizon }))
}

fn print_report(report: &RouteReport) {
    for city_report in &report.cities {
        println!(
            "{} ({}) - {} weather",
            city_report.city.query_name,
            city_report.city.translated_name,
            city_report.verdict()
        );

        for conditions in &city_report.conditions {
            let when = conditions
                .timestamp
                .map_or_else(|| "-".to_string(), |t| t.format("%Y-%m-%d %H:%M").to_string());
            println!(
                "  {}  temp {}  wind {}  precip {}  humidity {}",
                when,
                conditions.format_temperature(),
                conditions.format_wind(),
                conditions.format_precipitation(),
                conditions.format_humidity()
            );
        }
    }

    let legs = report.leg_distances_km();
    if !legs.is_empty() {
        println!();
        for (pair, distance) in report.cities.windows(2).zip(&legs) {
            println!(
                "{} -> {}: {:.0} km",
                pair[0].city.query_name, pair[1].city.query_name, distance
            );
        }
        println!("Total: {:.0} km", report.total_distance_km());
    }

    println!();
    if report.all_clear() {
        println!("Good weather along the whole route.");
    } else {
        println!("Bad weather on at least one stop. Plan accordingly.");
    }
}

fn run(args: &[String]) -> Result<(), String> {
    let Some(cli) = parse_args(args)? else {
        println!("{USAGE}");
        return Ok(());
    };

    if cli.cities.len() < 2 {
        return Err(format!("Enter both a start and an end city.\n\n{USAGE}"));
    }

    let config = RoutecastConfig::from_env().map_err(|e| format!("{e:#}"))?;
    let evaluator = RouteEvaluator::new(&config).map_err(|e| e.user_message())?;
    let report = evaluator
        .evaluate(&cli.cities, cli.horizon)
        .map_err(|e| e.user_message())?;

    print_report(&report);
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}
