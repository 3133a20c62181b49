// Command-line front end for the galaxy generator.
//
// Usage:
//   galaxy [OPTIONS]
//     --shape <SHAPE>     two-arm-spiral, four-arm-spiral, elliptical,
//                         irregular-cluster or ring (default: from config)
//     --seed <N>          RNG seed (default: random, printed for reuse)
//     --count <N>         Exact number of systems (overrides the config range)
//     --config <PATH>     JSON generator configuration
//     --json              Print the full galaxy snapshot as JSON
//
// Set RUST_LOG=debug to see the generation phases.

use galaxy_core::{
    analyze_connectivity, ConnectivityReport, GalaxyConfig, GalaxyGenerator, GalaxyShape,
    GalaxySummary,
};
use serde::Serialize;

#[derive(Debug, Default)]
struct CliOptions {
    shape: Option<GalaxyShape>,
    seed: Option<u64>,
    count: Option<u32>,
    config_path: Option<String>,
    json: bool,
}

/// What the CLI prints when `--json` is not given.
#[derive(Debug, Serialize)]
struct Report {
    seed: u64,
    summary: GalaxySummary,
    connectivity: ConnectivityReport,
}

fn main() {
    env_logger::init();
    let options = parse_args();

    let mut config = match &options.config_path {
        Some(path) => load_config(path),
        None => GalaxyConfig::default(),
    };
    if let Some(count) = options.count {
        config = config.with_system_count(count);
    }

    let generator = GalaxyGenerator::new(config).unwrap_or_else(|e| fail(&e.to_string()));
    let seed = options.seed.unwrap_or_else(rand::random);
    log::debug!("using seed {}", seed);

    let galaxy = generator
        .generate_seeded(options.shape, seed)
        .unwrap_or_else(|e| fail(&format!("generation failed: {e}")));

    if options.json {
        match galaxy.to_json_pretty() {
            Ok(json) => println!("{json}"),
            Err(e) => fail(&e.to_string()),
        }
        return;
    }

    let connectivity = analyze_connectivity(&galaxy);
    let report = Report {
        seed,
        summary: galaxy.summary_with(&connectivity),
        connectivity,
    };
    println!("seed {}", report.seed);
    println!("{}", report.summary.describe());
    for (star_type, count) in &report.summary.star_types {
        println!("  {:?}: {}", star_type, count);
    }
    if let Some(start) = galaxy.player_system() {
        println!("player starts at {} ({})", start.name, start.id);
    }
    println!(
        "{} connected component(s), largest has {} systems",
        report.connectivity.components.len(),
        report.connectivity.largest_component_size()
    );
    match serde_json::to_string(&report) {
        Ok(line) => log::debug!("report: {line}"),
        Err(e) => log::warn!("could not serialize report: {e}"),
    }
}

fn load_config(path: &str) -> GalaxyConfig {
    let text = std::fs::read_to_string(path)
        .unwrap_or_else(|e| fail(&format!("cannot read config {path}: {e}")));
    GalaxyConfig::from_json(&text).unwrap_or_else(|e| fail(&format!("invalid config {path}: {e}")))
}

fn fail(message: &str) -> ! {
    eprintln!("{message}");
    std::process::exit(1);
}

/// Parse command-line arguments with plain `std::env::args()` matching.
fn parse_args() -> CliOptions {
    let args: Vec<String> = std::env::args().skip(1).collect();
    parse_from(&args).unwrap_or_else(|e| fail(&e))
}

fn parse_from(args: &[String]) -> Result<CliOptions, String> {
    let mut options = CliOptions::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--shape" => {
                let value = iter.next().ok_or("--shape requires a value")?;
                options.shape = Some(value.parse()?);
            }
            "--seed" => {
                let value = iter.next().ok_or("--seed requires a value")?;
                options.seed = Some(
                    value
                        .parse()
                        .map_err(|_| format!("--seed expects an unsigned integer, got '{value}'"))?,
                );
            }
            "--count" => {
                let value = iter.next().ok_or("--count requires a value")?;
                let count: u32 = value
                    .parse()
                    .map_err(|_| format!("--count expects an unsigned integer, got '{value}'"))?;
                options.count = Some(count);
            }
            "--config" => {
                options.config_path = Some(iter.next().ok_or("--config requires a path")?.clone());
            }
            "--json" => options.json = true,
            other => return Err(format!("unknown argument '{other}'")),
        }
    }

    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_every_flag() {
        let options = parse_from(&args(&[
            "--shape",
            "elliptical",
            "--seed",
            "42",
            "--count",
            "10",
            "--config",
            "galaxy.json",
            "--json",
        ]))
        .unwrap();

        assert_eq!(options.shape, Some(GalaxyShape::Elliptical));
        assert_eq!(options.seed, Some(42));
        assert_eq!(options.count, Some(10));
        assert_eq!(options.config_path.as_deref(), Some("galaxy.json"));
        assert!(options.json);
    }

    #[test]
    fn no_flags_means_defaults() {
        let options = parse_from(&[]).unwrap();
        assert!(options.shape.is_none());
        assert!(options.seed.is_none());
        assert!(!options.json);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse_from(&args(&["--shape", "blob"])).is_err());
        assert!(parse_from(&args(&["--seed", "-1"])).is_err());
        assert!(parse_from(&args(&["--count"])).is_err());
        assert!(parse_from(&args(&["--verbose"])).is_err());
    }
}
