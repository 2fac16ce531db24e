mod cli;

use watchcover::{
    config,
    policy::CompletionPolicy,
    timeline::{load_events, timeline_from_events},
    CoverageResolver, CoverageResult,
};

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "watchcover=debug,watchcover_coverage=trace".to_string()
        } else {
            "watchcover=warn,watchcover_coverage=warn".to_string()
        }
    });

    // Logs go to stderr so JSON output on stdout stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Resolve { timeline, json } => {
            resolve_file(&timeline, cli.config.as_deref(), json)
        }
        Commands::Check {
            timeline,
            duration,
            json,
        } => check_file(&timeline, cli.config.as_deref(), duration, json),
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::InitConfig { path, force } => init_config(&path, force),
        Commands::Version => {
            println!("watchcover {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn resolve_timeline(
    timeline_path: &Path,
    config: &config::Config,
) -> Result<(usize, CoverageResult)> {
    if !timeline_path.exists() {
        anyhow::bail!("Timeline file does not exist: {:?}", timeline_path);
    }

    let events = load_events(timeline_path)?;
    let timeline = timeline_from_events(events)?;
    tracing::info!("Loaded {} samples from {:?}", timeline.len(), timeline_path);

    let resolver = CoverageResolver::new(config.coverage);
    Ok((timeline.len(), resolver.resolve(timeline.samples())))
}

fn print_coverage(samples: usize, coverage: &CoverageResult) {
    println!("Samples: {}", samples);
    println!("Valid coverage ({:.3}s):", coverage.valid_secs());
    for interval in &coverage.valid {
        println!("  {}", interval);
    }
    println!("Invalid coverage ({:.3}s):", coverage.invalid_secs());
    for interval in &coverage.invalid {
        println!("  {}", interval);
    }
}

fn resolve_file(timeline_path: &Path, config_path: Option<&Path>, json: bool) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    let (samples, coverage) = resolve_timeline(timeline_path, &config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&coverage)?);
    } else {
        print_coverage(samples, &coverage);
    }

    Ok(())
}

fn check_file(
    timeline_path: &Path,
    config_path: Option<&Path>,
    duration: f64,
    json: bool,
) -> Result<()> {
    if !duration.is_finite() || duration < 0.0 {
        anyhow::bail!(
            "Duration must be a non-negative number of seconds, got {}",
            duration
        );
    }

    let config = config::load_config_or_default(config_path)?;
    let (samples, coverage) = resolve_timeline(timeline_path, &config)?;
    let status = CompletionPolicy::from(&config.completion).evaluate(&coverage, duration);

    if json {
        let out = serde_json::json!({
            "coverage": coverage,
            "completion": status,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print_coverage(samples, &coverage);
        println!();
        println!(
            "Watched {:.3}s of {:.3}s required ({:.3}s video)",
            status.watched_secs, status.required_secs, duration
        );
        match status.reward {
            Some(reward) => println!("✓ Complete (reward: {})", reward),
            None => println!("✗ Incomplete"),
        }
    }

    Ok(())
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    let path = path
        .map(Path::to_path_buf)
        .or_else(config::find_default_config);

    let config = match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(&p)?;
            println!("✓ Configuration is valid");
            config
        }
        None => {
            println!("No config file specified or found, using defaults");
            config::Config::default()
        }
    };

    println!("  Coverage speed factor: {}", config.coverage.speed_factor);
    println!("  Coverage slack: {}s", config.coverage.slack_secs);
    println!("  Completion slack: {}s", config.completion.slack_secs);
    println!("  Completion reward: {}", config.completion.reward);

    Ok(())
}

fn init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!("Config file already exists: {:?} (use --force to overwrite)", path);
    }

    config::persist::save_config(path, &config::Config::default())?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}
