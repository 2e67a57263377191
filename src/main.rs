//! subseqfind - Main CLI Entry Point

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use subseqfind::{
    budget::BudgetConfig,
    cli::{parse_list, Args, Commands, Config, Verbosity},
    search::{candidate_count, Candidates, SearchStatus, SubsequenceSearch},
    telemetry::{SearchEvent, TelemetryCollector, TelemetryDisplay},
};

fn main() -> Result<()> {
    let args = Args::parse();
    args.validate()?;

    let config = Config::load(args.config.clone()).context("Failed to load configuration")?;
    let verbosity = effective_verbosity(&args, &config);
    init_logging(verbosity, &config);

    match &args.command {
        Commands::Find {
            items,
            target,
            max_evaluations,
            json,
        } => {
            let matched = run_find(&config, verbosity, items, target, *max_evaluations, *json)?;
            if !matched {
                std::process::exit(1);
            }
        }
        Commands::Enumerate { items, limit } => {
            run_enumerate(items, *limit);
        }
        Commands::Config => {
            show_config(&args, &config, verbosity)?;
        }
    }

    Ok(())
}

/// Command-line flags win over the configured default
fn effective_verbosity(args: &Args, config: &Config) -> Verbosity {
    if args.quiet || args.verbose > 0 {
        args.verbosity()
    } else {
        config.verbosity().unwrap_or(Verbosity::Normal)
    }
}

fn init_logging(verbosity: Verbosity, config: &Config) {
    if !config.telemetry.color_output {
        colored::control::set_override(false);
    }

    tracing_subscriber::fmt()
        .with_max_level(verbosity.tracing_level())
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(config.telemetry.color_output)
        .init();
}

/// Search `items` for the closest subsequence equal to `target`
fn run_find(
    config: &Config,
    verbosity: Verbosity,
    items: &[String],
    target: &str,
    max_evaluations: Option<i64>,
    json: bool,
) -> Result<bool> {
    let target = parse_list(target);
    let budget = BudgetConfig {
        max_evaluations: max_evaluations.unwrap_or(config.search.max_evaluations),
        ..config.search.clone()
    };

    let collector = TelemetryCollector::new();
    let search = SubsequenceSearch::new(budget).with_telemetry(collector.clone());
    let outcome = search.search(target.as_slice(), items, |target: &[String], candidate: &[String]| {
        candidate == target
    });

    if json {
        println!("{}", outcome.to_json()?);
    } else {
        let report = &outcome.report;
        match report.status {
            SearchStatus::Matched => {
                let deleted = report
                    .deletions
                    .as_ref()
                    .map(|deletions| deletions.len())
                    .unwrap_or_default();
                println!(
                    "{} [{}] ({} deletions, {} evaluations)",
                    "match".green().bold(),
                    outcome.subsequence.join(", "),
                    deleted,
                    report.evaluations
                );
            }
            SearchStatus::BudgetExhausted => {
                println!(
                    "{} budget of {} evaluations exhausted after {} of {} candidates",
                    "not found:".yellow().bold(),
                    report.max_evaluations,
                    report.evaluations,
                    candidate_count(items.len())
                );
            }
            SearchStatus::NotFound => {
                println!(
                    "{} all {} candidates tried",
                    "not found:".red().bold(),
                    report.evaluations
                );
            }
            SearchStatus::EmptyInput => {
                println!("{} empty input sequence", "not found:".red().bold());
            }
        }
    }

    let display = TelemetryDisplay::new(collector.clone(), verbosity);
    if display.should_show_details() {
        for event in collector.recent_events(collector.event_count()) {
            match event {
                SearchEvent::Started {
                    sequence_len,
                    max_evaluations,
                    ..
                } => eprintln!("[SEARCH] started: {} items, budget {}", sequence_len, max_evaluations),
                SearchEvent::Evaluated {
                    level,
                    candidate_len,
                    matched,
                    ..
                } => {
                    let level = level.map_or_else(|| "-".to_string(), |level| level.to_string());
                    eprintln!(
                        "[EVAL] level {:>2}: {} items -> {}",
                        level,
                        candidate_len,
                        if matched { "match" } else { "no match" }
                    )
                }
                SearchEvent::Matched {
                    deletions,
                    evaluations,
                    ..
                } => eprintln!("[SEARCH] matched: {} deletions after {} evaluations", deletions, evaluations),
                SearchEvent::BudgetExhausted { warning, .. } => {
                    eprintln!("[BUDGET] {:?}", warning)
                }
                SearchEvent::Completed {
                    status, duration_us, ..
                } => eprintln!("[SEARCH] completed: {:?} in {}us", status, duration_us),
            }
        }
    }
    display.display_summary();

    Ok(outcome.report.is_match())
}

/// Print up to `limit` candidates in evaluation order
fn run_enumerate(items: &[String], limit: usize) {
    let total = candidate_count(items.len());
    for (index, combination) in Candidates::new(items.len()).take(limit).enumerate() {
        println!(
            "{:>6}  [{}]  {}",
            index + 1,
            combination.apply(items).join(", "),
            format!("deleted {:?}", combination.positions()).dimmed()
        );
    }
    if total > limit as u64 {
        eprintln!("... {} of {} candidates shown", limit, total);
    }
}

fn show_config(args: &Args, config: &Config, verbosity: Verbosity) -> Result<()> {
    println!("subseqfind configuration");
    println!("─────────────────────────────────────");
    match (&args.config, Config::default_path()) {
        (Some(path), _) => println!("Source:     {}", path.display()),
        (None, Some(path)) if path.exists() => println!("Source:     {}", path.display()),
        _ => println!("Source:     built-in defaults"),
    }
    println!("Verbosity:  {}", verbosity.as_str());
    println!();
    print!("{}", config.to_toml()?);

    Ok(())
}
