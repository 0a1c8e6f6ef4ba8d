//! Showreel CLI Entry Point
//!
//! Provides the command-line interface for the annual report.
//!
//! # Usage
//!
//! ```bash
//! # Read the narrative report (the default)
//! showreel
//!
//! # Animated executive dashboard
//! showreel dashboard --timeframe quarter
//!
//! # Replay an agent showcase
//! showreel play high-value-job --speed 2
//!
//! # List showcases, export one, share the report link
//! showreel list
//! showreel export high-value-job --out demo.yaml
//! showreel share
//! ```

use std::env;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use log::{error, info, warn};

use showreel::catalog::{agents, showcases};
use showreel::player::{load_showcase, render_frame, save_showcase, StepPlayer};
use showreel::report::{narrative, roi, run_dashboard, KeyMetrics, Timeframe};
use showreel::session::{IntroMarker, Session};
use showreel::share;
use showreel::{Error, APP_NAME, VERSION};

/// Default export path when --out is not given.
const DEFAULT_EXPORT: &str = "showcase.yaml";

/// What the invocation asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Narrative,
    Dashboard,
    Play(String),
    List,
    Export(String),
    Share,
    Report,
    Roi,
}

/// Command-line configuration parsed from arguments.
#[derive(Debug)]
struct Config {
    command: Command,
    speed: f64,
    interval_ms: Option<u64>,
    show_details: bool,
    animate: bool,
    script_file: Option<PathBuf>,
    out_path: PathBuf,
    timeframe: Timeframe,
    excludes: Vec<String>,
    verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            command: Command::Narrative,
            speed: 1.0,
            interval_ms: None,
            show_details: true,
            animate: true,
            script_file: None,
            out_path: PathBuf::from(DEFAULT_EXPORT),
            timeframe: Timeframe::Year,
            excludes: Vec::new(),
            verbose: false,
        }
    }
}

/// Configures the logging system with appropriate formatting.
fn setup_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format(|buf, record| {
            use std::io::Write;

            match record.level() {
                log::Level::Warn | log::Level::Error => {
                    writeln!(buf, "[{}] {}", record.level(), record.args())
                }
                _ => writeln!(buf, "{}", record.args()),
            }
        })
        .init();
}

/// Prints the application banner with version information.
fn print_banner() {
    println!();
    println!("{} v{}", APP_NAME, VERSION);
    println!("AI Transformation Annual Report");
    println!();
}

/// Prints usage information.
fn print_usage() {
    println!("Usage: showreel [COMMAND] [OPTIONS]");
    println!();
    println!("Commands:");
    println!("  narrative           Read the annual report (default)");
    println!("  dashboard           Animated executive dashboard");
    println!("  play <SHOWCASE>     Replay an agent showcase step by step");
    println!("  list                List agents and available showcases");
    println!("  export <SHOWCASE>   Write a showcase definition to YAML");
    println!("  share               Copy the report link to the clipboard");
    println!("  report              Download the full ROI report");
    println!("  roi                 What-if ROI totals over the implementation list");
    println!();
    println!("Options:");
    println!("  --speed N           Playback speed multiplier, 0.25-4 (default: 1)");
    println!("  --interval MS       Override the showcase tick interval");
    println!("  --no-details        Hide step detail bullets during playback");
    println!("  --no-animate        Skip the dashboard count-up animation");
    println!("  --file PATH         Play a showcase from a YAML script");
    println!("  --out PATH          Export destination (default: {})", DEFAULT_EXPORT);
    println!("  --timeframe T       Dashboard window: month, quarter, year");
    println!("  --exclude ID        Drop an implementation from the ROI totals (repeatable)");
    println!("  --verbose           Enable debug logging");
    println!("  --help              Show this help message");
    println!("  --version           Show version information");
    println!();
    println!("Examples:");
    println!("  showreel play lead-qualification --speed 2");
    println!("  showreel dashboard --timeframe month --no-animate");
    println!("  showreel play --file custom.yaml");
    println!("  showreel roi --exclude support-deflection");
}

/// Parses command-line arguments into a Config struct.
fn parse_arguments(args: &[String]) -> Result<Config, String> {
    let mut config = Config::default();
    let mut positionals: Vec<String> = Vec::new();
    let mut i = 1; // Skip program name

    while i < args.len() {
        let arg = &args[i];

        match arg.as_str() {
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            "--version" | "-V" => {
                println!("{} {}", APP_NAME, VERSION);
                std::process::exit(0);
            }
            "--no-details" => {
                config.show_details = false;
            }
            "--no-animate" => {
                config.animate = false;
            }
            "--verbose" | "-v" => {
                config.verbose = true;
            }
            "--speed" => {
                i += 1;
                if i >= args.len() {
                    return Err("--speed requires a number argument".to_string());
                }
                config.speed = args[i]
                    .parse()
                    .map_err(|_| format!("Invalid speed value: {}", args[i]))?;
            }
            "--interval" => {
                i += 1;
                if i >= args.len() {
                    return Err("--interval requires a milliseconds argument".to_string());
                }
                let ms: u64 = args[i]
                    .parse()
                    .map_err(|_| format!("Invalid interval value: {}", args[i]))?;
                if ms == 0 {
                    return Err("--interval must be greater than zero".to_string());
                }
                config.interval_ms = Some(ms);
            }
            "--file" => {
                i += 1;
                if i >= args.len() {
                    return Err("--file requires a path argument".to_string());
                }
                config.script_file = Some(PathBuf::from(&args[i]));
            }
            "--out" => {
                i += 1;
                if i >= args.len() {
                    return Err("--out requires a path argument".to_string());
                }
                config.out_path = PathBuf::from(&args[i]);
            }
            "--timeframe" => {
                i += 1;
                if i >= args.len() {
                    return Err("--timeframe requires an argument".to_string());
                }
                config.timeframe = Timeframe::parse(&args[i])
                    .ok_or_else(|| format!("Invalid timeframe: {}", args[i]))?;
            }
            "--exclude" => {
                i += 1;
                if i >= args.len() {
                    return Err("--exclude requires an implementation id".to_string());
                }
                config.excludes.push(args[i].clone());
            }
            arg if arg.starts_with('-') => {
                return Err(format!("Unknown option: {}", arg));
            }
            _ => {
                positionals.push(arg.clone());
            }
        }
        i += 1;
    }

    config.command = match positionals.first().map(String::as_str) {
        None | Some("narrative") => Command::Narrative,
        Some("dashboard") => Command::Dashboard,
        Some("list") => Command::List,
        Some("share") => Command::Share,
        Some("report") => Command::Report,
        Some("roi") => Command::Roi,
        Some("play") => {
            if config.script_file.is_some() {
                Command::Play(String::new())
            } else {
                let id = positionals
                    .get(1)
                    .ok_or("play requires a showcase id (or --file)")?;
                Command::Play(id.clone())
            }
        }
        Some("export") => {
            let id = positionals.get(1).ok_or("export requires a showcase id")?;
            Command::Export(id.clone())
        }
        Some(other) => return Err(format!("Unknown command: {}", other)),
    };

    if positionals.len() > 2 {
        return Err(format!("Unexpected argument: {}", positionals[2]));
    }

    Ok(config)
}

/// Shows the welcome panel on the first run and records the dismissal.
fn maybe_show_welcome() {
    let mut marker = IntroMarker::load();
    if marker.is_dismissed() {
        return;
    }

    println!("Welcome to the Future");
    println!("  One year of AI transformation, told from the inside.");
    println!();
    println!("Explore the Ecosystem");
    println!("  17 agents across 6 departments and 7 platforms.");
    println!();
    println!("Interactive Discovery");
    println!("  Try `showreel play high-value-job` to watch one work.");
    println!();

    if let Err(e) = marker.dismiss() {
        warn!("Could not save welcome state: {}", e);
    }
}

/// Resolves the showcase to play: a script file, a built-in id, or an
/// agent id (dedicated showcase or derived workflow summary).
fn resolve_showcase(
    id: &str,
    script_file: Option<&PathBuf>,
) -> Result<showreel::Showcase, Error> {
    if let Some(path) = script_file {
        return load_showcase(path);
    }
    showcases::resolve(id).ok_or_else(|| Error::UnknownShowcase(id.to_string()))
}

/// Plays a showcase to completion, printing a frame per state change.
async fn play_showcase(config: &Config, id: &str) -> Result<(), Error> {
    let mut showcase = resolve_showcase(id, config.script_file.as_ref())?;
    if let Some(ms) = config.interval_ms {
        showcase = showcase.with_interval_ms(ms);
    }

    info!("Playing '{}' ({} steps)", showcase.name, showcase.len());
    println!();

    let show_details = config.show_details;
    let mut player = StepPlayer::new(showcase).with_speed(config.speed);
    player
        .run(|p| {
            println!("{}", render_frame(p, show_details));
        })
        .await;

    Ok(())
}

/// Prints the agent roster and the available showcases.
fn list_catalog() {
    println!("Agents ({} active):", agents::active_agents());
    for dept in agents::DEPARTMENTS {
        println!("  {}: {}", dept.name, dept.after_state);
        for agent in agents::agents_in(dept) {
            let demo = match (agent.showcase, agent.workflow) {
                (Some(id), _) => format!("  [showcase: {}]", id),
                (None, Some(_)) => format!("  [play {}]", agent.id),
                (None, None) => String::new(),
            };
            println!("    {:<28} {}{}", agent.id, agent.description, demo);
        }
    }

    println!();
    println!("Showcases:");
    for id in showcases::ids() {
        println!("  {}", id);
    }
}

/// Main application entry point.
async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    // Parse arguments
    let config = parse_arguments(&args).map_err(|e| {
        eprintln!("Error: {}", e);
        eprintln!();
        print_usage();
        e
    })?;

    // Setup logging
    setup_logging(config.verbose);

    // Print banner
    print_banner();

    maybe_show_welcome();

    let mut session = Session::new();
    session.set_animation_speed(config.speed);

    match &config.command {
        Command::Narrative => {
            println!("{}", narrative::render_report(session.time_of_day()));
        }
        Command::Dashboard => {
            let mut stdout = io::stdout();
            run_dashboard(
                &mut stdout,
                &KeyMetrics::default(),
                config.timeframe,
                config.animate,
            )
            .await?;
        }
        Command::Play(id) => {
            if !id.is_empty() {
                session.focus(id.clone());
            }
            play_showcase(&config, id).await.map_err(|e| {
                error!("Playback failed: {}", e);
                e
            })?;
        }
        Command::List => {
            list_catalog();
        }
        Command::Export(id) => {
            let showcase = resolve_showcase(id, None)?;
            save_showcase(&showcase, &config.out_path)?;
            println!("Exported '{}' to {}", id, config.out_path.display());
        }
        Command::Share => match share::share_link()? {
            share::ShareOutcome::Copied => {
                println!("Report link copied to clipboard.");
            }
            share::ShareOutcome::Printed => {
                info!("No clipboard tool found; link printed above");
            }
        },
        Command::Report => {
            share::download_report()?;
        }
        Command::Roi => {
            let mut calc = roi::RoiCalculator::new();
            for id in &config.excludes {
                if !calc.exclude(id) {
                    let known: Vec<&str> =
                        roi::IMPLEMENTATIONS.iter().map(|i| i.id).collect();
                    return Err(format!(
                        "Unknown implementation '{}' (available: {})",
                        id,
                        known.join(", ")
                    )
                    .into());
                }
            }

            session.set_metrics(calc.totals().snapshot());
            println!("{}", roi::render_roi(&calc));
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!();
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
