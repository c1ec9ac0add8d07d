mod cli;

use flptime::{config, scanner};
use flptime_probe::{format_minutes, inspect_file};

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "flptime=trace,flptime_probe=debug".to_string()
        } else {
            "flptime=info,flptime_probe=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Commands::Scan {
            dir,
            json,
            parallel,
            pause,
        } => scan_projects(dir, cli.config.as_deref(), json, parallel, pause),
        Commands::Inspect { file, json } => inspect_project(&file, json),
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("flptime {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn scan_projects(
    dir: Option<PathBuf>,
    config_path: Option<&Path>,
    json: bool,
    parallel: bool,
    pause: bool,
) -> Result<()> {
    let mut config = config::load_config_or_default(config_path)?;

    // CLI flags only ever switch options on
    config.scan.parallel |= parallel;
    config.report.json |= json;
    config.report.pause_on_exit |= pause;

    if !config.report.json {
        println!("flptime: version {}", env!("CARGO_PKG_VERSION"));
    }

    let dir = match dir {
        Some(dir) => dir,
        None => prompt_for_directory()?,
    };

    let result = run_scan(&dir, &config);

    if config.report.pause_on_exit {
        wait_for_enter()?;
    }

    result
}

fn run_scan(dir: &Path, config: &config::Config) -> Result<()> {
    if !config.report.json {
        println!("Scanning {}...", dir.display());
    }

    let summary = scanner::scan(dir, &config.scan)?;

    if config.report.json {
        println!("{}", summary.render_json()?);
    } else {
        print!("{}", summary.render_text());
    }

    Ok(())
}

// Prompts go to stderr so stdout only ever carries the report
fn prompt_for_directory() -> Result<PathBuf> {
    eprintln!(
        "Enter the directory where your project files are located \
         (e.g. C:\\Image-Line\\Projects). Subdirectories will also be included."
    );
    io::stderr().flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read directory from stdin")?;

    let line = line.trim();
    if line.is_empty() {
        return Ok(PathBuf::from("."));
    }
    Ok(PathBuf::from(shellexpand::tilde(line).as_ref()))
}

fn wait_for_enter() -> Result<()> {
    eprintln!("Press enter to close.");
    io::stderr().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(())
}

fn inspect_project(file: &Path, json: bool) -> Result<()> {
    if !file.exists() {
        anyhow::bail!("File does not exist: {:?}", file);
    }

    let info = inspect_file(file).with_context(|| format!("Failed to inspect {:?}", file))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("File: {}", file.display());
    println!("Marker offset: {}", info.marker_offset);
    println!("Payload: {}", info.payload);
    println!("Raw value: 0x{} ({})", info.raw_hex, info.raw_value);
    println!("Biased: {}", info.biased);
    match info.minutes {
        Some(minutes) => println!("Time spent: {}", format_minutes(minutes.into())),
        None => println!("Time spent: overflow (value = {})", info.raw_hex),
    }

    Ok(())
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    let path = path.map(Path::to_path_buf).or_else(config::find_config_file);

    match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(&p)?;
            println!("✓ Configuration is valid");
            print_config(&config);
        }
        None => {
            println!("No config file found, using defaults");
            print_config(&config::Config::default());
        }
    }

    Ok(())
}

fn print_config(config: &config::Config) {
    println!("  Extensions: {}", config.scan.extensions.join(", "));
    println!("  Follow links: {}", config.scan.follow_links);
    match config.scan.max_depth {
        0 => println!("  Max depth: unlimited"),
        depth => println!("  Max depth: {}", depth),
    }
    println!("  Parallel: {}", config.scan.parallel);
    println!("  JSON output: {}", config.report.json);
    println!("  Pause on exit: {}", config.report.pause_on_exit);
}
