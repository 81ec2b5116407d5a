use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::OnceLock;

use anyhow::{Context, Result};
use ascii_noise::config::load_options;
use ascii_noise::error_codes::find_coded_error;
use ascii_noise::generator::{generate, GenerateOptions};
use ascii_noise::logging::init_tracing;
use ascii_noise::palette::{render_palette_listing, DEFAULT_PALETTE, PALETTES};
use ascii_noise::AsciiArt;
use clap::{Args, CommandFactory, FromArgMatches, Parser, Subcommand};
use serde::Serialize;
use serde_json::json;

#[derive(Debug, Parser)]
#[command(name = "ascii-noise")]
#[command(about = "Procedural gradient-noise ASCII art")]
struct Cli {
    /// Log generation details to stderr
    #[arg(short = 'v', long = "verbose", global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Render one piece of noise art
    Generate(GenerateArgs),
    /// List the built-in palettes
    Palettes {
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Args)]
struct GenerateArgs {
    #[arg(long)]
    width: Option<usize>,
    #[arg(long)]
    height: Option<usize>,
    /// cloudy, forest, desert or default; anything else renders as default
    #[arg(long)]
    palette: Option<String>,
    /// Feature size divisor; larger is smoother
    #[arg(long, allow_negative_numbers = true)]
    scale: Option<f64>,
    #[arg(long)]
    seed: Option<u64>,
    /// YAML options file; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct GenerateReport {
    ok: bool,
    width: usize,
    height: usize,
    palette: &'static str,
    scale: f64,
    seed: Option<u64>,
    art: String,
}

fn main() -> ExitCode {
    let cli = parse_cli();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Generate(args) => run_generate(&args),
        Commands::Palettes { json } => run_palettes(json),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => report_error(&error),
    }
}

fn parse_cli() -> Cli {
    let matches = Cli::command().version(version_label()).get_matches();
    Cli::from_arg_matches(&matches).unwrap_or_else(|error| error.exit())
}

fn version_label() -> &'static str {
    static LABEL: OnceLock<String> = OnceLock::new();
    LABEL.get_or_init(|| match option_env!("ASCII_NOISE_GIT_HASH") {
        Some(hash) => format!("{} ({hash})", env!("CARGO_PKG_VERSION")),
        None => env!("CARGO_PKG_VERSION").to_owned(),
    })
}

fn report_error(error: &anyhow::Error) -> ExitCode {
    if let Some(coded) = find_coded_error(error) {
        match serde_json::to_string(&coded.envelope()) {
            Ok(envelope) => eprintln!("{envelope}"),
            Err(_) => eprintln!("{coded}"),
        }
        return ExitCode::from(coded.exit_code());
    }

    eprintln!("error: {error:#}");
    ExitCode::FAILURE
}

fn resolve_options(args: &GenerateArgs) -> Result<GenerateOptions> {
    let mut options = match &args.config {
        Some(path) => load_options(path)?,
        None => GenerateOptions::default(),
    };

    if let Some(width) = args.width {
        options.width = width;
    }
    if let Some(height) = args.height {
        options.height = height;
    }
    if let Some(palette) = &args.palette {
        options.palette = palette.clone();
    }
    if let Some(scale) = args.scale {
        options.scale = scale;
    }
    if let Some(seed) = args.seed {
        options.seed = Some(seed);
    }

    // Every CLI run is reproducible from its reported seed.
    if options.seed.is_none() {
        options.seed = Some(rand::random());
    }

    Ok(options)
}

fn run_generate(args: &GenerateArgs) -> Result<()> {
    let options = resolve_options(args)?;
    let art = generate(&options)?;
    tracing::debug!(seed = ?options.seed, lines = art.height(), "rendered art");

    let payload = if args.json {
        let mut body = serde_json::to_string_pretty(&report_for(&art)?)?;
        body.push('\n');
        body
    } else {
        let mut text = art.to_text();
        if !text.is_empty() {
            text.push('\n');
        }
        text
    };

    match &args.output {
        Some(path) => write_output(path, &payload),
        None => {
            print!("{payload}");
            Ok(())
        }
    }
}

fn report_for(art: &AsciiArt) -> Result<GenerateReport> {
    let meta = art
        .metadata
        .as_ref()
        .context("generated art carries no metadata")?;
    Ok(GenerateReport {
        ok: true,
        width: meta.width,
        height: meta.height,
        palette: meta.palette,
        scale: meta.scale,
        seed: meta.seed,
        art: art.to_text(),
    })
}

fn write_output(path: &Path, payload: &str) -> Result<()> {
    fs::write(path, payload).with_context(|| format!("failed to write {}", path.display()))?;
    println!("Wrote {}", path.display());
    Ok(())
}

fn run_palettes(json: bool) -> Result<()> {
    if json {
        let body = json!({
            "default": DEFAULT_PALETTE,
            "palettes": PALETTES,
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        print!("{}", render_palette_listing());
    }
    Ok(())
}
