//! chromatext - colored Discord text generator
//!
//! Opens the editor window by default. The `encode` subcommand turns span
//! markup into a fenced ANSI block without opening a window, and
//! `init-config` writes the default configuration file.

use std::env;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use eframe::egui;
use tracing::{debug, error, info, warn};

use chromatext::clipboard::{ClipboardSink, SystemClipboard};
use chromatext::config::loader::{ConfigLoader, CONFIG_ENV_VAR};
use chromatext::{handle_startup_error, markup, AnsiEncoder, ChromaTextApp, Config};

const DEBUG_ENV_VAR: &str = "CHROMATEXT_DEBUG";

type DynError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Parser, Debug)]
#[command(name = "chromatext")]
#[command(about = "Compose ANSI-colored text for Discord code blocks")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    /// Initial window width
    #[arg(long)]
    width: Option<f32>,

    /// Initial window height
    #[arg(long)]
    height: Option<f32>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encode span markup as a fenced ANSI block and print it
    Encode {
        /// Markup to encode
        #[arg(short, long, conflicts_with = "file")]
        markup: Option<String>,

        /// Read markup from a file (stdin when neither is given)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Also copy the result to the clipboard
        #[arg(long)]
        copy: bool,
    },
    /// Write the default configuration to a file
    InitConfig {
        /// Destination (defaults to the user config directory)
        path: Option<PathBuf>,

        /// Replace an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(&cli);
    info!("🚀 Starting chromatext v{}", chromatext::VERSION);
    debug!("Debug mode enabled");

    let config = load_configuration(&cli);

    match cli.command {
        Some(Commands::Encode {
            ref markup,
            ref file,
            copy,
        }) => run_encode(&config, markup.as_deref(), file.as_ref(), copy),
        Some(Commands::InitConfig { ref path, force }) => run_init_config(path.as_deref(), force),
        None => run_gui(&cli, config),
    }
}

/// Install the tracing subscriber
///
/// `RUST_LOG` wins; otherwise `--debug` or `CHROMATEXT_DEBUG` selects debug.
fn init_logging(cli: &Cli) {
    let debug_env = env::var(DEBUG_ENV_VAR)
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);
    let log_level = if cli.debug || debug_env { "debug" } else { "info" };

    let env_filter = env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(env_filter))
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();
}

/// Load configuration from `--config`, the environment, or the search paths
///
/// Any failure falls back to the default configuration.
fn load_configuration(cli: &Cli) -> Config {
    info!("⚙️  Loading configuration...");

    let explicit_path = cli
        .config
        .clone()
        .or_else(|| env::var(CONFIG_ENV_VAR).ok().map(PathBuf::from));

    let loaded = match &explicit_path {
        Some(path) => chromatext::init_with_config(path),
        None => chromatext::init(),
    };

    match loaded {
        Ok(config) => config,
        Err(e) => {
            warn!("{}", handle_startup_error(&e));
            info!("🔄 Falling back to default configuration");
            Config::default()
        }
    }
}

fn run_encode(
    config: &Config,
    markup_arg: Option<&str>,
    file: Option<&PathBuf>,
    copy: bool,
) -> anyhow::Result<()> {
    let source = match (markup_arg, file) {
        (Some(markup), _) => markup.to_string(),
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        (None, None) => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read markup from stdin")?;
            buffer
        }
    };

    let document = markup::parse(source.trim_end_matches('\n'))
        .map_err(|e| anyhow::anyhow!(handle_startup_error(&e)))?;
    let encoder = AnsiEncoder::with_fence_language(config.copy.fence_language.clone());
    let encoded = encoder.encode_document(&document);
    println!("{}", encoded);

    if copy {
        let mut clipboard = SystemClipboard::new();
        if let Err(e) = clipboard.set_text(&encoded) {
            error!("Failed to copy formatted text: {}", e);
            bail!(handle_startup_error(&e));
        }
        info!("📋 {}", config.copy.success_label);
    }

    Ok(())
}

fn run_init_config(path: Option<&Path>, force: bool) -> anyhow::Result<()> {
    let written = ConfigLoader::write_config(&Config::default(), path, force)
        .map_err(|e| anyhow::anyhow!(handle_startup_error(&e)))?;
    println!("{}", written.display());
    Ok(())
}

fn run_gui(cli: &Cli, config: Config) -> anyhow::Result<()> {
    let native_options = create_native_options(cli, &config);

    info!("🎨 Initializing GUI...");
    if let Err(e) = eframe::run_native(
        "chromatext",
        native_options,
        Box::new(move |cc: &eframe::CreationContext<'_>| -> Result<Box<dyn eframe::App>, DynError> {
            let app = ChromaTextApp::new(cc, &config)?;
            Ok(Box::new(app))
        }),
    ) {
        error!("💥 Application failed: {}", e);
        process::exit(1);
    }

    info!("👋 chromatext shutdown complete");
    Ok(())
}

/// Create native options for the application window
fn create_native_options(cli: &Cli, config: &Config) -> eframe::NativeOptions {
    let width = cli.width.unwrap_or(config.ui.window_width);
    let height = cli.height.unwrap_or(config.ui.window_height);
    debug!("Window size {}x{}", width, height);

    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("chromatext")
            .with_app_id("chromatext")
            .with_inner_size([width, height])
            .with_min_inner_size([320.0, 240.0])
            .with_resizable(true),
        ..Default::default()
    }
}
