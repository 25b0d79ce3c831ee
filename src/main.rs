//! MathAgent - add, subtract, multiply and check primality of two numbers
//!
//! A CLI that evaluates two whole numbers once, or serves an interactive
//! web form doing the same.
//!
//! Exit codes:
//!   0 - Success
//!   1 - Runtime error (config, overflow, bind failure, etc.)

use anyhow::{Context, Result};
use mathagent::cli::{Args, OutputFormat};
use mathagent::config::{Config, CONFIG_FILE_NAME};
use mathagent::{evaluate, report, web};
use tracing::{debug, error, info, warn};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Handle --init-config early (no logging needed)
    if args.init_config {
        return handle_init_config();
    }

    // Initialize logging
    init_logging(&args);

    info!("MathAgent v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);

    if let Err(e) = run(args).await {
        error!("MathAgent failed: {:#}", e);
        eprintln!("\n❌ Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

/// Handle --init-config: generate a default .mathagent.toml.
fn handle_init_config() -> Result<()> {
    let path = std::path::Path::new(CONFIG_FILE_NAME);

    if path.exists() {
        eprintln!(
            "⚠️  {} already exists. Remove it first or edit it manually.",
            CONFIG_FILE_NAME
        );
        std::process::exit(1);
    }

    let content = Config::default_toml();
    std::fs::write(path, &content)
        .with_context(|| format!("Failed to write {}", CONFIG_FILE_NAME))?;

    println!("✅ Created {} with default settings.", CONFIG_FILE_NAME);
    println!("   Edit it to customize default inputs, output format and the web form.");
    Ok(())
}

/// Initialize logging based on verbosity settings and `RUST_LOG`.
fn init_logging(args: &Args) {
    let filter = args.log_filter(std::env::var("RUST_LOG").ok().as_deref());

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .compact()
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Evaluate once or serve the form, depending on `--serve`.
async fn run(args: Args) -> Result<()> {
    let mut config = load_config(&args)?;
    config.merge_with_args(&args);

    if args.serve {
        return web::serve(&config).await;
    }

    let (a, b) = (config.inputs.a, config.inputs.b);
    info!("Evaluating a = {}, b = {}", a, b);

    let report = evaluate(a, b)?;

    let output = match config.general.format {
        OutputFormat::Text => report::render_text(&report),
        OutputFormat::Markdown => report::generate_markdown_report(&report),
        OutputFormat::Json => report::generate_json_report(&report)?,
    };

    match args.output {
        Some(ref path) => {
            report::write_report(&output, path)?;
            println!("✅ Report saved to: {}", path.display());
        }
        None => println!("{}", output.trim_end()),
    }

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(args: &Args) -> Result<Config> {
    // Try explicit config path
    if let Some(ref config_path) = args.config {
        info!("Loading config from: {}", config_path.display());
        return Config::load(config_path);
    }

    // Try default location
    match Config::load_default() {
        Ok(Some(config)) => {
            info!("Loaded default config from {}", CONFIG_FILE_NAME);
            Ok(config)
        }
        Ok(None) => {
            debug!("No config file found, using defaults");
            Ok(Config::default())
        }
        Err(e) => {
            warn!("Failed to load config: {}", e);
            Ok(Config::default())
        }
    }
}
