//! docverify command-line interface.
//!
//! - `docverify serve` runs the HTTP API
//! - `docverify scan` OCRs one local image and prints the extracted fields as JSON

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use docverify::{
    VerifyConfig,
    api::{LicenceResponse, serve_with_config},
    extract_dob, extract_licence, extract_name, extract_text,
    ocr::GoogleVisionBackend,
};
use serde_json::json;
use tracing_subscriber::EnvFilter;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;

/// Document type for `scan`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum DocumentKind {
    /// Aadhaar card: holder name
    Aadhaar,
    /// PAN card: date of birth
    Pan,
    /// Driving licence: number, issue and valid-till dates
    Licence,
}

#[derive(Parser)]
#[command(name = "docverify", version)]
#[command(about = "OCR-backed identity document verification", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the verification API server
    Serve {
        /// Address to bind (default: $DOCVERIFY_HOST or 127.0.0.1)
        #[arg(short = 'H', long)]
        host: Option<String>,

        /// Port to bind (default: $DOCVERIFY_PORT or 8000)
        #[arg(short, long)]
        port: Option<u16>,

        /// Config file (TOML or JSON); discovered from docverify.toml if omitted
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// OCR a local image and print the extracted fields
    Scan {
        /// Image file to scan
        path: PathBuf,

        /// Kind of document in the image
        #[arg(short, long, value_enum)]
        document: DocumentKind,

        /// Config file (TOML or JSON); discovered from docverify.toml if omitted
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<VerifyConfig> {
    if let Some(path) = path {
        return VerifyConfig::from_file(path).with_context(|| format!("Failed to load config {}", path.display()));
    }

    Ok(VerifyConfig::discover()?.unwrap_or_default())
}

fn resolve_host(host: Option<String>) -> String {
    host.or_else(|| std::env::var("DOCVERIFY_HOST").ok())
        .unwrap_or_else(|| DEFAULT_HOST.to_string())
}

fn resolve_port(port: Option<u16>) -> Result<u16> {
    if let Some(port) = port {
        return Ok(port);
    }

    match std::env::var("DOCVERIFY_PORT") {
        Ok(value) => value
            .parse()
            .with_context(|| format!("DOCVERIFY_PORT='{}' is not a valid port", value)),
        Err(_) => Ok(DEFAULT_PORT),
    }
}

async fn scan(path: &Path, document: DocumentKind, config: &VerifyConfig) -> Result<serde_json::Value> {
    let backend = GoogleVisionBackend::from_env()?;
    let image = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let text = extract_text(&backend, &image, &config.ocr).await?;
    tracing::debug!(characters = text.len(), "OCR text received");

    let fields = match document {
        DocumentKind::Aadhaar => json!({ "aadhaar_name": extract_name(&text) }),
        DocumentKind::Pan => json!({ "pan_dob": extract_dob(&text) }),
        DocumentKind::Licence => serde_json::to_value(LicenceResponse::from(extract_licence(&text)))?,
    };

    Ok(fields)
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { host, port, config } => {
            let config = load_config(config.as_deref())?;
            let host = resolve_host(host);
            let port = resolve_port(port)?;

            serve_with_config(host, port, config).await?;
            Ok(())
        }

        Commands::Scan {
            path,
            document,
            config,
        } => {
            let config = load_config(config.as_deref())?;
            let fields = scan(&path, document, &config).await?;
            println!("{}", serde_json::to_string_pretty(&fields)?);
            Ok(())
        }
    }
}
