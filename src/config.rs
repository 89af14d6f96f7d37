//! Environment-driven configuration.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;

const DEFAULT_GENERATOR_SCRIPT: &str = "/var/www/sewercide/generate-personal-pricing.sh";
const DEFAULT_PRICING_TEMPLATE: &str = "/var/www/sewercide/pricing-template.pdf";
const DEFAULT_STATIC_DIR: &str = "./static";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// External script that produces a personalized pricing PDF.
    pub generator_script: PathBuf,
    /// Template PDF handed to the generator as its last argument.
    pub pricing_template: PathBuf,
    /// Directory the generator writes into, served under /static.
    pub static_dir: PathBuf,
    /// Upper bound on a single generator run.
    pub generator_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = match env::var("SERVER_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("SERVER_PORT is not a valid port: {raw}"))?,
            Err(_) => 8080,
        };

        let generator_script = env::var("GENERATOR_SCRIPT")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_GENERATOR_SCRIPT));
        let pricing_template = env::var("PRICING_TEMPLATE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_PRICING_TEMPLATE));
        let static_dir = env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_STATIC_DIR));

        let timeout_secs = match env::var("GENERATOR_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse::<u64>()
                .with_context(|| format!("GENERATOR_TIMEOUT_SECS is not a valid number: {raw}"))?,
            Err(_) => 30,
        };

        Ok(Self {
            host,
            port,
            generator_script,
            pricing_template,
            static_dir,
            generator_timeout: Duration::from_secs(timeout_secs),
        })
    }
}
