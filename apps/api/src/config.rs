use anyhow::{bail, Context, Result};

const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com";

/// Application configuration loaded from environment variables.
/// Startup fails if `GEMINI_API_KEY` is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub gemini_api_base: String,
    pub llm_timeout_secs: u64,
    /// When false, `POST /generate` sends only the raw prompt to the model
    /// and the composed instruction is used for nothing but logging.
    pub generate_send_instruction: bool,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            gemini_api_base: std::env::var("GEMINI_API_BASE")
                .unwrap_or_else(|_| DEFAULT_GEMINI_API_BASE.to_string()),
            llm_timeout_secs: std::env::var("LLM_TIMEOUT_SECS")
                .unwrap_or_else(|_| "120".to_string())
                .parse::<u64>()
                .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
            generate_send_instruction: parse_bool(
                "GENERATE_SEND_INSTRUCTION",
                std::env::var("GENERATE_SEND_INSTRUCTION").ok().as_deref(),
            )?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    let value = std::env::var(key)
        .with_context(|| format!("Required environment variable '{key}' is not set"))?;
    if value.trim().is_empty() {
        bail!("Required environment variable '{key}' is empty");
    }
    Ok(value)
}

fn parse_bool(key: &str, raw: Option<&str>) -> Result<bool> {
    match raw.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        None | Some("") => Ok(false),
        Some("1" | "true" | "yes" | "on") => Ok(true),
        Some("0" | "false" | "no" | "off") => Ok(false),
        Some(other) => bail!("{key} must be a boolean, got '{other}'"),
    }
}
