use anyhow::{bail, Context, Result};

/// Application configuration loaded from environment variables.
/// Provider credentials are optional; an absent or empty key disables that provider.
#[derive(Debug, Clone)]
pub struct Config {
    pub perplexity_api_key: String,
    pub openai_api_key: String,
    /// Serve the curated datasets when every provider fails. When false, callers get empty results.
    pub static_fallback: bool,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            perplexity_api_key: optional_env("PERPLEXITY_API_KEY"),
            openai_api_key: optional_env("OPENAI_API_KEY"),
            static_fallback: match std::env::var("AI_STATIC_FALLBACK") {
                Ok(raw) => parse_flag(&raw)
                    .with_context(|| format!("AI_STATIC_FALLBACK has invalid value '{raw}'"))?,
                Err(_) => true,
            },
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn optional_env(key: &str) -> String {
    std::env::var(key)
        .map(|v| v.trim().to_string())
        .unwrap_or_default()
}

fn parse_flag(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("expected a boolean flag, got '{other}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag_accepts_common_spellings() {
        assert!(parse_flag("true").unwrap());
        assert!(parse_flag(" YES ").unwrap());
        assert!(parse_flag("1").unwrap());
        assert!(!parse_flag("false").unwrap());
        assert!(!parse_flag("Off").unwrap());
        assert!(!parse_flag("0").unwrap());
    }

    #[test]
    fn test_parse_flag_rejects_garbage() {
        assert!(parse_flag("maybe").is_err());
        assert!(parse_flag("").is_err());
    }
}
