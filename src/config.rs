use dotenvy::dotenv;
use once_cell::sync::Lazy;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_API_URI: &str = "https://news-verifier.onrender.com";

pub static CONFIG: Lazy<Config> = Lazy::new(|| {
    dotenv().ok(); // Load .env file if present
    Config {
        api_uri: get_env_or_default("NEWS_VERIFIER_API_URI", DEFAULT_API_URI),
        history_file: env::var("NEWS_VERIFIER_HISTORY_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_history_file()),
    }
});

#[derive(Debug, Clone)]
pub struct Config {
    pub api_uri: String,
    pub history_file: PathBuf,
}

fn get_env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn default_history_file() -> PathBuf {
    match dirs::data_dir() {
        Some(base) => base.join("news-verifier").join("history.json"),
        None => env::temp_dir().join("news-verifier-history.json"),
    }
}
