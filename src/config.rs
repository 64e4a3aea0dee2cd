//! Server configuration.
//!
//! Everything is settable by flag or environment variable; there are no
//! hidden globals. Library types take explicit paths and seeds.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

/// Configuration for the tarot server binary.
#[derive(Clone, Debug, Parser)]
#[command(name = "tarot-server", about = "Tarot reading table API server")]
pub struct ServerConfig {
    /// Address to listen on.
    #[arg(long, env = "TAROT_BIND", default_value = "127.0.0.1:3001")]
    pub bind: SocketAddr,

    /// Directory holding deck files and spreads.json.
    #[arg(long, env = "TAROT_DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// Spread catalog file. Defaults to `<data-dir>/spreads.json`.
    #[arg(long, env = "TAROT_SPREADS_FILE")]
    pub spreads_file: Option<PathBuf>,

    /// Base URL of the generative-language API.
    #[arg(
        long,
        env = "GENAI_BASE_URL",
        default_value = "https://generativelanguage.googleapis.com"
    )]
    pub genai_base_url: String,

    /// Model name used for interpretation requests.
    #[arg(long, env = "GENAI_MODEL", default_value = "gemini-2.5-flash")]
    pub genai_model: String,

    /// API key for the generative-language API.
    #[arg(long, env = "GENAI_API_KEY", default_value = "", hide_env_values = true)]
    pub genai_api_key: String,

    /// Seed for shuffle randomness. Unseeded (OS entropy) when absent.
    #[arg(long, env = "TAROT_SEED")]
    pub seed: Option<u64>,
}

impl ServerConfig {
    /// Resolved path of the spread catalog file.
    #[must_use]
    pub fn spreads_path(&self) -> PathBuf {
        self.spreads_file
            .clone()
            .unwrap_or_else(|| self.data_dir.join("spreads.json"))
    }
}
