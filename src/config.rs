//! Startup configuration: bot token and data directory.

use std::env;
use std::path::PathBuf;

use once_cell::sync::Lazy;
use regex::Regex;

/// Environment variable holding the bot token
pub const TOKEN_VAR: &str = "DISCORD_TOKEN";

/// Name of the roll history database inside the data directory
const DATABASE_FILE: &str = "rolls.db";

/// Name of the icon directory inside the data directory
const ICONS_DIR: &str = "champion_icons";

/// Coarse shape of a Discord bot token: three dot-separated segments
static TOKEN_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_\-]{20,}\.[A-Za-z0-9_\-]{5,}\.[A-Za-z0-9_\-]{10,}$").unwrap());

/// Reasons the bot cannot log in
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum TokenError {
    #[display("DISCORD_TOKEN environment variable is not set")]
    Unset,

    #[display("the value in DISCORD_TOKEN doesn't look like a valid Discord bot token")]
    Malformed,

    #[display("Discord rejected the token provided in DISCORD_TOKEN")]
    Rejected,
}

impl TokenError {
    /// What the user should do about it
    pub const fn remediation(&self) -> &'static str {
        match self {
            Self::Unset => "Set it and run again, for example:\n  export DISCORD_TOKEN='YOUR_TOKEN_HERE'",
            Self::Malformed => {
                "- Paste the Bot Token from the Developer Portal (not the Client Secret).\n- Do not include quotes or a \
                 'Bot ' prefix.\n- If you regenerated the token, update DISCORD_TOKEN and try again."
            },
            Self::Rejected => {
                "- Verify you're using the current Bot Token from the Developer Portal.\n- Do not prefix it with 'Bot ' \
                 and remove any surrounding quotes.\n- If you regenerated the token, update the environment variable \
                 and rerun."
            },
        }
    }
}

/// Cleans up a raw token value and checks its shape.
///
/// Surrounding whitespace and quotes are dropped, as well as a leading `Bot ` prefix.
pub fn parse_token(raw: &str) -> Result<String, TokenError> {
    let mut token = raw.trim().trim_matches('"').trim_matches('\'');
    if let Some(stripped) = token.get(..4).filter(|prefix| prefix.eq_ignore_ascii_case("bot ")).and(token.get(4..)) {
        token = stripped.trim();
    }

    if token.is_empty() {
        Err(TokenError::Unset)
    } else if TOKEN_SHAPE.is_match(token) {
        Ok(token.to_owned())
    } else {
        Err(TokenError::Malformed)
    }
}

/// Reads the token from the environment.
pub fn load_token() -> Result<String, TokenError> {
    parse_token(&env::var(TOKEN_VAR).unwrap_or_default())
}

/// Values fixed for the whole lifetime of the process
#[derive(Debug, Clone)]
pub struct Config {
    pub token: String,
    pub data_dir: PathBuf,
}

impl Config {
    /// Reads `.env`, the environment and the command line.
    ///
    /// The data directory is the first argument, or the current directory when absent.
    pub fn load() -> Result<Self, TokenError> {
        dotenv::dotenv().ok();
        let token = load_token()?;
        let data_dir = env::args().nth(1).map_or_else(|| PathBuf::from("."), PathBuf::from);
        Ok(Self { token, data_dir })
    }

    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(DATABASE_FILE)
    }

    pub fn icons_dir(&self) -> PathBuf {
        self.data_dir.join(ICONS_DIR)
    }
}
