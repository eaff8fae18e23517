use std::env;

use crate::{Error, Result};

/// Environment variable naming the Canvas instance, e.g. `https://canvas.example.edu`
pub const BASE_URL_VAR: &str = "CANVAS_BASE";

/// Environment variable holding the API access token
pub const TOKEN_VAR: &str = "CANVAS_TOKEN";

/// Where the Canvas instance lives and how to authenticate to it.
///
/// Built once and handed to [`Client::new`](crate::Client::new); nothing
/// reads the process environment after construction.
#[derive(Debug, Clone)]
pub struct Config {
    base_url: String,
    token: Token,
}

impl Config {
    /// Build a config from explicit values, rejecting empty ones.
    pub fn new(base_url: impl Into<String>, token: impl Into<Token>) -> Result<Self> {
        let base_url = base_url.into();
        let token = token.into();

        if base_url.is_empty() {
            return Err(Error::Configuration(BASE_URL_VAR));
        }
        if token.0.is_empty() {
            return Err(Error::Configuration(TOKEN_VAR));
        }

        Ok(Config {
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    /// Read [`BASE_URL_VAR`] and [`TOKEN_VAR`] from the environment.
    pub fn from_env() -> Result<Self> {
        Config::new(
            env::var(BASE_URL_VAR).unwrap_or_default(),
            env::var(TOKEN_VAR).unwrap_or_default(),
        )
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) fn token(&self) -> &str {
        self.token.as_ref()
    }
}

/// An API token, wrapped so we don't print it by accident
#[derive(Clone)]
pub struct Token(pub(crate) String);

impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token (******)")
    }
}

impl From<String> for Token {
    fn from(value: String) -> Self {
        Token(value)
    }
}

impl From<&str> for Token {
    fn from(value: &str) -> Self {
        Token(value.to_string())
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}
