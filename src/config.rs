use crate::provider::Provider;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Provider label used in logs and CLI output (e.g. "google", "oidc").
    #[serde(default = "default_provider_name")]
    pub provider_name: String,

    /// Full authorization endpoint URL. May already carry query params;
    /// they are preserved when the authorization URL is built.
    pub auth_endpoint: String,

    pub client_id: String,

    /// Only consumed by the token exchange step (not part of this tool);
    /// accepted here so a single file configures the whole flow.
    #[serde(default)]
    pub client_secret: Option<String>,

    pub redirect_uri: String,

    /// Requested scopes; space-joined into the `scope` query param.
    #[serde(default)]
    pub scopes: Vec<String>,

    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,
}

fn default_provider_name() -> String { "oauth2".into() }
fn default_log_dir() -> PathBuf { "/var/log/oauth2-login".into() }

impl Config {
    pub fn from_path(path: &std::path::Path) -> anyhow::Result<Self> {
        let s = std::fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&s)?;
        Ok(cfg)
    }

    pub fn provider(&self) -> Provider {
        Provider {
            name: self.provider_name.clone(),
            auth_endpoint: self.auth_endpoint.clone(),
            client_id: self.client_id.clone(),
            redirect_uri: self.redirect_uri.clone(),
            scopes: self.scopes.clone(),
        }
    }
}
