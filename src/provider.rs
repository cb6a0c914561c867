use anyhow::{Context, Result};
use url::Url;

/// Everything needed to point a user agent at a provider's authorization
/// endpoint. Built from config; this module only assembles URLs, it never
/// talks to the provider.
#[derive(Debug, Clone)]
pub struct Provider {
    pub name: String,
    pub auth_endpoint: String,
    pub client_id: String,
    pub redirect_uri: String,
    pub scopes: Vec<String>,
}

impl Provider {
    /// Build the standard OAuth2 authorization-code URL for this provider,
    /// carrying `state` plus any extra query params the caller appends
    /// (e.g. the PKCE challenge pair). Query params already present on the
    /// configured endpoint are left untouched.
    pub fn authorize_url(&self, state: &str, extra_params: &[(&str, &str)]) -> Result<Url> {
        let mut url = Url::parse(&self.auth_endpoint)
            .with_context(|| format!("invalid auth endpoint for provider '{}'", self.name))?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs
                .append_pair("response_type", "code")
                .append_pair("client_id", &self.client_id)
                .append_pair("redirect_uri", &self.redirect_uri)
                .append_pair("scope", &self.scopes.join(" "))
                .append_pair("state", state);
            for (k, v) in extra_params {
                pairs.append_pair(k, v);
            }
        }
        Ok(url)
    }
}
