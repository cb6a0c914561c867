use crate::pkce;
use crate::provider::Provider;
use crate::random::SecureRandom;
use anyhow::{Context, Result};
use std::fmt;
use tracing::debug;

/// Number of random bytes behind the PKCE code verifier (64 hex chars,
/// comfortably inside RFC 7636's 43-128 char window).
const CODE_VERIFIER_BYTES: usize = 32;

/// Number of random bytes behind the anti-forgery state token (48 hex chars).
const STATE_BYTES: usize = 24;

/// One authorization attempt: the redirect URL to send the user agent to,
/// the state the callback must echo back, and the code verifier the token
/// exchange will need. Immutable after construction; the verifier is only
/// reachable through its accessor and is redacted from Debug output.
#[derive(Clone)]
pub struct Authorization {
    url: String,
    state: String,
    code_verifier: String,
}

impl Authorization {
    pub fn redirect_url(&self) -> &str {
        &self.url
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn code_verifier(&self) -> &str {
        &self.code_verifier
    }
}

impl fmt::Debug for Authorization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Authorization")
            .field("url", &self.url)
            .field("state", &self.state)
            .field("code_verifier", &"<redacted>")
            .finish()
    }
}

/// Generate a fresh authorization request for `provider`.
///
/// Draws the verifier and state independently from `rng`, derives the S256
/// challenge from the verifier, and embeds challenge + method + state in the
/// provider's authorization URL. The verifier itself never enters the URL.
///
/// Fails outright if the random source cannot deliver; a request built from
/// weak or partial secrets is never returned.
pub fn generate_authorization(
    provider: &Provider,
    rng: &dyn SecureRandom,
) -> Result<Authorization> {
    let code_verifier = rng
        .hex_string(CODE_VERIFIER_BYTES)
        .context("generating PKCE code verifier")?;
    let code_challenge = pkce::code_challenge_s256(&code_verifier);

    let state = rng
        .hex_string(STATE_BYTES)
        .context("generating state token")?;

    let url = provider.authorize_url(
        &state,
        &[
            ("code_challenge_method", pkce::CODE_CHALLENGE_METHOD),
            ("code_challenge", &code_challenge),
        ],
    )?;

    debug!(provider = %provider.name, %state, "generated authorization request");

    Ok(Authorization {
        url: url.into(),
        state,
        code_verifier,
    })
}
