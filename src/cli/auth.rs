use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{
    error, info, spotify, success,
    types::{AuthSession, Token},
};

/// Runs the implicit-grant flow once and reports the obtained token.
///
/// Useful to verify that the client ID, redirect URI, and callback server
/// are wired up correctly. The token is not stored anywhere - the implicit
/// grant has no refresh token, so data commands run their own flow.
pub async fn auth() {
    let token = login().await;

    let expires_at = chrono::DateTime::from_timestamp((token.obtained_at + token.expires_in) as i64, 0)
        .map(|t| t.format("%H:%M:%S UTC").to_string())
        .unwrap_or_else(|| "unknown".to_string());

    success!("Authentication successful!");
    info!("Token type: {}", token.token_type);
    info!("Expires in {} seconds (around {})", token.expires_in, expires_at);
    info!("Nothing was persisted - the token lives only for this run.");
}

/// Acquires an access token through the implicit grant, exiting on failure.
///
/// Opens the consent page in the browser and waits for the local callback
/// server to deliver the fragment-embedded token. Failure or timeout
/// terminates the command, which is the CLI's login affordance: the user is
/// told to authenticate instead of seeing partial data.
pub async fn login() -> Token {
    info!("Opening the Spotify consent page in your browser...");

    let shared_state: Arc<Mutex<Option<AuthSession>>> = Arc::new(Mutex::new(None));
    match spotify::auth::acquire_token(Arc::clone(&shared_state)).await {
        Some(token) => token,
        None => error!("Authentication failed or timed out."),
    }
}
