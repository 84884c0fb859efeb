use std::{sync::Arc, time::Duration};

use tokio::sync::Mutex;

use crate::{
    config,
    server::start_api_server,
    types::{AuthSession, Token},
    utils, warning,
};

/// Runs the OAuth 2.0 implicit grant flow with Spotify and returns the token.
///
/// This function orchestrates the entire authentication process:
/// 1. Generating a random `state` nonce for the authorize URL
/// 2. Starting the local callback server
/// 3. Opening the authorization URL in the user's browser
/// 4. Waiting for the callback to deliver the fragment-embedded token
///
/// The implicit grant hands the access token back in the redirect URL
/// fragment (`response_type=token`), so no client secret and no token
/// exchange request are involved. `show_dialog=true` forces the consent
/// screen so the flow behaves the same on every run.
///
/// # Arguments
///
/// * `shared_state` - Thread-safe shared state carrying the `state` nonce to
///   the callback handler and the token back from it
///
/// # Returns
///
/// Returns `Some(Token)` when the callback delivers a token within the
/// 60-second window, `None` otherwise. The token lives in memory only; the
/// implicit grant has no refresh token and nothing is persisted.
///
/// # Error Handling
///
/// - Browser launch failures result in a warning with manual URL instructions
/// - A `state` mismatch on the callback rejects the delivery, and the wait
///   simply times out
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use tokio::sync::Mutex;
///
/// let shared_state = Arc::new(Mutex::new(None));
/// let token = acquire_token(shared_state).await;
/// ```
pub async fn acquire_token(shared_state: Arc<Mutex<Option<AuthSession>>>) -> Option<Token> {
    let state_param = utils::generate_state_param();

    // start API server
    let server_state = Arc::clone(&shared_state);
    tokio::spawn(async move {
        start_api_server(server_state).await;
    });

    // Construct the authorization URL
    let auth_url = format!(
        "{spotify_auth_url}?client_id={client_id}&redirect_uri={redirect_uri}&scope={scope}&response_type=token&show_dialog=true&state={state}",
        spotify_auth_url = &config::spotify_apiauth_url(),
        client_id = &config::spotify_client_id(),
        redirect_uri = urlencoding::encode(&config::spotify_redirect_uri()),
        scope = &config::spotify_scope(),
        state = state_param,
    );

    // Store the nonce in shared state before redirect
    {
        let mut lock = shared_state.lock().await;
        *lock = Some(AuthSession {
            state: state_param,
            token: None,
        });
    }

    // Open the authorization URL in the default browser
    if webbrowser::open(&auth_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    // wait for callback to be hit
    wait_for_token(shared_state).await
}

/// Waits for the OAuth callback to deliver a token.
///
/// Polls the shared state for a collected token with a 60-second timeout.
/// This function runs concurrently with the callback handler that populates
/// the token after the fragment relay.
///
/// # Arguments
///
/// * `shared_state` - Shared state containing the auth session
///
/// # Returns
///
/// Returns `Some(Token)` if the callback completes within the timeout
/// period, or `None` if the timeout is reached without a token.
///
/// # Timeout Behavior
///
/// - Maximum wait time: 60 seconds
/// - Polling interval: 1 second
/// - Non-blocking: Uses async sleep to avoid CPU spinning
async fn wait_for_token(shared_state: Arc<Mutex<Option<AuthSession>>>) -> Option<Token> {
    use std::time::Instant;

    let max_wait = Duration::from_secs(60);
    let start = Instant::now();

    while start.elapsed() < max_wait {
        let lock = shared_state.lock().await;
        if let Some(session) = lock.as_ref() {
            if let Some(token) = &session.token {
                return Some(token.clone());
            }
        }
        drop(lock);
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    None
}
