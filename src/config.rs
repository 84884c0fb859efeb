//! Configuration management for the Spotify Top Artists CLI.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. It provides a centralized way to manage application
//! configuration including the Spotify client ID, authorization endpoints, the
//! callback server address, and the requested permission scopes.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Built-in application defaults
//!
//! Unlike flows that require a client secret, the implicit grant only needs a
//! public client ID, so every value here ships with a usable default and the
//! `.env` file is optional.

use dotenv;
use std::{env, path::PathBuf};

const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:3000";
const DEFAULT_CLIENT_ID: &str = "64f3f525894245e09b0053cbdb15bf36";
const DEFAULT_REDIRECT_URI: &str = "http://localhost:3000/callback";
const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";

/// The twelve permission scopes requested during authorization, comma-joined
/// as Spotify's authorize endpoint expects them.
const DEFAULT_SCOPE: &str = "user-read-email,playlist-read-private,\
playlist-read-collaborative,streaming,user-read-private,user-library-read,\
user-top-read,user-read-playback-state,user-modify-playback-state,\
user-read-currently-playing,user-read-recently-played,user-follow-read";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `sptopcli/.env`. This allows users to override
/// the built-in defaults (e.g. to use their own client ID) without exporting
/// variables in every shell.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/sptopcli/.env`
/// - macOS: `~/Library/Application Support/sptopcli/.env`
/// - Windows: `%LOCALAPPDATA%/sptopcli/.env`
///
/// # Returns
///
/// Returns `Ok(())` if the environment is set up, or an error string if the
/// parent directory cannot be created. A missing `.env` file is not an error
/// because every configuration value has a default.
///
/// # Example
///
/// ```
/// use sptopcli::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("sptopcli/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    // Optional override file; defaults cover everything.
    let _ = dotenv::from_path(path);
    Ok(())
}

/// Returns the bind address for the local OAuth callback server.
///
/// Retrieves the `SERVER_ADDRESS` environment variable, falling back to
/// `127.0.0.1:3000`. The port must match the one in the redirect URI
/// registered with the Spotify application.
///
/// # Example
///
/// ```
/// let addr = server_addr(); // e.g., "127.0.0.1:3000"
/// ```
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| DEFAULT_SERVER_ADDRESS.to_string())
}

/// Returns the Spotify API client ID used on the authorize URL.
///
/// Retrieves the `SPOTIFY_API_AUTH_CLIENT_ID` environment variable, falling
/// back to the built-in public client ID. The implicit grant never uses a
/// client secret, so this is the only credential the flow needs.
///
/// # Example
///
/// ```
/// let client_id = spotify_client_id(); // e.g., "64f3f5..."
/// ```
pub fn spotify_client_id() -> String {
    env::var("SPOTIFY_API_AUTH_CLIENT_ID").unwrap_or_else(|_| DEFAULT_CLIENT_ID.to_string())
}

/// Returns the OAuth redirect URI sent on the authorize URL.
///
/// Retrieves the `SPOTIFY_API_REDIRECT_URI` environment variable, falling
/// back to `http://localhost:3000/callback`. This must match the redirect URI
/// registered in the Spotify application settings and must point at the
/// local callback server.
///
/// # Example
///
/// ```
/// let redirect_uri = spotify_redirect_uri(); // e.g., "http://localhost:3000/callback"
/// ```
pub fn spotify_redirect_uri() -> String {
    env::var("SPOTIFY_API_REDIRECT_URI").unwrap_or_else(|_| DEFAULT_REDIRECT_URI.to_string())
}

/// Returns the comma-joined permission scopes requested during authorization.
///
/// Retrieves the `SPOTIFY_API_AUTH_SCOPE` environment variable, falling back
/// to the fixed twelve-scope list. Only `user-top-read` is strictly required
/// for the top-artists endpoint; the remaining scopes match what the upstream
/// application historically requested.
///
/// # Example
///
/// ```
/// let scope = spotify_scope(); // e.g., "user-read-email,user-top-read,..."
/// ```
pub fn spotify_scope() -> String {
    env::var("SPOTIFY_API_AUTH_SCOPE").unwrap_or_else(|_| DEFAULT_SCOPE.to_string())
}

/// Returns the Spotify OAuth authorization URL.
///
/// Retrieves the `SPOTIFY_API_AUTH_URL` environment variable, falling back to
/// `https://accounts.spotify.com/authorize`. This is where users are
/// redirected to grant permissions to the application.
///
/// # Example
///
/// ```
/// let auth_url = spotify_apiauth_url(); // e.g., "https://accounts.spotify.com/authorize"
/// ```
pub fn spotify_apiauth_url() -> String {
    env::var("SPOTIFY_API_AUTH_URL").unwrap_or_else(|_| DEFAULT_AUTH_URL.to_string())
}

/// Returns the Spotify Web API base URL.
///
/// Retrieves the `SPOTIFY_API_URL` environment variable, falling back to
/// `https://api.spotify.com/v1`. This is used for all API operations after
/// authentication.
///
/// # Example
///
/// ```
/// let api_url = spotify_apiurl(); // e.g., "https://api.spotify.com/v1"
/// ```
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}
