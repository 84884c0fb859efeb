use reqwest::Client;

use crate::{
    config,
    pipeline::FetchError,
    types::{Artist, TopArtistsResponse},
};

/// Retrieves the authenticated user's top artists from the Spotify Web API.
///
/// Issues a single authenticated `GET /me/top/artists` request. Only the
/// first page is consumed - the upstream default ordering (by listening
/// frequency) is preserved and no pagination cursor is followed.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `limit` - Maximum number of artists to return (1-50)
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<Artist>)` - Top artists in upstream rank order
/// - `Err(FetchError)` - One of the closed set of failure kinds: a 401
///   becomes `Unauthenticated`, other error statuses `Upstream`, and
///   transport or decoding failures `Network`
///
/// # Retry Behavior
///
/// The request is made exactly once. There is no retry, no debounce, and no
/// cancellation - at most one fetch is in flight per command, and a failure
/// is surfaced to the caller instead of being swallowed.
///
/// # Example
///
/// ```
/// let token = "BQC..."; // Valid access token
/// let artists = get_top_artists(token, 20).await?;
/// println!("Top artist: {}", artists[0].name);
/// ```
pub async fn get_top_artists(token: &str, limit: u8) -> Result<Vec<Artist>, FetchError> {
    let api_url = format!(
        "{uri}/me/top/artists?limit={limit}",
        uri = &config::spotify_apiurl(),
        limit = limit
    );

    let client = Client::new();
    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await
        .map_err(FetchError::Network)?
        .error_for_status()?;

    let res = response
        .json::<TopArtistsResponse>()
        .await
        .map_err(FetchError::Network)?;

    Ok(res.items)
}
