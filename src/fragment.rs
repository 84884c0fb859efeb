//! Implicit-grant redirect fragment parsing.
//!
//! When Spotify completes the implicit grant it redirects the browser to the
//! registered callback with the token embedded in the URL *fragment*, e.g.
//! `#access_token=...&token_type=Bearer&expires_in=3600&state=...`. Browsers
//! never transmit the fragment to a server, so the callback page relays the
//! raw fragment string to the local collect endpoint, which hands it to the
//! functions in this module.
//!
//! Parsing is deliberately tolerant: unknown fields and arbitrary ordering
//! are accepted, an entry without `=` maps its key to an absent value, and a
//! repeated key keeps the last occurrence. All functions are pure.

use std::collections::HashMap;

use chrono::Utc;

use crate::types::Token;

/// Parses a redirect fragment into a key/value mapping.
///
/// Splits the input on `&`, splits each entry on the first `=`, and
/// percent-decodes the value. Keys are kept verbatim. An empty input yields
/// an empty mapping, and an entry carrying no `=` yields its key mapped to
/// `None` rather than an error.
///
/// # Arguments
///
/// * `fragment` - The substring of the redirect URL following the `#`
///   character, without the `#` itself
///
/// # Example
///
/// ```
/// let map = extract("access_token=abc&token_type=Bearer");
/// assert_eq!(map["access_token"].as_deref(), Some("abc"));
/// ```
pub fn extract(fragment: &str) -> HashMap<String, Option<String>> {
    let mut map = HashMap::new();

    for entry in fragment.split('&') {
        if entry.is_empty() {
            continue;
        }

        match entry.split_once('=') {
            Some((key, value)) => {
                let decoded = urlencoding::decode(value)
                    .map(|v| v.into_owned())
                    .unwrap_or_else(|_| value.to_string());
                map.insert(key.to_string(), Some(decoded));
            }
            None => {
                map.insert(entry.to_string(), None);
            }
        }
    }

    map
}

/// Returns the `access_token` field of a parsed fragment, if present.
///
/// A missing key, a key without a value, or an empty value all yield `None`;
/// callers treat that as "not authenticated" rather than as an error. This
/// is the only fragment field consumed downstream.
pub fn get_access_token(fragment: &str) -> Option<String> {
    extract(fragment)
        .remove("access_token")
        .flatten()
        .filter(|token| !token.is_empty())
}

/// Builds an in-memory [`Token`] from a redirect fragment.
///
/// Returns `None` when no access token is present. The token type defaults
/// to `Bearer` and the expiry to 3600 seconds when the corresponding fields
/// are missing or malformed; `obtained_at` is stamped with the current time.
/// The token is held in memory only and never persisted.
pub fn token_from_fragment(fragment: &str) -> Option<Token> {
    let mut fields = extract(fragment);
    let access_token = fields
        .remove("access_token")
        .flatten()
        .filter(|token| !token.is_empty())?;

    let token_type = fields
        .remove("token_type")
        .flatten()
        .unwrap_or_else(|| "Bearer".to_string());
    let expires_in = fields
        .remove("expires_in")
        .flatten()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3600);

    Some(Token {
        access_token,
        token_type,
        expires_in,
        obtained_at: Utc::now().timestamp() as u64,
    })
}
