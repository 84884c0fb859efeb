//! # Spotify Integration Module
//!
//! This module provides the interface to the Spotify Web API for the two
//! things the application needs: obtaining an access token through the
//! implicit grant flow, and fetching the authenticated user's top artists.
//! It handles all HTTP communication and folds failures into the closed
//! error set defined in [`crate::pipeline`].
//!
//! ## Architecture
//!
//! ```text
//! Application Layer (CLI)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (OAuth 2.0 implicit grant)
//!     └── Top Artists (GET /me/top/artists)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Authentication Strategy
//!
//! The implicit grant returns the access token directly in the redirect URL
//! fragment rather than through a server-side code exchange:
//!
//! 1. **Authorize Request**: The user's browser is sent to Spotify's
//!    authorize endpoint with `response_type=token`, `show_dialog=true`, the
//!    fixed scope list, and a random `state` nonce
//! 2. **Consent**: The user grants (or denies) the requested permissions
//! 3. **Redirect**: Spotify redirects to the local callback with the token
//!    embedded in the URL fragment
//! 4. **Fragment Relay**: The callback page relays the fragment to the local
//!    collect endpoint, where it is parsed by [`crate::fragment`]
//! 5. **Handoff**: The token lands in the shared [`crate::types::AuthSession`]
//!    and the waiting auth driver picks it up
//!
//! The token is held in memory for the lifetime of the process. There is no
//! refresh token in the implicit grant and nothing is written to disk; a new
//! run performs a new flow.
//!
//! ## API Coverage
//!
//! - `GET /me/top/artists` - the user's top artists, first page only
//!
//! ## Error Handling
//!
//! All fetch failures are converted into [`crate::pipeline::FetchError`]:
//! a 401 becomes `Unauthenticated`, other error statuses become `Upstream`,
//! transport and decoding failures become `Network`, and a successful but
//! empty response is reported as `EmptyResult` by the pipeline. Nothing is
//! retried - the fetch happens once per command.

pub mod artists;
pub mod auth;
