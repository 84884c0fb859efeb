//! # CLI Module
//!
//! This module provides the command-line interface layer for Sptopcli, a
//! Spotify API client that fetches the user's top artists and derives genre
//! statistics from them. It implements all user-facing commands and
//! coordinates between authentication, the Spotify client, the aggregation
//! pipeline, and terminal output.
//!
//! ## Commands
//!
//! ### Authentication
//!
//! - [`auth`] - Runs the implicit-grant flow once and reports the obtained
//!   token's type and expiry. Nothing is persisted; every run of a data
//!   command performs its own flow.
//!
//! ### Data Commands
//!
//! - [`top_artists`] - Fetches the top artists and prints the podium (top
//!   three) plus the remaining artists as a table
//! - [`top_genres`] - Fetches the top artists and prints the ranked genre
//!   frequency table
//!
//! ## Architecture Design
//!
//! Each data command drives the same pipeline:
//!
//! ```text
//! Unauthenticated
//!     ↓  implicit grant (browser + local callback server)
//! Loading (spinner active, one fetch outstanding)
//!     ↓
//! Loaded (podium + ranked genres)  |  Failed (closed error set)
//! ```
//!
//! The pipeline state is an explicit value, not a collection of mutable
//! flags, and every failure path resolves the loading indicator and prints
//! a user-visible message.
//!
//! ## Error Handling Philosophy
//!
//! - **Fatal**: a failed or timed-out authentication terminates the command
//!   via the `error!` macro
//! - **Reported**: fetch failures (network, upstream status, empty result)
//!   are printed as warnings with the failure kind spelled out
//! - **Tolerated**: malformed fragment entries never abort the flow; a
//!   missing token simply means "not authenticated"
//!
//! ## Dependencies
//!
//! This module depends on several core application components:
//! - [`crate::spotify`] - Spotify API integration and authentication
//! - [`crate::pipeline`] - Fetch state machine and error taxonomy
//! - [`crate::genres`] - Aggregation and top selection
//! - [`crate::types`] - Data structures and type definitions

mod artists;
mod auth;
mod genres;

pub use artists::top_artists;
pub use auth::auth;
pub use genres::top_genres;
