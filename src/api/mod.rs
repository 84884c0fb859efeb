//! # API Module
//!
//! This module provides the HTTP endpoints served by the local callback
//! server during the implicit-grant authentication flow.
//!
//! ## Overview
//!
//! The implicit grant returns the access token in the redirect URL
//! *fragment*. Browsers never send the fragment to a server, so receiving
//! the token takes two endpoints working together:
//!
//! - [`callback`] - The registered redirect target. Serves a small relay
//!   page whose script forwards `location.hash` to the collect endpoint.
//! - [`collect`] - Receives the relayed fragment as its raw query string,
//!   parses it with [`crate::fragment`], verifies the `state` nonce, and
//!   stores the token into the shared auth session.
//! - [`health`] - Liveness endpoint returning application status and version
//!   for quick manual checks.
//!
//! ## Architecture
//!
//! The module is built using the [Axum](https://docs.rs/axum) web framework.
//! Each endpoint is an async function wired into the router in
//! [`crate::server`]; the collect endpoint additionally receives the shared
//! auth session through an [`axum::Extension`] layer.
//!
//! ## Security Considerations
//!
//! - The server binds to the loopback interface only and lives for the
//!   duration of one authentication flow
//! - Token delivery is rejected when the fragment's `state` nonce does not
//!   match the one sent on the authorize URL
//! - The token is handed to the waiting CLI process in memory and never
//!   written to disk

mod callback;
mod collect;
mod health;

pub use callback::callback;
pub use collect::collect;
pub use health::health;
