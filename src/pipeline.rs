//! Fetch state machine and error taxonomy.
//!
//! The application holds exactly one piece of transient state per run: where
//! the single top-artists fetch currently stands. Instead of ad hoc mutable
//! flags, the CLI drives the discrete transitions
//! `Unauthenticated -> Loading -> Loaded | Failed`, and every failure of the
//! outbound fetch is folded into the closed [`FetchError`] set so the
//! presentation layer always gets something it can show. The loading
//! indicator is resolved on every path, success or failure.

use std::fmt;

use reqwest::StatusCode;

use crate::{
    genres,
    types::{Artist, GenreCount, TopSelection},
};

/// The closed set of ways the artist fetch can fail.
#[derive(Debug)]
pub enum FetchError {
    /// No token was obtained, or the upstream rejected the one we sent (401).
    Unauthenticated,
    /// Transport-level failure: connection, TLS, timeout, or body decoding.
    Network(reqwest::Error),
    /// The upstream answered with a non-success status other than 401.
    Upstream(Option<StatusCode>),
    /// The upstream answered successfully but returned zero artists.
    EmptyResult,
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(StatusCode::UNAUTHORIZED) => FetchError::Unauthenticated,
            Some(status) => FetchError::Upstream(Some(status)),
            None => FetchError::Network(err),
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Unauthenticated => {
                write!(f, "not authenticated - run sptopcli auth or log in again")
            }
            FetchError::Network(err) => write!(f, "network error: {}", err),
            FetchError::Upstream(Some(status)) => {
                write!(f, "Spotify returned an error status: {}", status)
            }
            FetchError::Upstream(None) => write!(f, "Spotify returned an error status"),
            FetchError::EmptyResult => write!(f, "Spotify returned no top artists"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Where the single top-artists fetch currently stands.
#[derive(Debug)]
pub enum PipelineState {
    /// No access token yet; the login affordance is shown.
    Unauthenticated,
    /// Token obtained, fetch outstanding; the spinner is active.
    Loading,
    /// Fetch finished: podium selection plus the ranked genre list.
    Loaded {
        top: TopSelection,
        genres: Vec<GenreCount>,
    },
    /// Fetch failed with a reportable reason.
    Failed(FetchError),
}

impl PipelineState {
    pub fn is_loading(&self) -> bool {
        matches!(self, PipelineState::Loading)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, PipelineState::Loaded { .. } | PipelineState::Failed(_))
    }
}

/// Folds the fetch result into a terminal state.
///
/// A successful fetch with zero artists becomes `Failed(EmptyResult)`;
/// otherwise the artists are partitioned into the podium selection and
/// tallied into the ranked genre list in one step, so the two derived values
/// always describe the same fetch.
pub fn complete(result: Result<Vec<Artist>, FetchError>) -> PipelineState {
    match result {
        Ok(artists) if artists.is_empty() => PipelineState::Failed(FetchError::EmptyResult),
        Ok(artists) => {
            let genres = genres::aggregate(&artists);
            let top = genres::select_top_and_rest(artists);
            PipelineState::Loaded { top, genres }
        }
        Err(err) => PipelineState::Failed(err),
    }
}
