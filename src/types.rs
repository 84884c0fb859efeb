use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

/// Shared state for one implicit-grant flow: the `state` nonce sent on the
/// authorize URL and the token once the callback delivered it.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub state: String,
    pub token: Option<Token>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub genres: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopArtistsResponse {
    pub items: Vec<Artist>,
    pub total: Option<u64>,
}

/// One entry of a ranked genre list. Derived per fetch, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenreCount {
    pub genre: String,
    pub count: u64,
}

/// The upstream-ordered top three artists plus everything after them.
/// Missing slots stay `None` when fewer than three artists were returned.
#[derive(Debug, Clone)]
pub struct TopSelection {
    pub first: Option<Artist>,
    pub second: Option<Artist>,
    pub third: Option<Artist>,
    pub rest: Vec<Artist>,
}

#[derive(Tabled)]
pub struct ArtistTableRow {
    pub rank: usize,
    pub name: String,
    pub genres: String,
}

#[derive(Tabled)]
pub struct GenreTableRow {
    pub genre: String,
    pub count: u64,
}
