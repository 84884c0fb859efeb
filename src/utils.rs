use colored::Color;
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

pub const USER_COLORS: [Color; 5] = [
    Color::Blue,
    Color::Magenta,
    Color::Green,
    Color::Yellow,
    Color::Red,
];

pub fn generate_state_param() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(16)
        .map(char::from)
        .collect()
}

pub fn color_for_id(id: &str) -> Color {
    let hash = Sha256::digest(id.as_bytes());
    USER_COLORS[hash[0] as usize % USER_COLORS.len()]
}

pub fn format_genres(genres: &[String], max: usize) -> String {
    genres
        .iter()
        .take(max)
        .cloned()
        .collect::<Vec<_>>()
        .join(", ")
}
