use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    pipeline::{self, PipelineState},
    spotify, success,
    types::GenreTableRow,
    warning,
};

pub async fn top_genres(limit: u8) {
    let token = super::auth::login().await;

    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching top artists...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let result = spotify::artists::get_top_artists(&token.access_token, limit).await;
    pb.finish_and_clear();

    match pipeline::complete(result) {
        PipelineState::Loaded { genres, .. } => {
            let distinct = genres.len();

            let table_rows: Vec<GenreTableRow> = genres
                .into_iter()
                .map(|g| GenreTableRow {
                    genre: g.genre,
                    count: g.count,
                })
                .collect();

            let table = Table::new(table_rows);
            println!("{}", table);

            success!("Found {} distinct genres across your top artists.", distinct);
        }
        PipelineState::Failed(err) => warning!("Could not load genre statistics: {}", err),
        PipelineState::Unauthenticated => warning!("Not authenticated."),
        PipelineState::Loading => {}
    }
}
