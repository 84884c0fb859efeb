use std::time::Duration;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    pipeline::{self, PipelineState},
    spotify,
    types::{Artist, ArtistTableRow, TopSelection},
    utils, warning,
};

pub async fn top_artists(limit: u8) {
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
        PipelineState::Loaded { top, .. } => print_selection(&top),
        PipelineState::Failed(err) => warning!("Could not load top artists: {}", err),
        PipelineState::Unauthenticated => warning!("Not authenticated."),
        PipelineState::Loading => {}
    }
}

fn print_selection(top: &TopSelection) {
    println!();
    println!("{}", "Your top artists".bold());
    println!();

    print_podium_slot("1st", top.first.as_ref());
    print_podium_slot("2nd", top.second.as_ref());
    print_podium_slot("3rd", top.third.as_ref());

    if top.rest.is_empty() {
        return;
    }

    println!();
    let table_rows: Vec<ArtistTableRow> = top
        .rest
        .iter()
        .enumerate()
        .map(|(at, a)| ArtistTableRow {
            rank: at + 4,
            name: a.name.clone(),
            genres: utils::format_genres(&a.genres, 3),
        })
        .collect();

    let table = Table::new(table_rows);
    println!("{}", table);
}

fn print_podium_slot(slot: &str, artist: Option<&Artist>) {
    match artist {
        Some(artist) => {
            let color = utils::color_for_id(&artist.id);
            println!(
                "  {} {}  {}",
                slot.bold(),
                artist.name.color(color).bold(),
                utils::format_genres(&artist.genres, 3).dimmed()
            );
            if let Some(cover) = artist.images.first() {
                println!("      {}", cover.url.dimmed());
            }
        }
        None => println!("  {} {}", slot.bold(), "-".dimmed()),
    }
}
