//! Genre aggregation and top-artist selection.
//!
//! The functions here are the pure core of the application: they take the
//! artist records the Spotify client fetched and turn them into the values
//! the CLI renders. No I/O, no shared state.

use std::collections::HashMap;

use crate::types::{Artist, GenreCount, TopSelection};

/// Tallies genre tags across a sequence of artists into a ranked list.
///
/// Every genre string of every artist counts once per occurrence; comparison
/// is by exact value (case-sensitive, matching the upstream API convention,
/// no normalization). The result is sorted by count descending. Entries with
/// equal counts keep their first-seen encounter order - the sort is stable
/// and the counters are created in input order.
///
/// An artist without genres contributes nothing; an empty input yields an
/// empty list.
///
/// # Example
///
/// ```
/// // [rock, pop] + [rock] ranks rock (2) before pop (1)
/// let ranked = aggregate(&artists);
/// ```
pub fn aggregate(artists: &[Artist]) -> Vec<GenreCount> {
    let mut counts: Vec<GenreCount> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for artist in artists {
        for genre in &artist.genres {
            match index.get(genre.as_str()) {
                Some(&at) => counts[at].count += 1,
                None => {
                    index.insert(genre, counts.len());
                    counts.push(GenreCount {
                        genre: genre.clone(),
                        count: 1,
                    });
                }
            }
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// Partitions upstream-ordered artists into podium slots and a rest list.
///
/// The upstream API already ranks artists by listening frequency, so this
/// only splits the sequence: the first three elements become the named
/// `first`/`second`/`third` slots and everything after them lands in `rest`.
/// Fewer than three artists is not an error - the missing slots stay `None`
/// and the presentation layer shows a login affordance or skips them.
pub fn select_top_and_rest(artists: Vec<Artist>) -> TopSelection {
    let mut ranked = artists.into_iter();

    TopSelection {
        first: ranked.next(),
        second: ranked.next(),
        third: ranked.next(),
        rest: ranked.collect(),
    }
}
