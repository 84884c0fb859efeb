use sptopcli::genres::{aggregate, select_top_and_rest};
use sptopcli::types::Artist;

// Helper function to create a test artist
fn create_test_artist(id: &str, name: &str, genres: &[&str]) -> Artist {
    Artist {
        id: id.to_string(),
        name: name.to_string(),
        images: Vec::new(),
        genres: genres.iter().map(|g| g.to_string()).collect(),
    }
}

#[test]
fn test_aggregate_empty_input() {
    let ranked = aggregate(&[]);
    assert!(ranked.is_empty());
}

#[test]
fn test_aggregate_artists_without_genres() {
    let artists = vec![
        create_test_artist("id1", "Artist A", &[]),
        create_test_artist("id2", "Artist B", &[]),
    ];

    // Artists without genres contribute nothing
    let ranked = aggregate(&artists);
    assert!(ranked.is_empty());
}

#[test]
fn test_aggregate_counts_and_ranks_descending() {
    let artists = vec![
        create_test_artist("id1", "Artist A", &["rock", "pop"]),
        create_test_artist("id2", "Artist B", &["rock"]),
    ];

    let ranked = aggregate(&artists);

    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].genre, "rock");
    assert_eq!(ranked[0].count, 2);
    assert_eq!(ranked[1].genre, "pop");
    assert_eq!(ranked[1].count, 1);
}

#[test]
fn test_aggregate_ties_keep_first_seen_order() {
    let artists = vec![
        create_test_artist("id1", "Artist A", &["a"]),
        create_test_artist("id2", "Artist B", &["b"]),
        create_test_artist("id3", "Artist C", &["a"]),
        create_test_artist("id4", "Artist D", &["b"]),
    ];

    let ranked = aggregate(&artists);

    // Equal counts stay in encounter order: "a" was seen before "b"
    assert_eq!(ranked.len(), 2);
    assert_eq!((ranked[0].genre.as_str(), ranked[0].count), ("a", 2));
    assert_eq!((ranked[1].genre.as_str(), ranked[1].count), ("b", 2));
}

#[test]
fn test_aggregate_ties_rank_below_higher_counts() {
    let artists = vec![
        create_test_artist("id1", "Artist A", &["indie", "shoegaze"]),
        create_test_artist("id2", "Artist B", &["dream pop", "shoegaze"]),
        create_test_artist("id3", "Artist C", &["dream pop", "shoegaze"]),
    ];

    let ranked = aggregate(&artists);

    assert_eq!(ranked[0].genre, "shoegaze");
    assert_eq!(ranked[0].count, 3);
    assert_eq!(ranked[1].genre, "dream pop");
    assert_eq!(ranked[1].count, 2);
    assert_eq!(ranked[2].genre, "indie");
    assert_eq!(ranked[2].count, 1);
}

#[test]
fn test_aggregate_is_case_sensitive() {
    let artists = vec![
        create_test_artist("id1", "Artist A", &["Rock"]),
        create_test_artist("id2", "Artist B", &["rock"]),
    ];

    // Exact value equality, matching the upstream API convention
    let ranked = aggregate(&artists);
    assert_eq!(ranked.len(), 2);
}

#[test]
fn test_select_top_and_rest_five_artists() {
    let artists: Vec<Artist> = (0..5)
        .map(|i| create_test_artist(&format!("id{}", i), &format!("Artist {}", i), &[]))
        .collect();

    let top = select_top_and_rest(artists);

    assert_eq!(top.first.as_ref().map(|a| a.id.as_str()), Some("id0"));
    assert_eq!(top.second.as_ref().map(|a| a.id.as_str()), Some("id1"));
    assert_eq!(top.third.as_ref().map(|a| a.id.as_str()), Some("id2"));

    let rest_ids: Vec<&str> = top.rest.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(rest_ids, vec!["id3", "id4"]);
}

#[test]
fn test_select_top_and_rest_single_artist() {
    let artists = vec![create_test_artist("id0", "Artist 0", &["rock"])];

    let top = select_top_and_rest(artists);

    // Missing slots are absent, not an error
    assert_eq!(top.first.as_ref().map(|a| a.id.as_str()), Some("id0"));
    assert!(top.second.is_none());
    assert!(top.third.is_none());
    assert!(top.rest.is_empty());
}

#[test]
fn test_select_top_and_rest_empty() {
    let top = select_top_and_rest(Vec::new());

    assert!(top.first.is_none());
    assert!(top.second.is_none());
    assert!(top.third.is_none());
    assert!(top.rest.is_empty());
}
