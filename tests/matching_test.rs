use opuscli::matching::{build_query, filter_album_tracks, pick_album_for_work};
use opuscli::types::{AlbumTrack, FoundTrack, TrackAlbum};
use opuscli::utils::{char_prefix, composer_surname, title_key_part};

// Helper function to create a search result track on a given album
fn search_track(id: &str, name: &str, album_id: &str, album_name: &str) -> FoundTrack {
    FoundTrack {
        id: id.to_string(),
        name: name.to_string(),
        uri: format!("spotify:track:{}", id),
        album: TrackAlbum {
            id: album_id.to_string(),
            name: album_name.to_string(),
        },
    }
}

// Helper function to create a track within an album's track list
fn album_track(id: &str, name: &str) -> AlbumTrack {
    AlbumTrack {
        id: id.to_string(),
        name: name.to_string(),
        uri: format!("spotify:track:{}", id),
    }
}

#[test]
fn test_build_query() {
    assert_eq!(
        build_query("Berlioz", "Symphonie fantastique, Op. 14"),
        "Berlioz Symphonie fantastique, Op. 14"
    );
}

#[test]
fn test_title_key_part() {
    // No colon: the comma splits
    assert_eq!(
        title_key_part("Symphony No. 9 in E minor, Op. 95 \"From the New World\""),
        "Symphony No. 9 in E minor"
    );

    // Colon splits first, then the comma
    assert_eq!(title_key_part("Three Nocturnes, No. 1: Nuages"), "Three Nocturnes");

    // Neither present: the whole title passes through
    assert_eq!(title_key_part("Wozzeck"), "Wozzeck");
}

#[test]
fn test_composer_surname() {
    assert_eq!(composer_surname("Antonín Dvořák"), "Dvořák");
    assert_eq!(composer_surname("J. C. Bach"), "Bach");
    assert_eq!(composer_surname("Brahms"), "Brahms");
}

#[test]
fn test_char_prefix_respects_char_boundaries() {
    // "Prélude à " holds multi-byte characters; counting is per char
    assert_eq!(char_prefix("prélude à l'après-midi", 10), "prélude à ");
    assert_eq!(char_prefix("abc", 10), "abc");
    assert_eq!(char_prefix("", 5), "");
}

#[test]
fn test_pick_album_thirty_char_prefix_wins() {
    // Exactly one album name contains the first 30 characters of the title
    let work = "Symphony No. 3 in E-flat major, Op. 55 \"Eroica\"";
    let tracks = vec![
        search_track("t1", "Slavonic Dances", "a1", "Dvořák: Orchestral Favourites"),
        search_track(
            "t2",
            "I. Allegro con brio",
            "a2",
            "Beethoven: Symphony No. 3 in E-flat major (Eroica)",
        ),
        search_track("t3", "Egmont Overture", "a3", "Beethoven: Overtures"),
    ];

    assert_eq!(pick_album_for_work(&tracks, work), Some("a2".to_string()));
}

#[test]
fn test_pick_album_before_colon_text_scores() {
    // The album repeats the title text before the colon but not the movement
    let work = "Three Nocturnes, No. 1: Nuages";
    let tracks = vec![
        search_track("t1", "La Mer: I.", "a1", "Debussy: La Mer"),
        search_track("t2", "Nuages", "a2", "Debussy: Three Nocturnes, No. 1 & La Mer"),
    ];

    assert_eq!(pick_album_for_work(&tracks, work), Some("a2".to_string()));
}

#[test]
fn test_pick_album_scores_accumulate_per_album() {
    // a2's single track scores 3 + 2; a1 accumulates 2 per track across
    // three tracks and overtakes it
    let work = "Three Nocturnes, No. 1: Nuages";
    let complete = "Debussy: Three Nocturnes, No. 1 and friends";
    let tracks = vec![
        search_track("t1", "Nuages", "a1", complete),
        search_track(
            "t2",
            "Three Nocturnes, No. 1: Nuages",
            "a2",
            "Three Nocturnes, No. 1: Nuages (Single)",
        ),
        search_track("t3", "Fêtes", "a1", complete),
        search_track("t4", "Sirènes", "a1", complete),
    ];

    assert_eq!(pick_album_for_work(&tracks, work), Some("a1".to_string()));
}

#[test]
fn test_pick_album_tie_breaks_to_first_discovered() {
    // Both albums contain the before-colon text once: a deterministic tie
    let work = "Three Nocturnes, No. 1: Nuages";
    let tracks = vec![
        search_track("t1", "Nuages", "a1", "Three Nocturnes, No. 1 (Historic)"),
        search_track("t2", "Nuages", "a2", "Three Nocturnes, No. 1 (Modern)"),
    ];

    assert_eq!(pick_album_for_work(&tracks, work), Some("a1".to_string()));
}

#[test]
fn test_pick_album_zero_scores_fall_back_to_first_tracks_album() {
    let work = "Symphonie fantastique, Op. 14";
    let tracks = vec![
        search_track("t1", "Some track", "a1", "Unrelated Compilation"),
        search_track("t2", "Other track", "a2", "Also Unrelated"),
    ];

    assert_eq!(pick_album_for_work(&tracks, work), Some("a1".to_string()));
}

#[test]
fn test_pick_album_without_tracks_is_none() {
    assert_eq!(pick_album_for_work(&[], "Symphonie fantastique, Op. 14"), None);
}

#[test]
fn test_filter_tracks_keeps_movements_by_ten_char_prefix() {
    // Normalized key part is "symphony no. 9 in e minor"; prefix "symphony n"
    let work = "Symphony No. 9 in E minor, Op. 95 \"From the New World\"";
    let tracks = vec![
        album_track("t1", "Symphony No. 9 in E Minor, Op. 95: I. Adagio - Allegro molto"),
        album_track("t2", "Symphony No. 9 in E Minor, Op. 95: II. Largo"),
        album_track("t3", "Slavonic Dance No. 1"),
    ];

    let chosen = filter_album_tracks(&tracks, "Dvořák", work);
    assert_eq!(chosen, vec!["spotify:track:t1", "spotify:track:t2"]);
}

#[test]
fn test_filter_tracks_relaxes_to_composer_surname() {
    // No track repeats the title prefix, but the surname appears
    let work = "Symphony No. 9 in E minor, Op. 95 \"From the New World\"";
    let tracks = vec![
        album_track("t1", "Dvořák: I. Adagio - Allegro molto"),
        album_track("t2", "Brahms: Hungarian Dance No. 5"),
    ];

    let chosen = filter_album_tracks(&tracks, "Antonín Dvořák", work);
    assert_eq!(chosen, vec!["spotify:track:t1"]);
}

#[test]
fn test_filter_tracks_relaxes_to_six_char_prefix() {
    // "sympho" matches where "symphony n" does not
    let work = "Symphony No. 9 in E minor, Op. 95 \"From the New World\"";
    let tracks = vec![
        album_track("t1", "The Symphony Project: Finale"),
        album_track("t2", "Slavonic Dance No. 1"),
    ];

    let chosen = filter_album_tracks(&tracks, "Someone Else", work);
    assert_eq!(chosen, vec!["spotify:track:t1"]);
}

#[test]
fn test_filter_tracks_empty_when_nothing_matches() {
    // The caller falls back to the single best search hit on empty
    let work = "Symphony No. 9 in E minor, Op. 95 \"From the New World\"";
    let tracks = vec![
        album_track("t1", "Morning Mood"),
        album_track("t2", "In the Hall of the Mountain King"),
    ];

    let chosen = filter_album_tracks(&tracks, "Antonín Dvořák", work);
    assert!(chosen.is_empty());
}
