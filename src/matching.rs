//! Album selection and track filtering for multi-movement works.
//!
//! Classical works are usually stored one movement per track, so adding "the
//! work" to a playlist means finding an album that carries a complete
//! recording and pulling the right tracks out of it. Search results only
//! give candidate tracks; these functions score the albums behind them and
//! then filter the chosen album's track list down to the work's movements.
//!
//! Everything here is pure string matching over already-fetched values; the
//! network calls live in `spotify`.

use crate::{
    types::{AlbumTrack, FoundTrack},
    utils,
};

/// Number of title characters that must reappear in an album name for the
/// strong match bonus.
const ALBUM_HINT_PREFIX: usize = 30;

/// Track-name prefix lengths for the strict and relaxed filter passes.
const TRACK_KEY_PREFIX: usize = 10;
const TRACK_KEY_PREFIX_RELAXED: usize = 6;

/// A candidate album accumulating its match score. Candidates are kept in
/// the order their first track was seen; that index is the tie-break.
struct AlbumCandidate {
    id: String,
    score: u32,
}

/// The search query for a work: composer and title, nothing else.
///
/// Kept simple on purpose; recording-level refinement is left to the
/// listener editing the playlist afterwards.
pub fn build_query(composer: &str, work: &str) -> String {
    format!("{} {}", composer, work)
}

/// Picks the album most likely to contain the complete work.
///
/// Each candidate track contributes to its album's score: +3 if the first
/// thirty characters of the normalized work title occur in the normalized
/// album name, +2 if the normalized title text before the first colon does.
/// The highest-scoring album wins; a tie goes to the album discovered first,
/// which makes the selection deterministic for a given result order.
///
/// If no album scores at all, the first track's album is used. With no
/// tracks there is no match and `None` is returned.
pub fn pick_album_for_work(tracks: &[FoundTrack], work_hint: &str) -> Option<String> {
    if tracks.is_empty() {
        return None;
    }

    let hint = utils::normalize(work_hint);
    let hint_prefix = utils::char_prefix(&hint, ALBUM_HINT_PREFIX);
    let hint_before_colon = hint.split(':').next().unwrap_or("");

    let mut candidates: Vec<AlbumCandidate> = Vec::new();
    for track in tracks {
        let album_name = utils::normalize(&track.album.name);
        let mut score = 0;
        if !hint_prefix.is_empty() && album_name.contains(hint_prefix) {
            score += 3;
        }
        if !hint_before_colon.is_empty() && album_name.contains(hint_before_colon) {
            score += 2;
        }

        match candidates.iter_mut().find(|c| c.id == track.album.id) {
            Some(candidate) => candidate.score += score,
            None => candidates.push(AlbumCandidate {
                id: track.album.id.clone(),
                score,
            }),
        }
    }

    let mut best = &candidates[0];
    for candidate in &candidates[1..] {
        // strictly greater: earlier discovery wins ties
        if candidate.score > best.score {
            best = candidate;
        }
    }

    if best.score == 0 {
        return Some(tracks[0].album.id.clone());
    }
    Some(best.id.clone())
}

/// Filters an album's track list down to the movements of one work.
///
/// The strict pass keeps tracks whose normalized name contains the ten-char
/// prefix of the work's key part (title before colon and comma). If that
/// matches nothing the filter relaxes to the composer's surname or a
/// six-char prefix. An empty result means the album told us nothing; the
/// caller falls back to the single best search hit.
pub fn filter_album_tracks(
    album_tracks: &[AlbumTrack],
    composer: &str,
    work: &str,
) -> Vec<String> {
    let key = utils::normalize(utils::title_key_part(work));

    let strict = utils::char_prefix(&key, TRACK_KEY_PREFIX);
    let mut chosen: Vec<String> = album_tracks
        .iter()
        .filter(|t| !key.is_empty() && utils::normalize(&t.name).contains(strict))
        .map(|t| t.uri.clone())
        .collect();

    if chosen.is_empty() {
        let surname = utils::normalize(utils::composer_surname(composer));
        let relaxed = utils::char_prefix(&key, TRACK_KEY_PREFIX_RELAXED);
        chosen = album_tracks
            .iter()
            .filter(|t| {
                let name = utils::normalize(&t.name);
                (!surname.is_empty() && name.contains(&surname))
                    || (!key.is_empty() && name.contains(relaxed))
            })
            .map(|t| t.uri.clone())
            .collect();
    }

    chosen
}
