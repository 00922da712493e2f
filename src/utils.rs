use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

pub fn generate_code_verifier() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(128)
        .map(char::from)
        .collect()
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

/// Folds a string into its comparison form: lowercase, curly quotes turned
/// into straight ones, runs of whitespace collapsed to single spaces.
///
/// This is the one normalization used everywhere a title or composer name is
/// compared: catalog deduplication, album scoring, and track filtering.
pub fn normalize(s: &str) -> String {
    s.to_lowercase()
        .replace('\u{2019}', "'")
        .replace('\u{2018}', "'")
        .replace('\u{201c}', "\"")
        .replace('\u{201d}', "\"")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Returns the prefix holding at most `n` characters, never splitting a
/// codepoint. Titles are full of accented characters, so prefixes are
/// measured in characters, not bytes.
pub fn char_prefix(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// The part of a work title used to recognize its movements in a track list:
/// everything before the first colon, then before the first comma, trimmed.
///
/// `Symphony No. 9 in E minor, Op. 95 "From the New World"` becomes
/// `Symphony No. 9 in E minor`.
pub fn title_key_part(work: &str) -> &str {
    work.split(':')
        .next()
        .unwrap_or(work)
        .split(',')
        .next()
        .unwrap_or("")
        .trim()
}

/// The composer's surname, taken as the last whitespace-separated word.
pub fn composer_surname(composer: &str) -> &str {
    composer.split_whitespace().last().unwrap_or(composer)
}
