use std::time::Duration;

use reqwest::{Client, StatusCode};
use tokio::time::sleep;

use crate::{
    config,
    types::{FoundTrack, SearchResponse},
    warning,
};

/// Searches Spotify for candidate tracks matching a composer + work query.
///
/// Issues a track search biased toward the given market and returns up to
/// `limit` candidates. For classical works the first page of results is
/// plenty; the album heuristics downstream do the actual narrowing.
///
/// # Arguments
///
/// * `query` - Free-text query, usually `"{composer} {work}"`
/// * `token` - Valid access token for Spotify API authentication
/// * `limit` - Maximum number of tracks to return (1-50)
/// * `market` - Two-letter market code biasing results (e.g., "GB")
///
/// # Rate Limiting
///
/// A 429 response is retried once after honoring the `Retry-After` header,
/// as long as the requested delay stays within 120 seconds; longer delays
/// only produce a warning and the response is returned as-is.
pub async fn search_tracks(
    query: &str,
    token: &str,
    limit: u32,
    market: &str,
) -> Result<Vec<FoundTrack>, reqwest::Error> {
    let client = Client::new();
    let api_url = format!("{uri}/search", uri = &config::spotify_apiurl());
    let limit = limit.to_string();
    let params = [
        ("q", query),
        ("type", "track"),
        ("limit", limit.as_str()),
        ("market", market),
    ];

    let mut response = client
        .get(&api_url)
        .query(&params)
        .bearer_auth(token)
        .send()
        .await?;
    // check for retry-after header
    if response.status() == StatusCode::TOO_MANY_REQUESTS {
        if let Some(retry_after) = response.headers().get("retry-after") {
            let retry_after = retry_after
                .to_str()
                .unwrap_or("0")
                .parse::<u64>()
                .unwrap_or(0);
            if retry_after <= 120 {
                sleep(Duration::from_secs(retry_after)).await;
                response = client
                    .get(&api_url)
                    .query(&params)
                    .bearer_auth(token)
                    .send()
                    .await?;
            } else {
                warning!(
                    "Retry after has reached an abnormal high of {} seconds. Try again tomorrow.",
                    retry_after
                );
            }
        }
    }

    let json = response.json::<SearchResponse>().await?;

    Ok(json.tracks.items)
}
