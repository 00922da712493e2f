use std::time::Duration;

use reqwest::{Client, StatusCode};
use tokio::time::sleep;

use crate::{
    config, error,
    management::TokenManager,
    types::{AlbumTrack, AlbumTracksResponse},
};

/// Retrieves the full track list of an album.
///
/// Fetches up to 50 tracks, which covers even long multi-movement programs
/// on a single disc. The movement filter downstream decides which of them
/// belong to the requested work.
///
/// # Authentication
///
/// Uses the stored token manager. If no valid token is found the program
/// terminates with a message directing the user to authenticate.
///
/// # Retry Logic
///
/// 502 Bad Gateway responses are retried after a 10-second delay; other
/// HTTP errors are propagated immediately to the caller.
pub async fn get_album_tracks(album_id: &str) -> Result<Vec<AlbumTrack>, reqwest::Error> {
    let api_url = format!(
        "{url}/albums/{id}/tracks?limit=50",
        url = &config::spotify_apiurl(),
        id = album_id
    );

    let mut token_mgr = match TokenManager::load().await {
        Ok(manager) => manager,
        Err(e) => {
            error!(
                "Failed to load token. Please run opuscli auth\n Error: {}",
                e
            );
        }
    };

    loop {
        let client = Client::new();
        let token = token_mgr.get_valid_token().await;
        let response = client.get(&api_url).bearer_auth(token).send().await;

        let response = match response {
            Ok(resp) => match resp.error_for_status() {
                Ok(valid_response) => valid_response,
                Err(err) => {
                    if let Some(status) = err.status() {
                        if status == StatusCode::BAD_GATEWAY {
                            sleep(Duration::from_secs(10)).await;
                            continue; // retry
                        }
                    }

                    return Err(err); // propagate other errors
                }
            },
            Err(err) => {
                return Err(err);
            } // network or reqwest error
        };

        let json = response.json::<AlbumTracksResponse>().await?;
        return Ok(json.items);
    }
}
