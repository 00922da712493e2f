use reqwest::Client;

use crate::{
    config, error,
    management::TokenManager,
    types::{
        AddTracksRequest, AddTracksResponse, CreatePlaylistRequest, CreatePlaylistResponse,
        GetUserPlaylistsResponse,
    },
};

/// Checks whether the current user already owns a playlist with this name.
///
/// Looks at the user's first page of playlists (50 entries), which is enough
/// to catch re-runs with the default name.
pub async fn exists(name: &str) -> Result<bool, reqwest::Error> {
    let api_url = format!(
        "{url}/me/playlists?limit=50",
        url = &config::spotify_apiurl()
    );

    let mut token_mgr = load_token_manager().await;
    let client = Client::new();
    let token = token_mgr.get_valid_token().await;
    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    let json = response.json::<GetUserPlaylistsResponse>().await?;
    Ok(json.items.iter().any(|p| p.name == name))
}

/// Creates a playlist for the configured user and returns its id and link.
pub async fn create(
    name: &str,
    public: bool,
    description: &str,
) -> Result<CreatePlaylistResponse, reqwest::Error> {
    let api_url = format!(
        "{url}/users/{user}/playlists",
        url = &config::spotify_apiurl(),
        user = &config::spotify_user()
    );

    let body = CreatePlaylistRequest {
        name: name.to_string(),
        description: description.to_string(),
        public,
        collaborative: false,
    };

    let mut token_mgr = load_token_manager().await;
    let client = Client::new();
    let token = token_mgr.get_valid_token().await;
    let response = client
        .post(&api_url)
        .bearer_auth(token)
        .json(&body)
        .send()
        .await?
        .error_for_status()?;

    response.json::<CreatePlaylistResponse>().await
}

/// Adds track URIs to a playlist. Callers chunk to at most 100 URIs per
/// call, the API's limit.
pub async fn add_tracks(
    playlist_id: &str,
    uris: Vec<String>,
) -> Result<AddTracksResponse, reqwest::Error> {
    let api_url = format!(
        "{url}/playlists/{id}/tracks",
        url = &config::spotify_apiurl(),
        id = playlist_id
    );

    let body = AddTracksRequest { uris };

    let mut token_mgr = load_token_manager().await;
    let client = Client::new();
    let token = token_mgr.get_valid_token().await;
    let response = client
        .post(&api_url)
        .bearer_auth(token)
        .json(&body)
        .send()
        .await?
        .error_for_status()?;

    response.json::<AddTracksResponse>().await
}

async fn load_token_manager() -> TokenManager {
    match TokenManager::load().await {
        Ok(manager) => manager,
        Err(e) => {
            error!(
                "Failed to load token. Please run opuscli auth\n Error: {}",
                e
            );
        }
    }
}
