use std::{path::Path, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};
use tokio::time::sleep;

use crate::{
    catalog, error, info,
    management::TokenManager,
    matching, spotify, success, warning,
};

/// Delay between works, to stay polite toward the API.
const WORK_DELAY: Duration = Duration::from_millis(250);

/// Candidate tracks requested per work search.
const SEARCH_LIMIT: u32 = 20;

/// Builds a playlist from a catalog file, one work at a time.
///
/// Refuses to touch an existing playlist with the same name. Every work is
/// processed independently: a work without search results or with a failing
/// API call is recorded and reported after the run, never aborting it. The
/// best-effort total of added tracks and the playlist link are printed at
/// the end.
pub async fn playlist(csv: String, name: String, public: bool, market: String) {
    let entries = match catalog::load_catalog(Path::new(&csv)).await {
        Ok(entries) => entries,
        Err(e) => error!(
            "Failed to load catalog {}: {:?}\nRun opuscli generate first.",
            csv, e
        ),
    };

    let playlist_exists = match spotify::playlist::exists(&name).await {
        Ok(exists) => exists,
        Err(e) => {
            warning!("Failed to check if playlist exists: {}", e);
            false
        }
    };

    if playlist_exists {
        info!(
            "Playlist {} already exists. Pick another --name or delete it first.",
            name
        );
        return;
    }

    let playlist = match spotify::playlist::create(&name, public, "Auto-built from works.csv").await
    {
        Ok(resp) => resp,
        Err(e) => error!("Failed to create playlist: {}", e),
    };
    success!("Created playlist: {}", playlist.external_urls.spotify);

    let mut token_mgr = match TokenManager::load().await {
        Ok(manager) => manager,
        Err(e) => {
            error!(
                "Failed to load token. Please run opuscli auth\n Error: {}",
                e
            );
        }
    };

    let pb = ProgressBar::new(entries.len() as u64);
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} [{pos}/{len}] {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb.enable_steady_tick(Duration::from_millis(100));

    let mut total_added: usize = 0;
    let mut misses: Vec<String> = Vec::new();
    let mut failures: Vec<String> = Vec::new();

    for entry in &entries {
        let label = format!("{} — {}", entry.composer, entry.work);
        pb.set_message(label.clone());

        match add_work(
            &mut token_mgr,
            &playlist.id,
            &entry.composer,
            &entry.work,
            &market,
        )
        .await
        {
            Ok(0) => misses.push(label),
            Ok(added) => total_added += added,
            Err(e) => failures.push(format!("{}: {}", label, e)),
        }

        pb.inc(1);
        sleep(WORK_DELAY).await;
    }

    pb.finish_and_clear();

    for miss in &misses {
        warning!("No results for: {}", miss);
    }
    for failure in &failures {
        warning!("Failed to add {}", failure);
    }

    success!(
        "Done. Added ~{} tracks. Playlist link: {}",
        total_added,
        playlist.external_urls.spotify
    );
}

/// Searches one work, picks its album, and adds the matching tracks.
///
/// Returns the number of tracks added; 0 means the search came back empty.
async fn add_work(
    token_mgr: &mut TokenManager,
    playlist_id: &str,
    composer: &str,
    work: &str,
    market: &str,
) -> Result<usize, String> {
    let query = matching::build_query(composer, work);
    let token = token_mgr.get_valid_token().await;
    let tracks = spotify::search::search_tracks(&query, &token, SEARCH_LIMIT, market)
        .await
        .map_err(|e| e.to_string())?;

    if tracks.is_empty() {
        return Ok(0);
    }

    let mut chosen = match matching::pick_album_for_work(&tracks, work) {
        Some(album_id) => {
            let album_tracks = spotify::albums::get_album_tracks(&album_id)
                .await
                .map_err(|e| e.to_string())?;
            matching::filter_album_tracks(&album_tracks, composer, work)
        }
        None => Vec::new(),
    };

    // Safety fallback: the single best search hit
    if chosen.is_empty() {
        chosen.push(tracks[0].uri.clone());
    }

    for chunk in chosen.chunks(100) {
        spotify::playlist::add_tracks(playlist_id, chunk.to_vec())
            .await
            .map_err(|e| e.to_string())?;
    }

    Ok(chosen.len())
}
