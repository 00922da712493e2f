//! # Spotify Integration Module
//!
//! Client-side interface to the Spotify Web API: authentication, track
//! search, album track listings, and playlist management. All HTTP
//! communication with Spotify goes through this module; the matching
//! heuristics and the CLI layer never touch the wire themselves.
//!
//! ## Submodules
//!
//! - [`auth`] - OAuth 2.0 PKCE flow: verifier/challenge generation, browser
//!   launch, local callback handling, and token persistence. No client
//!   secret is stored or transmitted.
//! - [`search`] - track search with market bias, the entry point of every
//!   per-work lookup
//! - [`albums`] - track listings for a chosen album
//! - [`playlist`] - playlist creation, duplicate-name detection, and track
//!   insertion in batches
//!
//! ## Error handling
//!
//! Requests honor `Retry-After` on 429 responses (waiting up to 120 seconds
//! before giving up on the delay) and retry 502 Bad Gateway responses after
//! a short pause. Everything else surfaces as `reqwest::Error` or a `String`
//! message and is handled per call site; during a playlist run a failed work
//! never aborts the run.
//!
//! ## API coverage
//!
//! - `GET /search` - candidate tracks for a composer + work query
//! - `GET /albums/{id}/tracks` - the chosen album's track list
//! - `GET /me/playlists` - duplicate-name check before creation
//! - `POST /users/{user_id}/playlists` - create the playlist
//! - `POST /playlists/{playlist_id}/tracks` - add tracks (up to 100 per call)
//! - `POST /api/token` - token exchange and refresh
//!
//! Endpoints and credentials come from [`crate::config`]; tokens from
//! [`crate::management::TokenManager`].

pub mod albums;
pub mod auth;
pub mod playlist;
pub mod search;
