//! HTTP endpoints for the local callback server.
//!
//! The auth command starts a short-lived local server while the user
//! approves access in their browser. Two endpoints exist:
//!
//! - [`callback`] - completes the OAuth 2.0 PKCE flow by exchanging the
//!   authorization code Spotify redirects back with for an access token
//! - [`health`] - a minimal liveness check returning status and version
//!
//! Both are plain [axum](https://docs.rs/axum) handlers wired up in
//! [`crate::server`]. The callback shares its PKCE state with the auth
//! command through an `Arc<Mutex<_>>` extension layer.

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
