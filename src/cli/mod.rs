//! # CLI Module
//!
//! User-facing command implementations. Each command wires the catalog,
//! emission, matching, and Spotify layers together and owns all user
//! interaction: tables, progress feedback, and the colored status macros.
//!
//! ## Commands
//!
//! - [`auth`] - Spotify OAuth authentication flow with PKCE security
//! - [`generate`] - builds the deduplicated works catalog and emits the
//!   runner script and operator guide into an output directory
//! - [`catalog`] - displays the deduplicated works catalog with optional
//!   substring filtering
//! - [`playlist`] - creates a playlist from a catalog file, one work at a
//!   time, isolating per-work failures
//!
//! ## Error presentation
//!
//! Fatal conditions (filesystem failures, missing configuration, a missing
//! token) go through the `error!` macro and terminate the process. Per-work
//! problems during a playlist run are collected and reported as warnings
//! once the run completes; a single bad work never stops the run.

mod auth;
mod catalog;
mod generate;
mod playlist;

pub use auth::auth;
pub use catalog::catalog;
pub use generate::generate;
pub use playlist::playlist;
