//! Emission of the runner script and operator guide.
//!
//! Both artifacts are fixed templates embedded at compile time and written
//! verbatim; nothing is substituted into them. The only failure mode is a
//! filesystem error, which propagates to the caller.

use std::{
    io::Error,
    path::{Path, PathBuf},
};

/// The ready-to-run playlist script, emitted as `create_playlist.sh`.
pub const PLAYLIST_SCRIPT: &str = include_str!("../templates/create_playlist.sh");

/// The operator instructions, emitted as `README.txt`.
pub const OPERATOR_GUIDE: &str = include_str!("../templates/README.txt");

/// Writes the runner script into `dir` and returns its path.
pub async fn emit_script(dir: &Path) -> Result<PathBuf, Error> {
    write_artifact(dir, "create_playlist.sh", PLAYLIST_SCRIPT).await
}

/// Writes the operator guide into `dir` and returns its path.
pub async fn emit_guide(dir: &Path) -> Result<PathBuf, Error> {
    write_artifact(dir, "README.txt", OPERATOR_GUIDE).await
}

async fn write_artifact(dir: &Path, name: &str, contents: &str) -> Result<PathBuf, Error> {
    async_fs::create_dir_all(dir).await?;
    let path = dir.join(name);
    async_fs::write(&path, contents).await?;
    Ok(path)
}
