//! File naming and saving for exported drawings and images.

use super::types::ExportError;
use std::fs;
use std::path::{Path, PathBuf};

/// Nickname used when the user has not chosen one (or chose a blank one).
pub const DEFAULT_NICKNAME: &str = "drawing";

/// Fixed filename of the rasterized image.
pub const DEFAULT_IMAGE_FILENAME: &str = "scribble.png";

/// Exclusive upper bound of the random export suffix.
const SUFFIX_RANGE: u32 = 1_000_000;

/// Default directory exported files are delivered to.
pub fn default_export_directory() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// Normalizes user input into a nickname usable inside a filename.
///
/// Surrounding whitespace is trimmed, a blank value falls back to
/// [`DEFAULT_NICKNAME`], and path separators become `_`.
pub fn sanitize_nickname(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return DEFAULT_NICKNAME.to_string();
    }
    trimmed.replace(['/', '\\'], "_")
}

/// Builds `<nickname>_<NNNNNN>.json` from a suffix in `0..1_000_000`.
pub fn export_filename(nickname: &str, suffix: u32) -> String {
    format!("{}_{:06}.json", nickname, suffix % SUFFIX_RANGE)
}

/// Draws a uniformly distributed suffix in `0..1_000_000` from the OS.
pub fn random_suffix() -> Result<u32, ExportError> {
    let mut bytes = [0u8; 8];
    getrandom::getrandom(&mut bytes).map_err(|err| ExportError::Random(err.to_string()))?;
    Ok((u64::from_le_bytes(bytes) % u64::from(SUFFIX_RANGE)) as u32)
}

/// Ensure the target directory exists, creating it if necessary.
///
/// # Returns
/// The canonicalized path to the directory
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, ExportError> {
    if !directory.exists() {
        log::info!("Creating export directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    // Canonicalize to resolve relative paths
    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

/// Writes `data` to `directory/filename`, replacing any existing file.
///
/// # Returns
/// Path to the saved file
pub fn save_file(directory: &Path, filename: &str, data: &[u8]) -> Result<PathBuf, ExportError> {
    let directory = ensure_directory_exists(directory)?;
    let file_path = directory.join(filename);

    log::info!(
        "Saving {} ({} bytes)",
        file_path.display(),
        data.len()
    );

    fs::write(&file_path, data)?;

    let written_size = fs::metadata(&file_path)?.len();
    log::debug!("File written: {} bytes", written_size);

    Ok(file_path)
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}
