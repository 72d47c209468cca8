//! Downloaded word list with a flat cache file
//!
//! The first online run fetches the dictionary and writes it verbatim to the
//! cache file; later runs read the cache instead of the network.

use super::WordListError;
use super::loader::words_from_text;
use crate::core::SecretWord;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Dictionary downloaded when playing with the online word list
pub const DICTIONARY_URL: &str =
    "http://svnweb.freebsd.org/csrg/share/dict/words?view=co&content-type=text/plain";

const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(30);

/// Load the online word list, preferring the cache file
///
/// # Errors
///
/// Returns an error if the cache is missing and the download fails, or if
/// the downloaded list cannot be written to the cache.
pub fn load_cached_or_download(url: &str, cache: &Path) -> Result<Vec<SecretWord>, WordListError> {
    if let Some(words) = read_cache(cache) {
        info!("Using cached word list {}", cache.display());
        return Ok(words);
    }

    let body = download(url)?;
    fs::write(cache, &body).map_err(|source| WordListError::Io {
        path: cache.to_path_buf(),
        source,
    })?;
    info!("Cached word list at {}", cache.display());

    Ok(words_from_text(&body))
}

/// Words from the cache file, if it exists and holds any
fn read_cache(cache: &Path) -> Option<Vec<SecretWord>> {
    let content = fs::read_to_string(cache).ok()?;
    let words = words_from_text(&content);
    if words.is_empty() {
        debug!("Ignoring empty cache file {}", cache.display());
        None
    } else {
        Some(words)
    }
}

fn download(url: &str) -> Result<String, WordListError> {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message("Downloading word list...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = fetch(url);
    spinner.finish_and_clear();

    let body = result?;
    debug!("Downloaded {} bytes from {url}", body.len());
    Ok(body)
}

fn fetch(url: &str) -> Result<String, reqwest::Error> {
    let client = reqwest::blocking::Client::builder()
        .timeout(DOWNLOAD_TIMEOUT)
        .build()?;

    client.get(url).send()?.error_for_status()?.text()
}
