use std::{fs, path::Path};

use log::debug;
use reqwest::blocking::Client;

use crate::error::{Error, Result};

/// Saves the resource behind an url to a local file.
pub trait ImageFetcher {
    fn download(&self, url: &str, local: &Path) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct Downloader {
    http: Client,
}

impl Downloader {
    pub fn new(http: Client) -> Self {
        Self { http }
    }
}

impl ImageFetcher for Downloader {
    fn download(&self, url: &str, local: &Path) -> Result<()> {
        let bytes = self.http.get(url).send()?.error_for_status()?.bytes()?;
        debug!("{} bytes from {url}", bytes.len());

        fs::write(local, &bytes).map_err(|source| Error::Write {
            path: local.to_path_buf(),
            source,
        })
    }
}

/// True when a regular file (not a directory) exists at `path`.
pub fn file_exists(path: &Path) -> bool {
    fs::metadata(path).map(|m| !m.is_dir()).unwrap_or(false)
}
