use log::debug;
use reqwest::blocking::Client;

use crate::{comic::ComicInfo, error::Result};

pub const DEFAULT_API_URL: &str = "https://xkcd.com";

/// Remote source of comic metadata.
pub trait ComicSource {
    fn latest(&self) -> Result<ComicInfo>;
    fn get(&self, id: u32) -> Result<ComicInfo>;
}

/// Blocking client for the xkcd json api.
#[derive(Debug, Clone)]
pub struct XkcdClient {
    http: Client,
    base_url: String,
}

impl XkcdClient {
    pub fn new(http: Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    pub fn latest_url(&self) -> String {
        format!("{}/info.0.json", self.base_url)
    }

    pub fn comic_url(&self, id: u32) -> String {
        format!("{}/{id}/info.0.json", self.base_url)
    }

    fn fetch(&self, url: &str) -> Result<ComicInfo> {
        debug!("GET {url}");
        let comic = self
            .http
            .get(url)
            .send()?
            .error_for_status()?
            .json::<ComicInfo>()?;
        Ok(comic)
    }
}

impl ComicSource for XkcdClient {
    fn latest(&self) -> Result<ComicInfo> {
        self.fetch(&self.latest_url())
    }

    fn get(&self, id: u32) -> Result<ComicInfo> {
        self.fetch(&self.comic_url(id))
    }
}
