use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    client::DEFAULT_API_URL,
    error::{Error, Result},
};

pub const DATABASE_FILENAME: &str = ".xkcd_downloader.db";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Where the local info is stored, like what has been pulled from the api.
    pub database_path: PathBuf,
    /// Where the comic images are saved to.
    pub image_dir: PathBuf,
    pub api_url: String,
}

impl Config {
    /// Fills every missing override with its default under `home`.
    ///
    /// `home` is only required when one of the paths has no override.
    pub fn resolve(
        home: Option<&Path>,
        database_path: Option<PathBuf>,
        image_dir: Option<PathBuf>,
        api_url: Option<String>,
    ) -> Result<Self> {
        let home_dir = || home.ok_or(Error::HomeDir);
        let database_path = match database_path {
            Some(path) => path,
            None => home_dir()?.join(DATABASE_FILENAME),
        };
        let image_dir = match image_dir {
            Some(path) => path,
            None => home_dir()?.join("Pictures").join("xkcd"),
        };

        Ok(Self {
            database_path,
            image_dir,
            api_url: api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string()),
        })
    }

    /// Creates the image directory and its parents if necessary.
    pub fn prepare_image_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.image_dir).map_err(|source| Error::CreateDir {
            path: self.image_dir.clone(),
            source,
        })
    }
}
