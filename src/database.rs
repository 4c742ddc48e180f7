use log::debug;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::{Path, PathBuf};

use crate::{
    error::{Error, Result},
    imports::IMPORTS,
};

/// Persistent mapping from comic id to image url.
pub trait ComicStore {
    /// `Ok(None)` when the comic has not been cached yet.
    fn image_url(&self, id: u32) -> Result<Option<String>>;
    fn insert_comic(&self, id: u32, image_url: &str) -> Result<()>;
}

#[derive(Debug)]
pub struct Database {
    path: PathBuf,
    connection: Connection,
}

impl Database {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let connection = Connection::open(&path).map_err(|source| Error::Open {
            path: path.clone(),
            source,
        })?;
        Self::init(path, connection)
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::init(PathBuf::from(":memory:"), Connection::open_in_memory()?)
    }

    fn init(path: PathBuf, connection: Connection) -> Result<Self> {
        let journal_mode = connection
            .pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get::<_, String>(0))
            .and_then(|mode| connection.execute_batch(IMPORTS).map(|_| mode))
            .map_err(|source| Error::Open {
                path: path.clone(),
                source,
            })?;
        debug!("Opened {} (journal_mode={journal_mode})", path.display());
        Ok(Self { path, connection })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ComicStore for Database {
    fn image_url(&self, id: u32) -> Result<Option<String>> {
        let url = self
            .connection
            .prepare_cached(
                r#"
            SELECT imageURL
            FROM comics
            WHERE id=?1
            "#,
            )?
            .query_row(params![id], |row| row.get::<_, Option<String>>(0))
            .optional()?;
        Ok(url.map(Option::unwrap_or_default))
    }

    fn insert_comic(&self, id: u32, image_url: &str) -> Result<()> {
        self.connection
            .prepare_cached(
                r#"
            INSERT INTO comics (id, imageURL)
            VALUES (?1, ?2)
            "#,
            )?
            .execute(params![id, image_url])?;
        Ok(())
    }
}
