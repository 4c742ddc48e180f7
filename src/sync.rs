use std::path::Path;

use log::{debug, info, warn};

use crate::{
    client::ComicSource,
    comic::{local_path, MISSING_COMIC},
    database::ComicStore,
    download::{file_exists, ImageFetcher},
    error::Result,
};

/// Counters collected over one pass of [`sync`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SyncReport {
    pub visited: u32,
    pub cache_hits: u32,
    pub fetched: u32,
    pub inserted: u32,
    pub insert_failures: u32,
    pub already_present: u32,
    pub downloaded: u32,
    pub download_failures: u32,
}

/// Walks every comic from 1 to the latest one, caching image urls in
/// `store` and saving missing images into `image_dir`.
///
/// Storage errors other than a cache miss and every metadata fetch error
/// end the pass. A failed insert or download only gets logged.
pub fn sync<S, C, F>(source: &S, store: &C, fetcher: &F, image_dir: &Path) -> Result<SyncReport>
where
    S: ComicSource + ?Sized,
    C: ComicStore + ?Sized,
    F: ImageFetcher + ?Sized,
{
    let latest = source.latest()?;
    info!("Latest comic is {}. {}", latest.num, latest.safe_title);
    debug!("{latest:?}");

    let mut report = SyncReport::default();
    for id in 1..=latest.num {
        if id == MISSING_COMIC {
            continue;
        }
        report.visited += 1;

        let image_url = match store.image_url(id)? {
            Some(url) => {
                report.cache_hits += 1;
                url
            }
            None => {
                let comic = source.get(id)?;
                report.fetched += 1;
                match store.insert_comic(id, &comic.img) {
                    Ok(()) => report.inserted += 1,
                    Err(e) => {
                        warn!("Unable to cache {id}. {}: {e}", comic.img);
                        report.insert_failures += 1;
                    }
                }
                comic.img
            }
        };

        let local = match local_path(image_dir, &image_url) {
            Ok(local) => local,
            Err(e) => {
                warn!("Unable to download {id}: {e}");
                report.download_failures += 1;
                continue;
            }
        };
        if file_exists(&local) {
            report.already_present += 1;
            continue;
        }

        info!("Downloading {id}. {image_url} to {}", local.display());
        match fetcher.download(&image_url, &local) {
            Ok(()) => report.downloaded += 1,
            Err(e) => {
                warn!(
                    "Unable to download {id}. {image_url} to {}: {e}",
                    local.display()
                );
                report.download_failures += 1;
            }
        }
    }

    Ok(report)
}
