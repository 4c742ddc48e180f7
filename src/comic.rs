use std::path::{Path, PathBuf};

use regex::Regex;
use serde::Deserialize;

use crate::error::{Error, Result};

lazy_static::lazy_static! {
    static ref REG_BASENAME: Regex = Regex::new(r#"(?P<name>[^/?#]*)(?:[?#].*)?$"#).unwrap();
}

/// There is no comic #404.
pub const MISSING_COMIC: u32 = 404;

/// Comic metadata as served by `info.0.json`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ComicInfo {
    pub num: u32,
    #[serde(default)]
    pub img: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub safe_title: String,
    #[serde(default)]
    pub alt: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub month: String,
    #[serde(default)]
    pub day: String,
}

/// Last path segment of an image url, without query or fragment.
pub fn image_filename(url: &str) -> Option<&str> {
    REG_BASENAME
        .captures(url)
        .and_then(|caps| caps.name("name"))
        .map(|name| name.as_str())
        .filter(|name| !name.is_empty() && *name != "." && *name != "..")
}

/// Where the image behind `url` is stored inside `image_dir`.
pub fn local_path(image_dir: &Path, url: &str) -> Result<PathBuf> {
    image_filename(url)
        .map(|name| image_dir.join(name))
        .ok_or_else(|| Error::NoFilename(url.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_filename_0() {
        assert_eq!(
            Some("barrel_cropped_(1).jpg"),
            image_filename("https://imgs.xkcd.com/comics/barrel_cropped_(1).jpg")
        );
    }

    #[test]
    fn image_filename_1() {
        assert_eq!(
            Some("tree_cropped_(1).jpg"),
            image_filename("https://imgs.xkcd.com/comics/tree_cropped_(1).jpg?v=2#top")
        );
    }

    #[test]
    fn image_filename_2() {
        assert_eq!(Some("a.png"), image_filename("a.png"));
    }

    #[test]
    fn image_filename_3() {
        assert_eq!(None, image_filename(""));
        assert_eq!(None, image_filename("https://imgs.xkcd.com/comics/"));
        assert_eq!(None, image_filename("https://imgs.xkcd.com/comics/.."));
    }

    #[test]
    fn local_path_joins_image_dir() {
        let dir = Path::new("/tmp/xkcd");
        assert_eq!(
            dir.join("c.png"),
            local_path(dir, "https://imgs.xkcd.com/comics/c.png").unwrap()
        );
        assert!(matches!(
            local_path(dir, "https://imgs.xkcd.com/"),
            Err(Error::NoFilename(_))
        ));
    }

    #[test]
    fn comic_info_from_json() {
        let json = r#"{
            "month": "1", "num": 1, "link": "", "year": "2006", "news": "",
            "safe_title": "Barrel - Part 1", "transcript": "",
            "alt": "Don't we all.",
            "img": "https://imgs.xkcd.com/comics/barrel_cropped_(1).jpg",
            "title": "Barrel - Part 1", "day": "1"
        }"#;
        let comic: ComicInfo = serde_json::from_str(json).unwrap();
        assert_eq!(1, comic.num);
        assert_eq!("https://imgs.xkcd.com/comics/barrel_cropped_(1).jpg", comic.img);
        assert_eq!("Barrel - Part 1", comic.title);
    }

    #[test]
    fn comic_info_partial_json() {
        let comic: ComicInfo = serde_json::from_str(r#"{"num": 1608}"#).unwrap();
        assert_eq!(1608, comic.num);
        assert!(comic.img.is_empty());
    }
}
