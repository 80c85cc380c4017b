use serde_derive::{Deserialize, Serialize};

use crate::models::book::{BookRecord, UNKNOWN_AUTHOR};

/// Subset of the Google Books `volumes` listing the proxy relies on.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct VolumesResponse {
    #[serde(default)]
    pub items: Option<Vec<Volume>>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct Volume {
    #[serde(rename = "volumeInfo")]
    pub volume_info: VolumeInfo,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct VolumeInfo {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub authors: Option<Vec<String>>,
    #[serde(rename = "imageLinks", default)]
    pub image_links: Option<ImageLinks>,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct ImageLinks {
    #[serde(default)]
    pub thumbnail: Option<String>,
}

impl VolumesResponse {
    /// `None` when the catalog had nothing for the query.
    pub fn into_books(self) -> Option<Vec<BookRecord>> {
        match self.items {
            Some(items) if !items.is_empty() => Some(items.into_iter().map(BookRecord::from).collect()),
            _ => None
        }
    }
}

impl From<Volume> for BookRecord {
    fn from(volume: Volume) -> Self {
        let info = volume.volume_info;
        let authors = match info.authors {
            Some(authors) if !authors.is_empty() => authors,
            _ => vec![UNKNOWN_AUTHOR.to_string()]
        };
        let thumbnail = info.image_links
            .and_then(|links| links.thumbnail)
            .unwrap_or_default();

        BookRecord {
            title: info.title.unwrap_or_default(),
            authors,
            thumbnail,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn parse(value: serde_json::Value) -> VolumesResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn maps_full_metadata() {
        let books = parse(json!({
            "kind": "books#volumes",
            "totalItems": 1,
            "items": [{
                "id": "abc",
                "volumeInfo": {
                    "title": "Dune",
                    "authors": ["Frank Herbert"],
                    "imageLinks": { "smallThumbnail": "http://s", "thumbnail": "http://t" }
                }
            }]
        })).into_books().unwrap();

        assert_eq!(books, vec![BookRecord::new("Dune", vec!["Frank Herbert".to_string()], "http://t")]);
    }

    #[test]
    fn missing_authors_become_unknown_author() {
        let books = parse(json!({ "items": [{ "volumeInfo": { "title": "Anonymous" } }] }))
            .into_books().unwrap();
        assert_eq!(books[0].authors, vec!["Unknown Author".to_string()]);
        assert_eq!(books[0].thumbnail, "");
    }

    #[test]
    fn empty_authors_become_unknown_author() {
        let books = parse(json!({ "items": [{ "volumeInfo": { "title": "Anonymous", "authors": [] } }] }))
            .into_books().unwrap();
        assert_eq!(books[0].authors, vec!["Unknown Author".to_string()]);
    }

    #[test]
    fn image_links_without_thumbnail_give_empty_thumbnail() {
        let books = parse(json!({
            "items": [{ "volumeInfo": { "title": "Dune", "imageLinks": { "smallThumbnail": "http://s" } } }]
        })).into_books().unwrap();
        assert_eq!(books[0].thumbnail, "");
    }

    #[test]
    fn missing_or_empty_items_is_not_found() {
        assert!(parse(json!({ "kind": "books#volumes", "totalItems": 0 })).into_books().is_none());
        assert!(parse(json!({ "items": [] })).into_books().is_none());
    }

    #[test]
    fn keeps_upstream_order() {
        let books = parse(json!({
            "items": [
                { "volumeInfo": { "title": "one" } },
                { "volumeInfo": { "title": "two" } },
                { "volumeInfo": { "title": "three" } }
            ]
        })).into_books().unwrap();
        let titles: Vec<&str> = books.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["one", "two", "three"]);
    }
}
