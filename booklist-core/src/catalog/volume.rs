//! Raw Google Books `volumes` response schema and its normalization

use crate::types::{
    BookRecord, BookSource, DEFAULT_AUTHOR, DEFAULT_DESCRIPTION, DEFAULT_TITLE, DEFAULT_YEAR,
    PLACEHOLDER_COVER,
};
use serde::Deserialize;

/// Top-level search response
///
/// The remote omits `items` entirely when nothing matched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumesResponse {
    #[serde(default)]
    pub total_items: Option<u64>,

    #[serde(default)]
    pub items: Option<Vec<Volume>>,
}

/// A single search hit
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Volume {
    pub id: String,

    #[serde(default)]
    pub volume_info: VolumeInfo,
}

/// Bibliographic fields of a volume; all optional
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeInfo {
    pub title: Option<String>,
    pub authors: Option<Vec<String>>,
    pub published_date: Option<String>,
    pub description: Option<String>,
    pub image_links: Option<ImageLinks>,
}

/// Cover image URLs
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageLinks {
    pub thumbnail: Option<String>,
}

fn present_or(value: Option<String>, default: &str) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

impl From<Volume> for BookRecord {
    fn from(volume: Volume) -> Self {
        let info = volume.volume_info;

        let author = match info.authors {
            Some(authors) if !authors.is_empty() => authors.join(", "),
            _ => DEFAULT_AUTHOR.to_string(),
        };
        let thumbnail = info.image_links.and_then(|links| links.thumbnail);

        BookRecord {
            id: volume.id,
            title: present_or(info.title, DEFAULT_TITLE),
            author,
            year: present_or(info.published_date, DEFAULT_YEAR),
            description: present_or(info.description, DEFAULT_DESCRIPTION),
            cover_image: present_or(thumbnail, PLACEHOLDER_COVER),
            source: BookSource::Catalog,
        }
    }
}
