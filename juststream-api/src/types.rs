//! Common data types used by the content APIs

use std::fmt;

/// The kind of a catalog entry
#[derive(Debug, serde::Deserialize, serde::Serialize, PartialEq, Eq, Clone, Copy, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Movie,
    Series,
    Documentary,
}

impl ContentType {
    pub const ALL: [ContentType; 3] = [Self::Movie, Self::Series, Self::Documentary];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Series => "series",
            Self::Documentary => "documentary",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single entry of the streaming catalog.
#[derive(Debug, serde::Deserialize, serde::Serialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    /// Unique identifier, `content-<n>`
    pub id: String,
    pub title: String,
    pub description: String,
    /// URL of the poster image
    pub thumbnail: String,
    /// URL of the playable media
    pub video_url: String,
    /// Running time in seconds
    pub duration: u32,
    pub year: u16,
    /// Audience rating, e.g. `PG-13`
    pub rating: String,
    /// Never empty
    pub genres: Vec<String>,
    #[serde(rename = "type")]
    pub content_type: ContentType,
}

impl ContentItem {
    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }
}

/// A browsable category. Categories are derived from genres, so `id` and `name` are equal.
#[derive(Debug, serde::Deserialize, serde::Serialize, PartialEq, Eq, Clone)]
pub struct Category {
    pub id: String,
    pub name: String,
}

impl Category {
    pub fn from_genre(genre: &str) -> Self {
        Self {
            id: genre.to_string(),
            name: genre.to_string(),
        }
    }
}

/// One page of catalog results together with the pagination cursors.
#[derive(Debug, serde::Deserialize, serde::Serialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ContentResponse {
    pub items: Vec<ContentItem>,
    /// 1-based page number of this response
    pub page: u32,
    /// Whether a subsequent page exists
    pub has_more: bool,
    /// Number of items in the (possibly filtered) catalog
    pub total: usize,
}

#[cfg(test)]
mod test {
    use super::*;

    use googletest::prelude::*;

    #[googletest::test]
    fn test_content_item_wire_format() -> googletest::Result<()> {
        let json = r#"{
            "id": "content-7",
            "title": "Streaming Title 7",
            "description": "A description",
            "thumbnail": "https://picsum.photos/seed/content-7/400/600",
            "videoUrl": "https://example.com/video.mp4",
            "duration": 5400,
            "year": 2021,
            "rating": "PG-13",
            "genres": ["Drama", "Horror"],
            "type": "documentary"
        }"#;

        let item: ContentItem = serde_json::from_str(json).or_fail()?;
        expect_that!(
            item,
            matches_pattern!(ContentItem {
                id: eq("content-7"),
                video_url: eq("https://example.com/video.mp4"),
                duration: eq(&5400),
                content_type: eq(&ContentType::Documentary),
                ..
            })
        );
        expect_true!(item.has_genre("Horror"));
        expect_false!(item.has_genre("horror"));
        Ok(())
    }

    #[googletest::test]
    fn test_content_type_display() {
        let names = ContentType::ALL.map(|t| t.to_string()).join(",");
        expect_that!(names, eq("movie,series,documentary"));
    }
}
