//! Synthetic catalog generation.
//!
//! Every entry is a pure function of the catalog seed and its index, so a page, a genre filter
//! and a lookup by id over the same [`Catalog`] always agree with each other.

use juststream_api::{ContentItem, ContentType};
use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};

pub const GENRES: [&str; 8] = [
    "Action",
    "Comedy",
    "Drama",
    "Sci-Fi",
    "Horror",
    "Thriller",
    "Romance",
    "Documentary",
];

const RATINGS: [&str; 4] = ["G", "PG", "PG-13", "R"];

const SAMPLE_VIDEO_URL: &str =
    "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/BigBuckBunny.mp4";

const ID_PREFIX: &str = "content-";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    seed: u64,
    len: usize,
}

impl Catalog {
    pub fn new(seed: u64, len: usize) -> Self {
        Self { seed, len }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the entry at the 0-based `index`.
    pub fn item(&self, index: usize) -> Option<ContentItem> {
        (index < self.len).then(|| generate_item(self.seed, index))
    }

    /// Returns up to `count` consecutive entries starting at `offset`.
    pub fn slice(&self, offset: usize, count: usize) -> Vec<ContentItem> {
        let end = offset.saturating_add(count).min(self.len);
        (offset.min(end)..end)
            .map(|index| generate_item(self.seed, index))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = ContentItem> + '_ {
        (0..self.len).map(|index| generate_item(self.seed, index))
    }

    pub fn find(&self, id: &str) -> Option<ContentItem> {
        let number: usize = id.strip_prefix(ID_PREFIX)?.parse().ok()?;
        let item = self.item(number.checked_sub(1)?)?;
        // "content-007" parses to the same number but is a different id
        (item.id == id).then_some(item)
    }
}

fn item_rng(seed: u64, index: usize) -> StdRng {
    let mixed = (index as u64)
        .wrapping_add(1)
        .wrapping_mul(0x9E37_79B9_7F4A_7C15);
    StdRng::seed_from_u64(seed ^ mixed)
}

fn generate_item(seed: u64, index: usize) -> ContentItem {
    let mut rng = item_rng(seed, index);
    let number = index + 1;
    let id = format!("{ID_PREFIX}{number}");

    let genre_count = rng.gen_range(1..=3);
    let genres = GENRES
        .choose_multiple(&mut rng, genre_count)
        .map(|genre| genre.to_string())
        .collect();

    let minutes: u32 = rng.gen_range(60..180);
    let year = rng.gen_range(2020..2024);
    let rating = RATINGS[rng.gen_range(0..RATINGS.len())].to_string();
    let content_type = ContentType::ALL[rng.gen_range(0..ContentType::ALL.len())];

    ContentItem {
        thumbnail: format!("https://picsum.photos/seed/{id}/400/600"),
        title: format!("Streaming Title {number}"),
        description: format!(
            "This is a compelling description for streaming content {number}. \
             It features engaging storytelling and high production values."
        ),
        video_url: SAMPLE_VIDEO_URL.to_string(),
        duration: minutes * 60,
        year,
        rating,
        genres,
        content_type,
        id,
    }
}
