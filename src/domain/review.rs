// SPDX-License-Identifier: MPL-2.0
//! Review items and their media descriptors.

use super::author::Author;

/// Where the media for a post comes from.
///
/// A video carries an optional poster image used as a static fallback when
/// the video fails to load (load failures are local and silent, the item
/// keeps rendering).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaSource {
    Image {
        url: String,
    },
    Video {
        url: String,
        poster_url: Option<String>,
    },
}

impl MediaSource {
    /// Returns true when this descriptor is a video.
    #[must_use]
    pub fn is_video(&self) -> bool {
        matches!(self, MediaSource::Video { .. })
    }

    /// Returns the static image URL to fall back to, if any.
    #[must_use]
    pub fn fallback_url(&self) -> Option<&str> {
        match self {
            MediaSource::Image { url } => Some(url),
            MediaSource::Video { poster_url, .. } => poster_url.as_deref(),
        }
    }
}

/// One entry in the feed. Read-only to the feed engine; counters are the
/// canonical backend values, display adjustments happen in the vote state.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewItem {
    pub id: String,
    pub author: Author,
    pub business_id: String,
    pub business_name: String,
    /// Star rating; present only on user reviews.
    pub rating: Option<f32>,
    pub media: MediaSource,
    pub caption: String,
    /// Pre-formatted label ("2h ago"), not a structured time.
    pub timestamp_label: String,
    pub agree_count: u32,
    pub disagree_count: u32,
    pub comment_count: u32,
    pub tags: Vec<String>,
}

impl ReviewItem {
    /// Tags actually rendered on the card, capped at `limit`.
    #[must_use]
    pub fn visible_tags(&self, limit: usize) -> &[String] {
        &self.tags[..self.tags.len().min(limit)]
    }

    /// Whether the caption is long enough to need a "see more" affordance.
    #[must_use]
    pub fn caption_is_truncated(&self, limit_chars: usize) -> bool {
        self.caption.chars().count() > limit_chars
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::author::Profile;

    fn sample_item(id: &str) -> ReviewItem {
        ReviewItem {
            id: id.to_string(),
            author: Author::User {
                profile: Profile {
                    id: "u1".to_string(),
                    username: "noodle_hunter".to_string(),
                    display_name: "Noodle Hunter".to_string(),
                    avatar_url: String::new(),
                },
                verified: false,
            },
            business_id: "b1".to_string(),
            business_name: "Golden Wok".to_string(),
            rating: Some(4.5),
            media: MediaSource::Image {
                url: "https://example.com/wok.jpg".to_string(),
            },
            caption: "Hand-pulled noodles worth the queue".to_string(),
            timestamp_label: "2h ago".to_string(),
            agree_count: 12,
            disagree_count: 1,
            comment_count: 4,
            tags: vec![
                "noodles".to_string(),
                "latenight".to_string(),
                "cheap".to_string(),
                "spicy".to_string(),
            ],
        }
    }

    #[test]
    fn visible_tags_caps_the_list() {
        let item = sample_item("r1");
        assert_eq!(item.visible_tags(3).len(), 3);
        assert_eq!(item.visible_tags(10).len(), 4);
    }

    #[test]
    fn caption_truncation_uses_char_count() {
        let mut item = sample_item("r1");
        item.caption = "é".repeat(81);
        assert!(item.caption_is_truncated(80));
        item.caption = "é".repeat(80);
        assert!(!item.caption_is_truncated(80));
    }

    #[test]
    fn video_fallback_prefers_poster() {
        let media = MediaSource::Video {
            url: "v.mp4".to_string(),
            poster_url: Some("p.jpg".to_string()),
        };
        assert!(media.is_video());
        assert_eq!(media.fallback_url(), Some("p.jpg"));

        let bare = MediaSource::Video {
            url: "v.mp4".to_string(),
            poster_url: None,
        };
        assert_eq!(bare.fallback_url(), None);
    }
}
