// SPDX-License-Identifier: MPL-2.0
//! Demo seed data for the in-memory repository.

use crate::domain::author::{Author, Profile};
use crate::domain::business::Business;
use crate::domain::collection::UserList;
use crate::domain::review::{MediaSource, ReviewItem};

/// Everything the repository needs to start a demo session.
pub struct SeedData {
    pub feed: Vec<ReviewItem>,
    pub all_posts: Vec<ReviewItem>,
    pub lists: Vec<UserList>,
    pub businesses: Vec<Business>,
    pub current_author: Author,
}

fn user(id: &str, username: &str, display_name: &str) -> Author {
    Author::User {
        profile: Profile {
            id: id.to_string(),
            username: username.to_string(),
            display_name: display_name.to_string(),
            avatar_url: format!("https://cdn.tastereel.example/avatars/{id}.jpg"),
        },
        verified: false,
    }
}

fn business_author(id: &str, username: &str, display_name: &str) -> Author {
    Author::Business {
        profile: Profile {
            id: id.to_string(),
            username: username.to_string(),
            display_name: display_name.to_string(),
            avatar_url: format!("https://cdn.tastereel.example/avatars/{id}.jpg"),
        },
    }
}

#[allow(clippy::too_many_arguments)]
fn review(
    id: &str,
    author: Author,
    business_id: &str,
    business_name: &str,
    rating: Option<f32>,
    media: MediaSource,
    caption: &str,
    timestamp_label: &str,
    counts: (u32, u32, u32),
    tags: &[&str],
) -> ReviewItem {
    ReviewItem {
        id: id.to_string(),
        author,
        business_id: business_id.to_string(),
        business_name: business_name.to_string(),
        rating,
        media,
        caption: caption.to_string(),
        timestamp_label: timestamp_label.to_string(),
        agree_count: counts.0,
        disagree_count: counts.1,
        comment_count: counts.2,
        tags: tags.iter().map(|t| (*t).to_string()).collect(),
    }
}

fn image(url: &str) -> MediaSource {
    MediaSource::Image {
        url: url.to_string(),
    }
}

fn video(url: &str, poster: &str) -> MediaSource {
    MediaSource::Video {
        url: url.to_string(),
        poster_url: Some(poster.to_string()),
    }
}

/// Builds the demo data set.
#[must_use]
pub fn demo_data() -> SeedData {
    let current_author = user("u1", "noodle_hunter", "Sam Reyes");

    let businesses = vec![
        Business {
            id: "b1".to_string(),
            name: "Golden Wok".to_string(),
            category: "Chinese".to_string(),
            location: "48 Canal St".to_string(),
            rating: Some(4.6),
            review_count: 212,
        },
        Business {
            id: "b2".to_string(),
            name: "Primo Slice".to_string(),
            category: "Pizza".to_string(),
            location: "19 Mulberry St".to_string(),
            rating: Some(4.2),
            review_count: 340,
        },
        Business {
            id: "b3".to_string(),
            name: "Juniper & Ash".to_string(),
            category: "Bistro".to_string(),
            location: "7 Greene Ave".to_string(),
            rating: Some(4.8),
            review_count: 96,
        },
        Business {
            id: "b4".to_string(),
            name: "Taco Bravo".to_string(),
            category: "Mexican".to_string(),
            location: "230 5th Ave".to_string(),
            rating: Some(4.1),
            review_count: 158,
        },
    ];

    let feed = vec![
        review(
            "r1",
            user("u2", "broth_and_beyond", "Mia Chen"),
            "b1",
            "Golden Wok",
            Some(4.5),
            video(
                "https://cdn.tastereel.example/clips/r1.mp4",
                "https://cdn.tastereel.example/posters/r1.jpg",
            ),
            "Hand-pulled noodles worth the forty minute queue. Ask for the \
             chili oil on the side and thank me later.",
            "2h ago",
            (128, 6, 24),
            &["noodles", "latenight", "spicy"],
        ),
        review(
            "r2",
            business_author("b2", "primoslice", "Primo Slice"),
            "b2",
            "Primo Slice",
            None,
            image("https://cdn.tastereel.example/photos/r2.jpg"),
            "Friday only: the vodka slice is back.",
            "5h ago",
            (64, 2, 11),
            &["pizza", "special"],
        ),
        review(
            "r3",
            user("u3", "fork_first", "Dee Okafor"),
            "b3",
            "Juniper & Ash",
            Some(5.0),
            image("https://cdn.tastereel.example/photos/r3.jpg"),
            "The duck was unreasonable. Split the tasting menu between two \
             people and you still leave full. Service walked us through every \
             course without ever hovering.",
            "1d ago",
            (201, 3, 45),
            &["datenight", "tasting", "duck", "winelist"],
        ),
        review(
            "r4",
            user("u2", "broth_and_beyond", "Mia Chen"),
            "b4",
            "Taco Bravo",
            Some(3.5),
            video(
                "https://cdn.tastereel.example/clips/r4.mp4",
                "https://cdn.tastereel.example/posters/r4.jpg",
            ),
            "Solid al pastor, skip the birria.",
            "2d ago",
            (37, 12, 9),
            &["tacos", "lunch"],
        ),
        review(
            "r5",
            business_author("b1", "goldenwok", "Golden Wok"),
            "b1",
            "Golden Wok",
            None,
            image("https://cdn.tastereel.example/photos/r5.jpg"),
            "New late-night window open until 2am, Thursday through Saturday.",
            "3d ago",
            (88, 1, 17),
            &["latenight", "announcement"],
        ),
    ];

    let all_posts = feed.clone();

    let lists = vec![
        UserList {
            id: "l1".to_string(),
            author_id: "u1".to_string(),
            title: "Noodle pilgrimage".to_string(),
            is_private: false,
            item_count: 4,
            collaborator_ids: Vec::new(),
        },
        UserList {
            id: "l2".to_string(),
            author_id: "u2".to_string(),
            title: "Cheap eats".to_string(),
            is_private: true,
            item_count: 9,
            collaborator_ids: vec!["u1".to_string()],
        },
    ];

    SeedData {
        feed,
        all_posts,
        lists,
        businesses,
        current_author,
    }
}
