// SPDX-License-Identifier: MPL-2.0
//! In-memory feed repository with simulated latency.
//!
//! Stands in for the real backend during development. Each operation
//! sleeps for a configurable interval before touching the store, so the
//! UI's loading states are exercised the way they would be over a network.

use crate::config::{
    DEFAULT_CREATE_LATENCY_MS, DEFAULT_FETCH_LATENCY_MS, DEFAULT_SEARCH_LATENCY_MS,
};
use crate::domain::author::Author;
use crate::domain::business::Business;
use crate::domain::collection::{PostDraft, UserList};
use crate::domain::review::{MediaSource, ReviewItem};
use crate::error::DataError;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::Duration;
use tokio::time::sleep;

/// Simulated latency per operation class.
#[derive(Debug, Clone, Copy)]
pub struct Latency {
    pub fetch: Duration,
    pub create: Duration,
    pub search: Duration,
}

impl Default for Latency {
    fn default() -> Self {
        Self {
            fetch: Duration::from_millis(DEFAULT_FETCH_LATENCY_MS),
            create: Duration::from_millis(DEFAULT_CREATE_LATENCY_MS),
            search: Duration::from_millis(DEFAULT_SEARCH_LATENCY_MS),
        }
    }
}

impl Latency {
    /// Zero latency everywhere; used by tests.
    #[must_use]
    pub fn none() -> Self {
        Self {
            fetch: Duration::ZERO,
            create: Duration::ZERO,
            search: Duration::ZERO,
        }
    }
}

struct Store {
    feed: Vec<ReviewItem>,
    all_posts: Vec<ReviewItem>,
    lists: Vec<UserList>,
    businesses: Vec<Business>,
}

/// The repository object. Construct once, share by `Arc`.
pub struct FeedRepository {
    store: Mutex<Store>,
    latency: Latency,
    next_id: AtomicU64,
    /// Author stamped onto created posts (the signed-in user).
    current_author: Author,
}

impl std::fmt::Debug for FeedRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedRepository")
            .field("latency", &self.latency)
            .finish()
    }
}

type DataResult<T> = std::result::Result<T, DataError>;

impl FeedRepository {
    /// Creates a repository over the given seed data.
    #[must_use]
    pub fn new(
        feed: Vec<ReviewItem>,
        all_posts: Vec<ReviewItem>,
        lists: Vec<UserList>,
        businesses: Vec<Business>,
        current_author: Author,
        latency: Latency,
    ) -> Self {
        Self {
            store: Mutex::new(Store {
                feed,
                all_posts,
                lists,
                businesses,
            }),
            latency,
            next_id: AtomicU64::new(1),
            current_author,
        }
    }

    /// Repository preloaded with the demo seed data.
    #[must_use]
    pub fn seeded(latency: Latency) -> Self {
        let seed = super::seed::demo_data();
        Self::new(
            seed.feed,
            seed.all_posts,
            seed.lists,
            seed.businesses,
            seed.current_author,
            latency,
        )
    }

    /// The signed-in author stamped onto created posts and lists.
    #[must_use]
    pub fn current_author(&self) -> &Author {
        &self.current_author
    }

    fn fresh_id(&self, prefix: &str) -> String {
        let n = self.next_id.fetch_add(1, Ordering::Relaxed);
        format!("{prefix}{n}")
    }

    /// The home feed, newest first.
    pub async fn feed(&self) -> DataResult<Vec<ReviewItem>> {
        sleep(self.latency.fetch).await;
        let store = self.store.lock().expect("repository store poisoned");
        Ok(store.feed.clone())
    }

    /// Every post known to the store (profile grids, search backfill).
    pub async fn all_posts(&self) -> DataResult<Vec<ReviewItem>> {
        sleep(self.latency.fetch).await;
        let store = self.store.lock().expect("repository store poisoned");
        Ok(store.all_posts.clone())
    }

    /// Validates a draft and prepends the new post to the feed.
    pub async fn create_post(&self, draft: PostDraft) -> DataResult<ReviewItem> {
        sleep(self.latency.create).await;

        let Some(business_id) = draft.business_id else {
            return Err(DataError::InvalidDraft(
                "a post must target a business".to_string(),
            ));
        };

        let item = ReviewItem {
            id: self.fresh_id("r"),
            author: self.current_author.clone(),
            business_id,
            business_name: draft.business_name,
            rating: draft.rating,
            media: MediaSource::Image {
                url: draft.media_url.unwrap_or_default(),
            },
            caption: draft.caption,
            timestamp_label: "Just now".to_string(),
            agree_count: 0,
            disagree_count: 0,
            comment_count: 0,
            tags: draft.tags,
        };

        let mut store = self.store.lock().expect("repository store poisoned");
        store.feed.insert(0, item.clone());
        store.all_posts.insert(0, item.clone());
        Ok(item)
    }

    /// Lists owned by (or shared with) the given user.
    pub async fn user_lists(&self, user_id: &str) -> DataResult<Vec<UserList>> {
        sleep(self.latency.fetch).await;
        let store = self.store.lock().expect("repository store poisoned");
        Ok(store
            .lists
            .iter()
            .filter(|l| {
                l.author_id == user_id || l.collaborator_ids.iter().any(|c| c == user_id)
            })
            .cloned()
            .collect())
    }

    /// Creates a new list owned by the current user.
    pub async fn create_list(
        &self,
        title: String,
        is_private: bool,
        collaborator_ids: Vec<String>,
    ) -> DataResult<UserList> {
        sleep(self.latency.create).await;
        let list = UserList {
            id: self.fresh_id("l"),
            author_id: self.current_author.profile().id.clone(),
            title,
            is_private,
            item_count: 0,
            collaborator_ids,
        };
        let mut store = self.store.lock().expect("repository store poisoned");
        store.lists.insert(0, list.clone());
        Ok(list)
    }

    /// Saves a post into a list.
    pub async fn add_to_list(&self, list_id: &str, post_id: &str) -> DataResult<()> {
        sleep(self.latency.create).await;
        let mut store = self.store.lock().expect("repository store poisoned");

        if !store.all_posts.iter().any(|p| p.id == post_id) {
            return Err(DataError::NotFound(format!("post {post_id}")));
        }

        let Some(list) = store.lists.iter_mut().find(|l| l.id == list_id) else {
            return Err(DataError::NotFound(format!("list {list_id}")));
        };
        list.item_count += 1;
        Ok(())
    }

    /// Businesses matching the query; an empty query returns everything.
    pub async fn search_businesses(&self, query: &str) -> DataResult<Vec<Business>> {
        sleep(self.latency.search).await;
        let store = self.store.lock().expect("repository store poisoned");
        if query.is_empty() {
            return Ok(store.businesses.clone());
        }
        Ok(store
            .businesses
            .iter()
            .filter(|b| b.matches(query))
            .cloned()
            .collect())
    }

    /// Posts about businesses matching the query, for the search feed.
    pub async fn search_posts(&self, query: &str) -> DataResult<Vec<ReviewItem>> {
        sleep(self.latency.search).await;
        let store = self.store.lock().expect("repository store poisoned");
        if query.is_empty() {
            return Ok(store.all_posts.clone());
        }
        let matching: Vec<String> = store
            .businesses
            .iter()
            .filter(|b| b.matches(query))
            .map(|b| b.id.clone())
            .collect();
        Ok(store
            .all_posts
            .iter()
            .filter(|p| {
                matching.iter().any(|id| *id == p.business_id)
                    || p.business_name.to_lowercase().contains(&query.to_lowercase())
            })
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo() -> FeedRepository {
        FeedRepository::seeded(Latency::none())
    }

    #[tokio::test]
    async fn feed_returns_seed_posts() {
        let repo = repo();
        let feed = repo.feed().await.expect("feed failed");
        assert!(!feed.is_empty());
    }

    #[tokio::test]
    async fn create_post_prepends_to_feed() {
        let repo = repo();
        let before = repo.feed().await.expect("feed failed").len();

        let draft = PostDraft {
            business_id: Some("b1".to_string()),
            business_name: "Golden Wok".to_string(),
            caption: "New favourite".to_string(),
            ..PostDraft::default()
        };
        let created = repo.create_post(draft).await.expect("create failed");

        let feed = repo.feed().await.expect("feed failed");
        assert_eq!(feed.len(), before + 1);
        assert_eq!(feed[0].id, created.id);
        assert_eq!(feed[0].timestamp_label, "Just now");
    }

    #[tokio::test]
    async fn create_post_without_business_is_rejected() {
        let repo = repo();
        let result = repo.create_post(PostDraft::default()).await;
        assert!(matches!(result, Err(DataError::InvalidDraft(_))));
    }

    #[tokio::test]
    async fn user_lists_filters_by_owner_and_collaborators() {
        let repo = repo();
        let lists = repo.user_lists("u1").await.expect("lists failed");
        assert!(lists
            .iter()
            .all(|l| l.author_id == "u1" || l.collaborator_ids.contains(&"u1".to_string())));
    }

    #[tokio::test]
    async fn create_list_is_owned_by_current_user() {
        let repo = repo();
        let list = repo
            .create_list("Late night".to_string(), false, Vec::new())
            .await
            .expect("create list failed");
        assert_eq!(list.author_id, "u1");
        assert_eq!(list.item_count, 0);
    }

    #[tokio::test]
    async fn add_to_list_bumps_the_counter() {
        let repo = repo();
        let lists = repo.user_lists("u1").await.expect("lists failed");
        let list = &lists[0];
        let posts = repo.all_posts().await.expect("posts failed");

        repo.add_to_list(&list.id, &posts[0].id)
            .await
            .expect("add failed");

        let lists_after = repo.user_lists("u1").await.expect("lists failed");
        let after = lists_after.iter().find(|l| l.id == list.id).unwrap();
        assert_eq!(after.item_count, list.item_count + 1);
    }

    #[tokio::test]
    async fn add_to_unknown_list_fails() {
        let repo = repo();
        let posts = repo.all_posts().await.expect("posts failed");
        let result = repo.add_to_list("no-such-list", &posts[0].id).await;
        assert!(matches!(result, Err(DataError::NotFound(_))));
    }

    #[tokio::test]
    async fn search_businesses_matches_name_and_category() {
        let repo = repo();
        let all = repo.search_businesses("").await.expect("search failed");
        assert!(!all.is_empty());

        let hits = repo.search_businesses("wok").await.expect("search failed");
        assert!(hits.iter().all(|b| b.matches("wok")));
        assert!(!hits.is_empty());
    }

    #[tokio::test]
    async fn search_posts_filters_by_business() {
        let repo = repo();
        let hits = repo.search_posts("wok").await.expect("search failed");
        assert!(!hits.is_empty());
        for post in &hits {
            assert!(post.business_name.to_lowercase().contains("wok"));
        }
    }
}
