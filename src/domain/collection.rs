// SPDX-License-Identifier: MPL-2.0
//! User lists (saved collections) and post drafts.

/// A user-owned collection that posts can be saved into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserList {
    pub id: String,
    pub author_id: String,
    pub title: String,
    pub is_private: bool,
    pub item_count: u32,
    /// Ids of users who can also add to this list.
    pub collaborator_ids: Vec<String>,
}

/// Input for creating a new post. Validated by the repository before it
/// becomes a [`ReviewItem`](crate::domain::review::ReviewItem).
#[derive(Debug, Clone, Default)]
pub struct PostDraft {
    pub business_id: Option<String>,
    pub business_name: String,
    pub media_url: Option<String>,
    pub rating: Option<f32>,
    pub caption: String,
    pub tags: Vec<String>,
}

impl PostDraft {
    /// A draft needs at least a target business to be submittable.
    #[must_use]
    pub fn is_submittable(&self) -> bool {
        self.business_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_draft_is_not_submittable() {
        assert!(!PostDraft::default().is_submittable());
    }

    #[test]
    fn draft_with_business_is_submittable() {
        let draft = PostDraft {
            business_id: Some("b1".to_string()),
            ..PostDraft::default()
        };
        assert!(draft.is_submittable());
    }
}
