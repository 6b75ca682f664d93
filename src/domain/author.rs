// SPDX-License-Identifier: MPL-2.0
//! Post author variants.
//!
//! A review can be posted by a regular user or by a business account. The
//! two carry different extra data, so the author is a tagged enum and all
//! rendering code matches on the discriminant instead of probing fields.

/// Profile facts shared by every author kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub id: String,
    pub username: String,
    pub display_name: String,
    pub avatar_url: String,
}

/// The author of a feed post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Author {
    /// A regular user; their reviews carry a star rating.
    User { profile: Profile, verified: bool },
    /// A business account posting about itself; always shown verified.
    Business { profile: Profile },
}

impl Author {
    /// Returns the shared profile regardless of author kind.
    #[must_use]
    pub fn profile(&self) -> &Profile {
        match self {
            Author::User { profile, .. } | Author::Business { profile } => profile,
        }
    }

    /// Returns true for business authors.
    #[must_use]
    pub fn is_business(&self) -> bool {
        matches!(self, Author::Business { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(id: &str) -> Profile {
        Profile {
            id: id.to_string(),
            username: format!("user_{id}"),
            display_name: id.to_string(),
            avatar_url: String::new(),
        }
    }

    #[test]
    fn profile_is_reachable_for_both_kinds() {
        let user = Author::User {
            profile: profile("u1"),
            verified: false,
        };
        let business = Author::Business {
            profile: profile("b1"),
        };
        assert_eq!(user.profile().id, "u1");
        assert_eq!(business.profile().id, "b1");
    }

    #[test]
    fn is_business_matches_discriminant() {
        let business = Author::Business {
            profile: profile("b1"),
        };
        assert!(business.is_business());

        let user = Author::User {
            profile: profile("u1"),
            verified: true,
        };
        assert!(!user.is_business());
    }
}
