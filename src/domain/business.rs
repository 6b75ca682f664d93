// SPDX-License-Identifier: MPL-2.0
//! Business records backing search and profile links.

/// A restaurant or venue that reviews point at.
///
/// The map/discovery view consumes these through the search operation; the
/// feed engine itself only needs the id/name pair carried on each item.
#[derive(Debug, Clone, PartialEq)]
pub struct Business {
    pub id: String,
    pub name: String,
    pub category: String,
    pub location: String,
    pub rating: Option<f32>,
    pub review_count: u32,
}

impl Business {
    /// Case-insensitive match against a search query, on name or category.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        self.name.to_lowercase().contains(&q) || self.category.to_lowercase().contains(&q)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn business(name: &str, category: &str) -> Business {
        Business {
            id: "b1".to_string(),
            name: name.to_string(),
            category: category.to_string(),
            location: String::new(),
            rating: None,
            review_count: 0,
        }
    }

    #[test]
    fn matches_name_case_insensitively() {
        let b = business("Golden Wok", "Chinese");
        assert!(b.matches("golden"));
        assert!(b.matches("WOK"));
    }

    #[test]
    fn matches_category() {
        let b = business("Golden Wok", "Chinese");
        assert!(b.matches("chin"));
        assert!(!b.matches("pizza"));
    }
}
