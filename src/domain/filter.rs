// src/domain/filter.rs

/// The combination of category, tag, and search term narrowing the visible
/// note list. Transient; reset when the session ends.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Filter {
    pub category: Option<String>,
    pub tag: Option<String>,
    pub search: String,
}

impl Filter {
    /// Query parameters for a list request: exactly the non-empty fields.
    /// Encoding is left to the HTTP layer.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(category) = self.category.as_deref().filter(|c| !c.is_empty()) {
            pairs.push(("category", category.to_string()));
        }
        if let Some(tag) = self.tag.as_deref().filter(|t| !t.is_empty()) {
            pairs.push(("tag", tag.to_string()));
        }
        if !self.search.is_empty() {
            pairs.push(("search", self.search.clone()));
        }
        pairs
    }

    pub fn is_empty(&self) -> bool {
        self.query_pairs().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, None, "", vec![])]
    #[case(Some("Work"), None, "", vec![("category", "Work")])]
    #[case(None, Some("todo"), "", vec![("tag", "todo")])]
    #[case(None, None, "tree", vec![("search", "tree")])]
    #[case(Some("Work"), Some("todo"), "", vec![("category", "Work"), ("tag", "todo")])]
    #[case(Some("Work"), None, "tree", vec![("category", "Work"), ("search", "tree")])]
    #[case(None, Some("todo"), "tree", vec![("tag", "todo"), ("search", "tree")])]
    #[case(
        Some("Work"),
        Some("todo"),
        "tree",
        vec![("category", "Work"), ("tag", "todo"), ("search", "tree")]
    )]
    fn given_filter_fields_when_building_query_then_only_non_empty_fields_appear(
        #[case] category: Option<&str>,
        #[case] tag: Option<&str>,
        #[case] search: &str,
        #[case] expected: Vec<(&str, &str)>,
    ) {
        let filter = Filter {
            category: category.map(String::from),
            tag: tag.map(String::from),
            search: search.to_string(),
        };

        let pairs = filter.query_pairs();

        let expected: Vec<(&str, String)> =
            expected.into_iter().map(|(k, v)| (k, v.to_string())).collect();
        assert_eq!(pairs, expected);
    }

    #[test]
    fn given_empty_string_fields_when_building_query_then_treated_as_absent() {
        let filter = Filter {
            category: Some(String::new()),
            tag: Some(String::new()),
            search: String::new(),
        };

        assert!(filter.query_pairs().is_empty());
        assert!(filter.is_empty());
    }
}
