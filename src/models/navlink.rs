use serde::{Deserialize, Serialize};

/// A navigation link visible to a role.
///
/// `index` is a string on the wire but ordinal in meaning; display order
/// follows ascending index. Duplicate indices are kept as-is in storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavLink {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "roleCode")]
    pub role_code: String,
    pub index: String,
    pub name: String,
    pub path: String,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl NavLink {
    /// Numeric value of the index; non-numeric indices sort after all
    /// numeric ones.
    fn index_value(&self) -> i64 {
        self.index.trim().parse().unwrap_or(i64::MAX)
    }
}

/// Order links for display by ascending index.
///
/// The sort is stable, so links sharing an index keep their stored
/// relative order (the renderer lets the later one win; storage is not
/// deduplicated).
pub fn display_order(mut links: Vec<NavLink>) -> Vec<NavLink> {
    links.sort_by(|a, b| {
        a.index_value()
            .cmp(&b.index_value())
            .then_with(|| a.index.cmp(&b.index))
    });
    links
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(index: &str, name: &str) -> NavLink {
        NavLink {
            id: None,
            role_code: "ADMIN".to_string(),
            index: index.to_string(),
            name: name.to_string(),
            path: format!("/{}", name.to_lowercase()),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_display_order_ascending_index() {
        let links = vec![link("10", "Settings"), link("2", "Users"), link("1", "Home")];
        let ordered = display_order(links);
        let names: Vec<&str> = ordered.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Home", "Users", "Settings"]);
    }

    #[test]
    fn test_display_order_keeps_duplicate_indices() {
        let links = vec![link("1", "First"), link("1", "Second")];
        let ordered = display_order(links);
        assert_eq!(ordered.len(), 2);
        // Stable sort: stored order preserved among equals
        assert_eq!(ordered[0].name, "First");
        assert_eq!(ordered[1].name, "Second");
    }

    #[test]
    fn test_display_order_non_numeric_index_sorts_last() {
        let links = vec![link("zzz", "Weird"), link("3", "Themes")];
        let ordered = display_order(links);
        assert_eq!(ordered[0].name, "Themes");
        assert_eq!(ordered[1].name, "Weird");
    }
}
