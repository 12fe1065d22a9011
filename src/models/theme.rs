use serde::{Deserialize, Serialize};

/// A single named color within a group, e.g. "primary500" -> "#6366F1"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorShade {
    #[serde(rename = "colorName")]
    pub color_name: String,
    #[serde(rename = "colorCode")]
    pub color_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorGroup {
    #[serde(rename = "groupName")]
    pub group_name: String,
    #[serde(rename = "colorShades")]
    pub color_shades: Vec<ColorShade>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Palette {
    #[serde(rename = "colorGroups")]
    pub color_groups: Vec<ColorGroup>,
}

/// A named color palette belonging to a role.
///
/// The backend keys themes by (role, themeName); `id` and the audit
/// fields are only present on records it has stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorTheme {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub role: String,
    #[serde(rename = "themeName")]
    pub theme_name: String,
    pub palette: Palette,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(rename = "updatedBy", default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
}

impl ColorTheme {
    /// Look up a color code by exact shade name across all groups.
    ///
    /// Returns an empty string when the name is absent so theme-dependent
    /// rendering can always fall back to its own defaults.
    pub fn color(&self, color_name: &str) -> String {
        for group in &self.palette.color_groups {
            for shade in &group.color_shades {
                if shade.color_name == color_name {
                    return shade.color_code.clone();
                }
            }
        }
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indigo_theme() -> ColorTheme {
        ColorTheme {
            id: None,
            role: "ADMIN".to_string(),
            theme_name: "Indigo".to_string(),
            palette: Palette {
                color_groups: vec![
                    ColorGroup {
                        group_name: "primary".to_string(),
                        color_shades: vec![
                            ColorShade {
                                color_name: "500".to_string(),
                                color_code: "#6366F1".to_string(),
                            },
                            ColorShade {
                                color_name: "700".to_string(),
                                color_code: "#4338CA".to_string(),
                            },
                        ],
                    },
                    ColorGroup {
                        group_name: "neutral".to_string(),
                        color_shades: vec![ColorShade {
                            color_name: "0".to_string(),
                            color_code: "#FFFFFF".to_string(),
                        }],
                    },
                ],
            },
            created_at: None,
            updated_at: None,
            updated_by: None,
        }
    }

    #[test]
    fn test_color_lookup_exact_match() {
        let theme = indigo_theme();
        assert_eq!(theme.color("500"), "#6366F1");
        // Lookup crosses group boundaries
        assert_eq!(theme.color("0"), "#FFFFFF");
    }

    #[test]
    fn test_color_lookup_absent_returns_empty() {
        let theme = indigo_theme();
        assert_eq!(theme.color("900"), "");
        assert_eq!(theme.color(""), "");
    }

    #[test]
    fn test_theme_wire_names_are_camel_case() {
        let theme = indigo_theme();
        let json = serde_json::to_string(&theme).unwrap();
        assert!(json.contains("\"themeName\""));
        assert!(json.contains("\"colorGroups\""));
        assert!(json.contains("\"colorShades\""));
        assert!(json.contains("\"colorName\""));

        let back: ColorTheme = serde_json::from_str(&json).unwrap();
        assert_eq!(back, theme);
    }
}
