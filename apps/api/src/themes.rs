//! Built-in theme registry.
//!
//! Built once at startup and shared read-only through `AppState`. Each theme
//! is a complete default [`Design`]; requests override individual fields.

use std::collections::BTreeMap;

use crate::models::design::{
    Color, ColumnLayoutConfig, Colors, Design, Dimension, HeaderDesignConfig, PageSettings,
    PageSize,
};

pub const CLASSIC: &str = "classic";
pub const SIDEBAR: &str = "sidebar";

const DEFAULT_SIDEBAR_SECTIONS: &[&str] =
    &["skills", "publications", "values", "hobbies", "references"];

#[derive(Debug, Clone)]
pub struct ThemeRegistry {
    themes: BTreeMap<String, Design>,
}

impl ThemeRegistry {
    /// The `classic` (single column) and `sidebar` (two column) themes.
    pub fn builtin() -> Self {
        let classic = base_design(CLASSIC);
        let sidebar = Design {
            sidebar: Some(ColumnLayoutConfig {
                sidebar_width: dim("30%"),
                sidebar_position: "left".to_string(),
                gutter: dim("0.5cm"),
                sidebar_section_names: DEFAULT_SIDEBAR_SECTIONS
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
                background_color: None,
            }),
            ..base_design(SIDEBAR)
        };

        let themes = [classic, sidebar]
            .into_iter()
            .map(|design| (design.theme.clone(), design))
            .collect();
        Self { themes }
    }

    pub fn get(&self, name: &str) -> Option<&Design> {
        self.themes.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.themes.keys().map(String::as_str)
    }

    pub fn designs(&self) -> impl Iterator<Item = &Design> {
        self.themes.values()
    }
}

fn base_design(theme: &str) -> Design {
    let accent = color("rgb(0, 79, 144)");
    Design {
        theme: theme.to_string(),
        page: PageSettings {
            size: PageSize::UsLetter,
            top_margin: dim("0.7in"),
            bottom_margin: dim("0.7in"),
            left_margin: dim("0.7in"),
            right_margin: dim("0.7in"),
        },
        colors: Colors {
            body: color("rgb(0, 0, 0)"),
            name: accent.clone(),
            section_titles: accent.clone(),
        },
        header: HeaderDesignConfig {
            photo_space_left: dim("0.4cm"),
            photo_space_right: dim("0.4cm"),
            photo_width: dim("3.5cm"),
            photo_position: "left".to_string(),
            tag_fill_color: accent,
        },
        sidebar: None,
    }
}

fn dim(token: &'static str) -> Dimension {
    Dimension::from_static(token)
}

fn color(token: &'static str) -> Color {
    Color::from_static(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_registry_has_both_themes() {
        let registry = ThemeRegistry::builtin();
        let names: Vec<&str> = registry.names().collect();
        assert_eq!(names, vec!["classic", "sidebar"]);
    }

    #[test]
    fn test_classic_has_no_sidebar() {
        let registry = ThemeRegistry::builtin();
        assert!(registry.get(CLASSIC).unwrap().sidebar.is_none());
    }

    #[test]
    fn test_sidebar_defaults() {
        let registry = ThemeRegistry::builtin();
        let layout = registry.get(SIDEBAR).unwrap().sidebar.as_ref().unwrap();
        assert_eq!(layout.sidebar_width.as_str(), "30%");
        assert_eq!(layout.gutter.as_str(), "0.5cm");
        assert_eq!(layout.sidebar_position, "left");
        assert!(layout.sidebar_section_names.contains("skills"));
        assert!(layout.sidebar_section_names.contains("references"));
        assert_eq!(layout.sidebar_section_names.len(), 5);
    }

    #[test]
    fn test_header_defaults() {
        let registry = ThemeRegistry::builtin();
        let header = &registry.get(CLASSIC).unwrap().header;
        assert_eq!(header.photo_width.as_str(), "3.5cm");
        assert_eq!(header.photo_position, "left");
        assert_eq!(header.tag_fill_color.as_str(), "rgb(0, 79, 144)");
    }

    #[test]
    fn test_builtin_tokens_pass_validation() {
        for design in ThemeRegistry::builtin().designs() {
            let header = &design.header;
            for d in [&header.photo_space_left, &header.photo_space_right, &header.photo_width] {
                assert!(Dimension::parse("d", d.as_str()).is_ok(), "{d}");
            }
            for c in [&design.colors.body, &design.colors.name, &design.colors.section_titles] {
                assert_eq!(Color::parse("c", c.as_str()).as_ref(), Ok(c));
            }
            if let Some(layout) = &design.sidebar {
                assert!(Dimension::parse("d", layout.sidebar_width.as_str()).is_ok());
                assert!(Dimension::parse("d", layout.gutter.as_str()).is_ok());
            }
        }
    }

    #[test]
    fn test_unknown_theme_is_none() {
        assert!(ThemeRegistry::builtin().get("moderncv").is_none());
    }
}
