//! Section Distributor: stable partition of catalog sections into the
//! sidebar and main column groups.

use std::collections::HashSet;

use serde::Serialize;

use crate::models::cv::SectionCatalog;
use crate::models::design::ColumnLayoutConfig;

/// Section names per column, each in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SectionGroups {
    pub sidebar: Vec<String>,
    pub main: Vec<String>,
}

impl SectionGroups {
    pub fn is_single_column(&self) -> bool {
        self.sidebar.is_empty()
    }
}

/// Splits the catalog into sidebar and main groups.
///
/// Membership compares snake_case forms, so `"Skills"` in the catalog matches
/// `"skills"` in the allow-list. Allow-list names missing from the catalog are
/// ignored. Without a column layout every section goes to `main`.
pub fn distribute_sections(
    catalog: &SectionCatalog,
    layout: Option<&ColumnLayoutConfig>,
) -> SectionGroups {
    let allow_list: HashSet<String> = layout
        .map(|l| l.sidebar_section_names.iter().map(|n| snake_case(n)).collect())
        .unwrap_or_default();

    let mut groups = SectionGroups::default();
    for name in catalog.names() {
        if allow_list.contains(&snake_case(name)) {
            groups.sidebar.push(name.to_string());
        } else {
            groups.main.push(name.to_string());
        }
    }
    groups
}

/// `"Personal Projects"` → `"personal_projects"`, `"PersonalProjects"` → `"personal_projects"`.
pub fn snake_case(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut prev_lower_or_digit = false;
    for c in title.trim().chars() {
        if c.is_whitespace() || c == '-' || c == '_' {
            if !out.is_empty() && !out.ends_with('_') {
                out.push('_');
            }
            prev_lower_or_digit = false;
        } else if c.is_uppercase() {
            if prev_lower_or_digit && !out.ends_with('_') {
                out.push('_');
            }
            out.extend(c.to_lowercase());
            prev_lower_or_digit = false;
        } else {
            out.push(c);
            prev_lower_or_digit = c.is_lowercase() || c.is_ascii_digit();
        }
    }
    while out.ends_with('_') {
        out.pop();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::cv::Section;
    use crate::models::design::Dimension;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    fn make_catalog(names: &[&str]) -> SectionCatalog {
        SectionCatalog::from_sections(
            names
                .iter()
                .map(|n| (n.to_string(), Section::default())),
        )
        .unwrap()
    }

    fn make_layout(sidebar: &[&str]) -> ColumnLayoutConfig {
        ColumnLayoutConfig {
            sidebar_width: Dimension::parse("w", "30%").unwrap(),
            sidebar_position: "left".to_string(),
            gutter: Dimension::parse("g", "0.5cm").unwrap(),
            sidebar_section_names: sidebar.iter().map(|s| s.to_string()).collect(),
            background_color: None,
        }
    }

    // ── distribute_sections ─────────────────────────────────────────────────

    #[test]
    fn test_stable_partition_follows_catalog_order() {
        let catalog = make_catalog(&["experience", "skills", "education", "hobbies"]);
        let layout = make_layout(&["hobbies", "skills"]);
        let groups = distribute_sections(&catalog, Some(&layout));
        assert_eq!(groups.sidebar, vec!["skills", "hobbies"]);
        assert_eq!(groups.main, vec!["experience", "education"]);
    }

    #[test]
    fn test_allow_list_name_missing_from_catalog_is_ignored() {
        let catalog = make_catalog(&["experience", "skills", "education", "hobbies"]);
        let with_extra = make_layout(&["skills", "hobbies", "references"]);
        let without_extra = make_layout(&["skills", "hobbies"]);
        assert_eq!(
            distribute_sections(&catalog, Some(&with_extra)),
            distribute_sections(&catalog, Some(&without_extra))
        );
    }

    #[test]
    fn test_empty_allow_list_degenerates_to_single_column() {
        let catalog = make_catalog(&["experience", "skills"]);
        let groups = distribute_sections(&catalog, Some(&make_layout(&[])));
        assert!(groups.is_single_column());
        assert_eq!(groups.main, vec!["experience", "skills"]);
    }

    #[test]
    fn test_no_layout_puts_everything_in_main() {
        let catalog = make_catalog(&["experience", "skills"]);
        let groups = distribute_sections(&catalog, None);
        assert!(groups.sidebar.is_empty());
        assert_eq!(groups.main, vec!["experience", "skills"]);
    }

    #[test]
    fn test_membership_uses_snake_case_titles() {
        let catalog = make_catalog(&["Experience", "Skills", "Personal Projects"]);
        let layout = make_layout(&["skills", "Personal Projects"]);
        let groups = distribute_sections(&catalog, Some(&layout));
        assert_eq!(groups.sidebar, vec!["Skills", "Personal Projects"]);
        assert_eq!(groups.main, vec!["Experience"]);
    }

    #[test]
    fn test_empty_catalog_yields_empty_groups() {
        let groups = distribute_sections(&SectionCatalog::default(), Some(&make_layout(&["skills"])));
        assert_eq!(groups, SectionGroups::default());
    }

    // ── snake_case ──────────────────────────────────────────────────────────

    #[test]
    fn test_snake_case_conversions() {
        assert_eq!(snake_case("skills"), "skills");
        assert_eq!(snake_case("Personal Projects"), "personal_projects");
        assert_eq!(snake_case("PersonalProjects"), "personal_projects");
        assert_eq!(snake_case("  Work  Experience "), "work_experience");
        assert_eq!(snake_case("side-projects"), "side_projects");
        assert_eq!(snake_case("Top5Skills"), "top5_skills");
    }

    // ── partition invariant ─────────────────────────────────────────────────

    proptest! {
        #[test]
        fn test_partition_is_disjoint_complete_and_stable(
            names in prop::collection::btree_set("[a-z]{1,8}", 0..12),
            picks in prop::collection::vec(any::<bool>(), 12),
            extras in prop::collection::vec("[A-Z]{1,4}", 0..3),
        ) {
            let names: Vec<String> = names.into_iter().collect();
            let catalog = SectionCatalog::from_sections(
                names.iter().map(|n| (n.clone(), Section::default())),
            ).unwrap();
            let mut allow: BTreeSet<String> = names
                .iter()
                .zip(picks.iter())
                .filter(|(_, pick)| **pick)
                .map(|(n, _)| n.clone())
                .collect();
            allow.extend(extras);
            let layout = ColumnLayoutConfig {
                sidebar_section_names: allow,
                ..make_layout(&[])
            };

            let groups = distribute_sections(&catalog, Some(&layout));

            let mut union: Vec<String> = groups.sidebar.iter().chain(groups.main.iter()).cloned().collect();
            union.sort();
            let mut expected = names.clone();
            expected.sort();
            prop_assert_eq!(union, expected);

            let sidebar: HashSet<&String> = groups.sidebar.iter().collect();
            prop_assert!(groups.main.iter().all(|n| !sidebar.contains(n)));

            let position = |n: &String| names.iter().position(|m| m == n).unwrap();
            for group in [&groups.sidebar, &groups.main] {
                let positions: Vec<usize> = group.iter().map(position).collect();
                prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
            }
        }
    }
}
