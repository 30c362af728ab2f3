//! Config Resolver: turns request documents into typed engine inputs.
//!
//! Design options left out of a request fall back to the selected theme's
//! defaults. Dimension, color and page-size tokens are validated here; the
//! two position tokens stay raw because the composers check them on entry.

use serde::Deserialize;

use crate::layout::LayoutError;
use crate::models::cv::{CvDocument, CvIdentity, PhotoRef, SectionCatalog};
use crate::models::design::{Color, Design, Dimension, PageSize};
use crate::themes::ThemeRegistry;

// ────────────────────────────────────────────────────────────────────────────
// Design overrides
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DesignDocument {
    pub theme: Option<String>,
    #[serde(default)]
    pub page: PageOverrides,
    #[serde(default)]
    pub colors: ColorOverrides,
    #[serde(default)]
    pub header: HeaderOverrides,
    pub sidebar: Option<SidebarOverrides>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageOverrides {
    pub size: Option<String>,
    pub top_margin: Option<String>,
    pub bottom_margin: Option<String>,
    pub left_margin: Option<String>,
    pub right_margin: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColorOverrides {
    pub body: Option<String>,
    pub name: Option<String>,
    pub section_titles: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeaderOverrides {
    pub photo_space_left: Option<String>,
    pub photo_space_right: Option<String>,
    pub photo_width: Option<String>,
    pub photo_position: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SidebarOverrides {
    pub width: Option<String>,
    pub position: Option<String>,
    pub gutter: Option<String>,
    pub background_color: Option<String>,
    pub sections: Option<Vec<String>>,
}

/// Resolves `doc` against its theme (or `default_theme` when unset).
pub fn resolve_design(
    doc: &DesignDocument,
    registry: &ThemeRegistry,
    default_theme: &str,
) -> Result<Design, LayoutError> {
    let theme = doc.theme.as_deref().unwrap_or(default_theme);
    let mut design = registry.get(theme).cloned().ok_or_else(|| {
        let known: Vec<String> = registry.names().map(|n| format!("`{n}`")).collect();
        LayoutError::config("theme", theme, &format!("one of {}", known.join(", ")))
    })?;

    let page = &doc.page;
    if let Some(size) = &page.size {
        design.page.size = PageSize::parse("page.size", size)?;
    }
    override_dimension(&mut design.page.top_margin, &page.top_margin, "page.top_margin")?;
    override_dimension(&mut design.page.bottom_margin, &page.bottom_margin, "page.bottom_margin")?;
    override_dimension(&mut design.page.left_margin, &page.left_margin, "page.left_margin")?;
    override_dimension(&mut design.page.right_margin, &page.right_margin, "page.right_margin")?;

    override_color(&mut design.colors.body, &doc.colors.body, "colors.body")?;
    override_color(&mut design.colors.name, &doc.colors.name, "colors.name")?;
    override_color(
        &mut design.colors.section_titles,
        &doc.colors.section_titles,
        "colors.section_titles",
    )?;

    let header = &doc.header;
    override_dimension(
        &mut design.header.photo_space_left,
        &header.photo_space_left,
        "header.photo_space_left",
    )?;
    override_dimension(
        &mut design.header.photo_space_right,
        &header.photo_space_right,
        "header.photo_space_right",
    )?;
    override_dimension(&mut design.header.photo_width, &header.photo_width, "header.photo_width")?;
    if let Some(position) = &header.photo_position {
        design.header.photo_position = position.clone();
    }
    design.header.tag_fill_color = design.colors.section_titles.clone();

    if let Some(overrides) = &doc.sidebar {
        let Some(layout) = design.sidebar.as_mut() else {
            return Err(LayoutError::config(
                "sidebar",
                theme,
                "a theme with a sidebar column (`sidebar`)",
            ));
        };
        override_dimension(&mut layout.sidebar_width, &overrides.width, "sidebar.width")?;
        override_dimension(&mut layout.gutter, &overrides.gutter, "sidebar.gutter")?;
        if let Some(position) = &overrides.position {
            layout.sidebar_position = position.clone();
        }
        if let Some(color) = &overrides.background_color {
            layout.background_color = Some(Color::parse("sidebar.background_color", color)?);
        }
        if let Some(sections) = &overrides.sections {
            layout.sidebar_section_names = sections.iter().cloned().collect();
        }
    }

    Ok(design)
}

fn override_dimension(
    target: &mut Dimension,
    value: &Option<String>,
    field: &str,
) -> Result<(), LayoutError> {
    if let Some(value) = value {
        *target = Dimension::parse(field, value)?;
    }
    Ok(())
}

fn override_color(target: &mut Color, value: &Option<String>, field: &str) -> Result<(), LayoutError> {
    if let Some(value) = value {
        *target = Color::parse(field, value)?;
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// CV document
// ────────────────────────────────────────────────────────────────────────────

/// Splits a CV document into header identity and section catalog.
///
/// Connection lines are ordered: location, emails, phones, websites, then any
/// extra `connections`. A blank photo path counts as no photo.
pub fn resolve_cv(doc: CvDocument) -> (CvIdentity, SectionCatalog) {
    let mut connections = Vec::new();
    connections.extend(doc.location);
    for field in [doc.email, doc.phone, doc.website].into_iter().flatten() {
        connections.extend(field.into_vec());
    }
    connections.extend(doc.connections);

    let identity = CvIdentity {
        name: doc.name,
        headline: doc.headline,
        photo: doc
            .photo
            .filter(|path| !path.trim().is_empty())
            .map(PhotoRef),
        connections,
        expertise_tags: doc.expertise_tags.unwrap_or_default(),
    };
    (identity, doc.sections)
}
