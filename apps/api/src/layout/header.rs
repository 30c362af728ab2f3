//! Header Composer: nests photo, name, headline, tags and connections.
//!
//! # Layout matrix
//!
//! | photo | position | tags | structure |
//! |-------|----------|------|-----------|
//! | no    | –        | no   | identity block, no grid |
//! | no    | –        | yes  | grid `(1fr, auto)`: name + headline, tag stack; connections below |
//! | yes   | left     | *    | grid `(auto, 1fr)`: photo, identity region |
//! | yes   | right    | *    | grid `(1fr, auto)`: identity region, photo |
//!
//! The identity region inside a photo grid is itself one of the first two
//! rows, so with photo and tags the nesting is
//! `outer(photo, inner(name + headline, tags) + connections)`.
//!
//! The variant is chosen once by [`HeaderLayout::select`]; each variant builds
//! its fragment from [`Grid`] and the other markup builders, which close every
//! container they open.

use tracing::debug;

use crate::layout::error::{LayoutError, Side};
use crate::layout::markup::{
    call, call_with_body, content, escape_text, string_literal, Fragment, Grid,
};
use crate::models::cv::{CvIdentity, PhotoRef};
use crate::models::design::HeaderDesignConfig;

const PHOTO_POSITION_FIELD: &str = "header.photo_position";
const HEADLINE_SIZE: &str = "1.2em";
const CONNECTION_SPACING: &str = "1em";
const TAG_SPACING: &str = "0.3em";
const TAG_GRID_GUTTER: &str = "1em";

// ────────────────────────────────────────────────────────────────────────────
// Layout variants
// ────────────────────────────────────────────────────────────────────────────

/// The closed set of header structures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderLayout<'a> {
    /// Name, headline and connections stacked; no grid.
    Plain,
    /// Name and headline beside a vertical tag stack; connections below the grid.
    Tagged,
    /// Photo cell first, identity region second.
    PhotoLeft { photo: &'a PhotoRef, tagged: bool },
    /// Identity region first, photo cell last.
    PhotoRight { photo: &'a PhotoRef, tagged: bool },
}

impl<'a> HeaderLayout<'a> {
    pub fn select(identity: &'a CvIdentity, photo_side: Side) -> Self {
        let tagged = identity.has_tags();
        match (&identity.photo, photo_side) {
            (None, _) if tagged => HeaderLayout::Tagged,
            (None, _) => HeaderLayout::Plain,
            (Some(photo), Side::Left) => HeaderLayout::PhotoLeft { photo, tagged },
            (Some(photo), Side::Right) => HeaderLayout::PhotoRight { photo, tagged },
        }
    }

    fn compose(self, identity: &CvIdentity, design: &HeaderDesignConfig) -> Fragment {
        match self {
            HeaderLayout::Plain => plain_identity(identity),
            HeaderLayout::Tagged => tagged_identity(identity, design),
            HeaderLayout::PhotoLeft { photo, tagged } => Grid::new(&["auto", "1fr"])
                .option("align", "horizon")
                .cell(photo_cell(photo, design))
                .cell(identity_region(identity, design, tagged))
                .build(),
            HeaderLayout::PhotoRight { photo, tagged } => Grid::new(&["1fr", "auto"])
                .option("align", "horizon")
                .cell(identity_region(identity, design, tagged))
                .cell(photo_cell(photo, design))
                .build(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Public entry point
// ────────────────────────────────────────────────────────────────────────────

/// Composes the header fragment.
///
/// `photo_position` is checked before anything is emitted, even when the CV
/// has no photo. Empty identities produce an empty fragment.
pub fn compose_header(
    identity: &CvIdentity,
    design: &HeaderDesignConfig,
) -> Result<Fragment, LayoutError> {
    let photo_side = Side::parse(PHOTO_POSITION_FIELD, &design.photo_position)?;
    let layout = HeaderLayout::select(identity, photo_side);
    debug!(?layout, "composing header");
    Ok(layout.compose(identity, design))
}

// ────────────────────────────────────────────────────────────────────────────
// Building blocks
// ────────────────────────────────────────────────────────────────────────────

fn identity_region(identity: &CvIdentity, design: &HeaderDesignConfig, tagged: bool) -> Fragment {
    if tagged {
        tagged_identity(identity, design)
    } else {
        plain_identity(identity)
    }
}

fn plain_identity(identity: &CvIdentity) -> Fragment {
    let mut out = name_and_headline(identity);
    if let Some(line) = connections_line(&identity.connections) {
        out.push_line(&line);
    }
    out
}

fn tagged_identity(identity: &CvIdentity, design: &HeaderDesignConfig) -> Fragment {
    let mut out = Grid::new(&["1fr", "auto"])
        .option("column-gutter", TAG_GRID_GUTTER)
        .option("align", "horizon")
        .cell(name_and_headline(identity))
        .cell(tag_stack(&identity.expertise_tags, design))
        .build();
    if let Some(line) = connections_line(&identity.connections) {
        out.push_line(&line);
    }
    out
}

fn name_and_headline(identity: &CvIdentity) -> Fragment {
    let mut out = Fragment::new();
    if let Some(name) = &identity.name {
        out.push_line(&format!("= {}", escape_text(name)));
    }
    if let Some(headline) = &identity.headline {
        out.push_line(&format!(
            "#{}",
            call_with_body("text", &[("size", HEADLINE_SIZE)], &escape_text(headline))
        ));
    }
    out
}

fn connections_line(connections: &[String]) -> Option<String> {
    if connections.is_empty() {
        return None;
    }
    let items: Vec<String> = connections.iter().map(|c| content(c)).collect();
    Some(format!(
        "#{}",
        call(
            "stack",
            &[("dir", "ltr"), ("spacing", CONNECTION_SPACING)],
            &items
        )
    ))
}

fn tag_stack(tags: &[String], design: &HeaderDesignConfig) -> Fragment {
    let fill = design.tag_fill_color.as_str();
    let boxes: Vec<String> = tags
        .iter()
        .map(|tag| {
            let label = call_with_body("text", &[("fill", "white")], &escape_text(tag));
            call_with_body(
                "box",
                &[
                    ("fill", fill),
                    ("inset", "(x: 0.5em, y: 0.25em)"),
                    ("radius", "0.2em"),
                ],
                &format!("#{label}"),
            )
        })
        .collect();
    let mut out = Fragment::new();
    out.push_line(&format!(
        "#{}",
        call("stack", &[("dir", "ttb"), ("spacing", TAG_SPACING)], &boxes)
    ));
    out
}

fn photo_cell(photo: &PhotoRef, design: &HeaderDesignConfig) -> Fragment {
    let image = format!(
        "image({}, width: {})",
        string_literal(&photo.0),
        design.photo_width
    );
    let mut out = Fragment::new();
    out.push_line(&format!(
        "#{}",
        call(
            "pad",
            &[
                ("left", design.photo_space_left.as_str()),
                ("right", design.photo_space_right.as_str()),
            ],
            &[image]
        )
    ));
    out
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
