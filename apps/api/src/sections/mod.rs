//! Section rendering: the collaborator the column assembler calls once per
//! section name.
//!
//! The assembler only depends on [`SectionRenderer`]. [`CatalogRenderer`] is
//! the built-in Typst implementation backed by the request's section catalog.

pub mod entries;

pub use entries::CatalogRenderer;

use crate::layout::{Fragment, LayoutError};

/// Renders one named section to a markup fragment.
///
/// Implementations must be idempotent: the same name always yields the same
/// fragment. Any spacing between consecutive sections is the renderer's job.
pub trait SectionRenderer {
    fn render(&self, section_name: &str) -> Result<Fragment, LayoutError>;
}

impl<F> SectionRenderer for F
where
    F: Fn(&str) -> Result<Fragment, LayoutError>,
{
    fn render(&self, section_name: &str) -> Result<Fragment, LayoutError> {
        self(section_name)
    }
}
