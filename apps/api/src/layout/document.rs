//! Markup Assembler: header followed by the section columns.

use serde::Serialize;
use tracing::debug;

use crate::layout::columns::assemble_columns;
use crate::layout::distributor::{distribute_sections, SectionGroups};
use crate::layout::error::LayoutError;
use crate::layout::header::compose_header;
use crate::layout::markup::{is_balanced, Fragment};
use crate::layout::preamble::render_preamble;
use crate::models::cv::{CvIdentity, SectionCatalog};
use crate::models::design::Design;
use crate::sections::SectionRenderer;

/// Output of one render: the markup plus the column grouping it used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedDocument {
    pub markup: Fragment,
    pub groups: SectionGroups,
}

/// Concatenates header and columns with no wrapping of its own.
pub fn compose_body(header: &Fragment, columns: &Fragment) -> Fragment {
    Fragment::concat([header, columns])
}

/// Runs the whole engine: header, distribution, columns, body.
pub fn render_body(
    identity: &CvIdentity,
    design: &Design,
    catalog: &SectionCatalog,
    renderer: &dyn SectionRenderer,
) -> Result<RenderedDocument, LayoutError> {
    let header = compose_header(identity, &design.header)?;
    debug_assert!(is_balanced(header.as_str()), "unbalanced header markup");
    let groups = distribute_sections(catalog, design.sidebar.as_ref());
    let columns = assemble_columns(&groups, design.sidebar.as_ref(), renderer)?;
    let markup = compose_body(&header, &columns);
    debug!(
        theme = %design.theme,
        sidebar = groups.sidebar.len(),
        main = groups.main.len(),
        "document body assembled"
    );
    Ok(RenderedDocument { markup, groups })
}

/// Like [`render_body`], optionally prefixed by the page preamble.
pub fn render_document(
    identity: &CvIdentity,
    design: &Design,
    catalog: &SectionCatalog,
    renderer: &dyn SectionRenderer,
    include_preamble: bool,
) -> Result<RenderedDocument, LayoutError> {
    let body = render_body(identity, design, catalog, renderer)?;
    if !include_preamble {
        return Ok(body);
    }
    let mut markup = render_preamble(design);
    markup.push_line("");
    markup.push(&body.markup);
    Ok(RenderedDocument {
        markup,
        groups: body.groups,
    })
}
