//! Column Assembler: wraps the distributed sections in the outer layout.

use tracing::debug;

use crate::layout::distributor::SectionGroups;
use crate::layout::error::{LayoutError, Side};
use crate::layout::markup::{call_with_body, Fragment, Grid};
use crate::models::design::ColumnLayoutConfig;
use crate::sections::SectionRenderer;

const SIDEBAR_POSITION_FIELD: &str = "sidebar.position";
const SIDEBAR_INSET: &str = "0.3cm";

/// Emits the section area of the document body.
///
/// With an empty sidebar group the main sections are concatenated with no
/// wrapper. Otherwise a two-column grid holds the sidebar next to the main
/// column. `sidebar_position` is checked whenever a layout is given, before
/// any section renders. The first renderer error aborts the assembly.
pub fn assemble_columns(
    groups: &SectionGroups,
    layout: Option<&ColumnLayoutConfig>,
    renderer: &dyn SectionRenderer,
) -> Result<Fragment, LayoutError> {
    let Some(layout) = layout else {
        return render_all(&groups.main, renderer);
    };
    let side = Side::parse(SIDEBAR_POSITION_FIELD, &layout.sidebar_position)?;
    if groups.is_single_column() {
        return render_all(&groups.main, renderer);
    }

    debug!(
        ?side,
        sidebar = groups.sidebar.len(),
        main = groups.main.len(),
        "assembling two-column body"
    );

    let sidebar = sidebar_cell(render_all(&groups.sidebar, renderer)?, layout);
    let main = render_all(&groups.main, renderer)?;
    let width = layout.sidebar_width.as_str();

    let grid = match side {
        Side::Left => Grid::new(&[width, "1fr"])
            .option("gutter", layout.gutter.as_str())
            .cell(sidebar)
            .cell(main),
        Side::Right => Grid::new(&["1fr", width])
            .option("gutter", layout.gutter.as_str())
            .cell(main)
            .cell(sidebar),
    };
    Ok(grid.build())
}

fn render_all(names: &[String], renderer: &dyn SectionRenderer) -> Result<Fragment, LayoutError> {
    let fragments = names
        .iter()
        .map(|name| renderer.render(name))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Fragment::concat(&fragments))
}

fn sidebar_cell(sections: Fragment, layout: &ColumnLayoutConfig) -> Fragment {
    match &layout.background_color {
        None => sections,
        Some(color) => {
            let block = call_with_body(
                "block",
                &[
                    ("fill", color.as_str()),
                    ("width", "100%"),
                    ("inset", SIDEBAR_INSET),
                ],
                &format!("\n{sections}"),
            );
            let mut out = Fragment::new();
            out.push_line(&format!("#{block}"));
            out
        }
    }
}
