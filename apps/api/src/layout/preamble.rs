use crate::layout::markup::{call, string_literal, Fragment};
use crate::models::design::Design;

/// Page setup and color rules placed before the header.
pub fn render_preamble(design: &Design) -> Fragment {
    let page = &design.page;
    let margin = format!(
        "(top: {}, bottom: {}, left: {}, right: {})",
        page.top_margin, page.bottom_margin, page.left_margin, page.right_margin
    );
    let paper = string_literal(page.size.paper());

    let mut out = Fragment::new();
    out.push_line(&format!(
        "#set {}",
        call("page", &[("paper", paper.as_str()), ("margin", margin.as_str())], &[])
    ));
    out.push_line(&format!(
        "#set {}",
        call("text", &[("fill", design.colors.body.as_str())], &[])
    ));
    for (level, color) in [("1", &design.colors.name), ("2", &design.colors.section_titles)] {
        out.push_line(&format!(
            "#show heading.where(level: {level}): set {}",
            call("text", &[("fill", color.as_str())], &[])
        ));
    }
    out
}
