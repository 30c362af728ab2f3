use crate::layout::markup::{content, escape_text};
use crate::layout::{Fragment, LayoutError};
use crate::models::cv::{Entry, Section, SectionCatalog};
use crate::sections::SectionRenderer;

/// Renders catalog sections as a level-2 heading followed by their entries.
#[derive(Debug, Clone, Copy)]
pub struct CatalogRenderer<'a> {
    catalog: &'a SectionCatalog,
}

impl<'a> CatalogRenderer<'a> {
    pub fn new(catalog: &'a SectionCatalog) -> Self {
        Self { catalog }
    }
}

impl SectionRenderer for CatalogRenderer<'_> {
    fn render(&self, section_name: &str) -> Result<Fragment, LayoutError> {
        let section = self
            .catalog
            .get(section_name)
            .ok_or_else(|| LayoutError::UnknownSection(section_name.to_string()))?;
        Ok(render_section(section_name, section))
    }
}

fn render_section(title: &str, section: &Section) -> Fragment {
    let mut markup = format!("== {}\n\n", escape_text(title));
    let entries: Vec<String> = section.entries.iter().map(render_entry).collect();
    if !entries.is_empty() {
        markup.push_str(&entries.join("\n\n"));
        markup.push_str("\n\n");
    }
    Fragment::raw(markup)
}

fn render_entry(entry: &Entry) -> String {
    match entry {
        Entry::Text(text) => escape_text(text),
        Entry::OneLine { label, details } => {
            format!("*{}:* {}", escape_text(label), escape_text(details))
        }
        Entry::Normal {
            name,
            date,
            location,
            summary,
            highlights,
        } => {
            let mut out = format!("*{}*", escape_text(name));
            if let Some(date) = date {
                out.push_str(&format!(" #h(1fr) {}", escape_text(date)));
            }
            if let Some(location) = location {
                out.push_str(&format!(" \\\n#emph{}", content(location)));
            }
            if let Some(summary) = summary {
                out.push_str("\n\n");
                out.push_str(&escape_text(summary));
            }
            if !highlights.is_empty() {
                let items: Vec<String> = highlights
                    .iter()
                    .map(|h| format!("- {}", escape_text(h)))
                    .collect();
                out.push_str("\n\n");
                out.push_str(&items.join("\n"));
            }
            out
        }
    }
}
