// Layout Composition Engine
// Header composition, section distribution, column assembly, body assembly.
// Pure and synchronous: no I/O, no state between renders.

pub mod columns;
pub mod distributor;
pub mod document;
pub mod error;
pub mod header;
pub mod markup;
pub mod preamble;

// Re-export the public API consumed by the resolver, sections and handlers.
pub use distributor::SectionGroups;
pub use document::{render_document, RenderedDocument};
pub use error::LayoutError;
pub use markup::Fragment;
