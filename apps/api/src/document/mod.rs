// Document structuring engine: line classification + block assembly.
// Pure and synchronous; the HTTP layer calls it, it calls nothing.

pub mod classifier;
pub mod structurer;

pub use classifier::{classify_lines, ClassifiedLine, LineRole};
pub use structurer::{structure_document, Block, StructuredDocument};
