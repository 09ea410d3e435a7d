//! Data model shared by extraction, transformation and emission.
//!
//! Pages flow in as [`RawPage`]s, are concatenated into one text, and the
//! structural stage classifies each line into a [`StructuralLevel`].

mod marker;
mod metadata;
mod page;

pub use marker::{MarkerStyle, StructuralLevel};
pub use metadata::SourceMetadata;
pub use page::{ExtractedText, RawPage};
