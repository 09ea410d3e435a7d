//! Text transformation: noise removal followed by structural promotion.
//!
//! Both stages are pure functions of their input text. The noise filter
//! only removes whole lines; the promoter only rewrites lines it recognizes
//! as structural markers.

mod noise;
mod promote;
mod rules;

pub use noise::{FilterReport, NoiseFilter, NoiseMatcher, NoiseRule, DEFAULT_STAMP};
pub use promote::{Promotion, StructuralPromoter};
pub use rules::{ClassifiedLine, RuleTable, StructuralRule};
