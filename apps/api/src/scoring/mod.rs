// ATS compatibility scoring engine.
// Pipeline: normalize → keyword/taxonomy extraction → six dimension scorers → aggregate.
// Everything except `handlers` is pure and synchronous.

pub mod ats;
pub mod education;
pub mod format;
pub mod handlers;
pub mod keywords;
pub mod normalize;
pub mod skills;
pub mod taxonomy;
pub mod title;

pub use ats::{calculate_ats_score, calculate_ats_score_with, AtsScore, AtsScorer, LexicalAtsScorer};
