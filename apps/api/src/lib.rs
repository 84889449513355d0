//! Resume / job-description compatibility scoring.
//!
//! The engine (`scoring`) is a deterministic lexical matcher that turns a structured
//! resume plus a job description and title into a 0–100 score with a per-dimension
//! breakdown and improvement suggestions. The remaining modules are the thin HTTP
//! service that exposes it.

pub mod config;
pub mod errors;
pub mod models;
pub mod routes;
pub mod scoring;
pub mod state;

pub use models::resume::{EducationItem, ExperienceItem, ResumeContent};
pub use scoring::{calculate_ats_score, AtsScore};
