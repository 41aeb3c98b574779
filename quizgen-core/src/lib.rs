//! Procedural math quiz generation.
//!
//! The crate is pure: it performs no I/O and owns no global state. A single
//! call to [`generate_quiz`] normalizes a [`GenerationRequest`], dispatches
//! each question slot to a topic generator and returns a [`QuizResult`].

pub mod domain;
pub mod error;
pub mod generator;
pub mod quiz;
pub mod traits;
pub mod translation;

pub use domain::*;
pub use error::*;
pub use generator::*;
pub use quiz::*;
pub use traits::*;
pub use translation::*;
