//! Request and response shapes exchanged with the generation backend.

pub mod feedback;
pub mod generation;
pub mod qa;
pub mod tabular;

use thiserror::Error;

/// Client-side validation failures, raised before any network call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// A column at the given zero-based position has an empty name.
    #[error("Please fill in all column names before generating data.")]
    UnnamedColumn { position: usize },
    #[error("Rating must be between 1 and 5, got {0}.")]
    RatingOutOfRange(u8),
    /// Lists the required field labels that were left empty.
    #[error("Please fill in all required fields: {}.", .0.join(", "))]
    MissingFields(Vec<&'static str>),
}
