//! Target-independent core of the GeniQ front end.
//!
//! Everything with a contract lives here so it can be exercised natively:
//! the request/response models exchanged with the generation backend, the
//! response normalizer behind the [`api::Transport`] seam, the submission
//! lifecycle of the panels and the data behind the static dashboards.

pub mod analytics;
pub mod animation;
pub mod api;
pub mod jobs;
pub mod model;
pub mod preview;
pub mod requests;
pub mod security;
