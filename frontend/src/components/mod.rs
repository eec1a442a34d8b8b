pub mod analytics;
pub mod contact;
pub mod dashboard;
pub mod feedback;
pub mod helpers;
pub mod navigation;
pub mod preview;
pub mod qa;
pub mod security;
pub mod tabular;
