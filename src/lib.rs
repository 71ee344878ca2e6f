//! msnorm - normalize milestone titles to canonical `M<n>` form
//!
//! Fetches a repository's milestones from GitHub or GitLab, plans renames so
//! every title becomes `M<n>` (moving any free text into the description),
//! previews the plan, and applies it only when asked.

pub mod auth;
pub mod config;
pub mod error;
pub mod normalize;
pub mod platform;
pub mod repo;
pub mod shutdown;
pub mod snapshot;
pub mod types;
