//! Domain types for build runs.

mod dependency;
mod step;
mod summary;
mod toolkit;

pub use dependency::{Dependency, DependencyStatus, REQUIRED_PACKAGES, parse_listed_version};
pub use step::BuildStep;
pub use summary::{BuildSummary, JobSource};
pub use toolkit::ToolkitFlags;
