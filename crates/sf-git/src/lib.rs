//! sf-git - Version-control publisher for Snowforge
//!
//! Publishes deployed DDL text to a GitHub repository through the contents
//! API, using the `objects/<schema>/<kind>/<name>.sql` path convention.
//! Publishing runs only after a confirmed-successful deploy and is never
//! transactional with it.

pub mod error;
pub mod github;
pub mod path;

pub use error::{GitError, GitResult};
pub use github::{GitHubPublisher, PublishOutcome};
pub use path::object_sql_path;
