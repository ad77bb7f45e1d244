//! Auth user roster
//!
//! Lists identities through the admin API and reduces each to a
//! [`UserRecord`].

mod extractor;
mod record;

pub use extractor::UsersExtractor;
pub use record::{UserRecord, UserRecordMapper};

/// Report key for the user roster
pub const USERS_SOURCE: &str = "users";
