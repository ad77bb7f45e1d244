//! Supabase sources
//!
//! One submodule per kind of source a run reads: PostgREST tables and the
//! auth user roster.

pub mod tables;
pub mod users;

pub use tables::{ROW_LIMIT, TABLES, TableExtractor};
pub use users::{USERS_SOURCE, UserRecord, UserRecordMapper, UsersExtractor};
