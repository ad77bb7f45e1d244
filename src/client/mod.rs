//! Supabase API client and authentication.
//!
//! This module provides the [`SupabaseClient`] for the PostgREST and GoTrue
//! admin endpoints of a project, along with the [`Auth`] credential type.

mod auth;
mod supabase;

pub use auth::Auth;
pub use supabase::SupabaseClient;
