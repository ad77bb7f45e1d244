//! Connection settings for a Supabase project
//!
//! Only two values are recognized: the project endpoint and an access key.
//! Both come from environment variables, optionally sourced from a dotenv file
//! before [`SupabaseConfig::from_env`] runs.

use crate::client::Auth;
use eyre::Result;

/// Variables checked for the project endpoint, in order
pub const URL_VARS: &[&str] = &["SUPABASE_URL", "VITE_SUPABASE_URL"];

/// Variable holding a service-role key (required for the admin users API)
pub const SERVICE_ROLE_KEY_VAR: &str = "SUPABASE_SERVICE_ROLE_KEY";

/// Variables checked for an anon key when no service-role key is set, in order
pub const ANON_KEY_VARS: &[&str] = &[
    "SUPABASE_KEY",
    "SUPABASE_ANON_KEY",
    "VITE_SUPABASE_ANON_KEY",
];

/// Endpoint and credential for one extraction run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SupabaseConfig {
    pub url: String,
    pub auth: Auth,
}

impl SupabaseConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let url = URL_VARS.iter().find_map(|k| get(*k)).ok_or_else(|| {
            eyre::eyre!(
                "Supabase endpoint not configured, set one of: {}",
                URL_VARS.join(", ")
            )
        })?;

        let auth = if let Some(key) = get(SERVICE_ROLE_KEY_VAR) {
            Auth::ServiceRole(key)
        } else if let Some(key) = ANON_KEY_VARS.iter().find_map(|k| get(*k)) {
            Auth::Anon(key)
        } else {
            eyre::bail!(
                "Supabase access key not configured, set {} or one of: {}",
                SERVICE_ROLE_KEY_VAR,
                ANON_KEY_VARS.join(", ")
            );
        };

        Ok(Self { url, auth })
    }
}
