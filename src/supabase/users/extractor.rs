//! Users extractor
//!
//! Lists identities via GET /auth/v1/admin/users (service-role key required)

use super::UserRecordMapper;
use crate::client::SupabaseClient;
use crate::etl::{Extractor, Transformer};
use eyre::{Context, Result};
use serde_json::Value;

/// Extractor for the project's user roster
///
/// Each identity is mapped through [`UserRecordMapper`], keeping the order
/// the auth service returned them in.
pub struct UsersExtractor {
    client: SupabaseClient,
    mapper: UserRecordMapper,
}

impl UsersExtractor {
    pub fn new(client: SupabaseClient) -> Self {
        Self {
            client,
            mapper: UserRecordMapper::new(),
        }
    }
}

impl Extractor for UsersExtractor {
    type Item = Value;

    async fn extract(&self) -> Result<Vec<Self::Item>> {
        let users = self.client.list_users().await?;
        log::debug!("Fetched {} identities", users.len());

        self.mapper
            .transform_many(users)?
            .into_iter()
            .map(|record| serde_json::to_value(record).with_context(|| "Failed to encode user"))
            .collect()
    }
}
