//! Supabase client module
//!
//! Provides `SupabaseClient` for reading tables through PostgREST
//! (`/rest/v1`) and listing identities through the GoTrue admin API
//! (`/auth/v1/admin`).

use super::Auth;
use eyre::{Context, Result};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Client, Response};
use serde_json::Value;
use url::Url;

const REST_PATH: &str = "rest/v1";
const ADMIN_USERS_PATH: &str = "auth/v1/admin/users";

/// Supabase client bound to one project endpoint and credential.
///
/// # Example
/// ```no_run
/// use supabase_extractor::client::{Auth, SupabaseClient};
///
/// # async fn example() -> eyre::Result<()> {
/// let client = SupabaseClient::try_new(
///     "https://your-project.supabase.co",
///     Auth::ServiceRole("service-role-key".to_string()),
/// )?;
///
/// let rows = client.select("projects", "*", 10).await?;
/// let users = client.list_users().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct SupabaseClient {
    client: Client,
    url: Url,
    service_role: bool,
}

impl SupabaseClient {
    /// Create a new SupabaseClient from a project URL and credential.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The URL cannot be parsed, is not http(s), or has no host
    /// - The key cannot be used as a header value
    /// - The HTTP client cannot be built
    pub fn try_new(url: &str, auth: Auth) -> Result<Self> {
        let mut url =
            Url::parse(url.trim()).with_context(|| format!("Invalid Supabase URL: {}", url))?;
        if !matches!(url.scheme(), "http" | "https") {
            eyre::bail!("Unsupported Supabase URL scheme: {}", url.scheme());
        }
        if url.host_str().is_none_or(str::is_empty) {
            eyre::bail!("Supabase URL has no host: {}", url);
        }
        // Joined paths are relative, so the base must end in a slash
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        let mut headers = HeaderMap::new();
        let mut apikey = HeaderValue::from_str(auth.key())
            .with_context(|| "Supabase key is not a valid header value")?;
        apikey.set_sensitive(true);
        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", auth.key()))
            .with_context(|| "Supabase key is not a valid header value")?;
        bearer.set_sensitive(true);
        headers.insert("apikey", apikey);
        headers.insert(AUTHORIZATION, bearer);

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .with_context(|| "Failed to build HTTP client")?;

        Ok(Self {
            client,
            url,
            service_role: auth.is_service_role(),
        })
    }

    /// Get the base URL.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Whether the client carries a service-role credential.
    pub fn is_service_role(&self) -> bool {
        self.service_role
    }

    /// URL of a table's PostgREST resource.
    pub fn table_url(&self, table: &str) -> Result<Url> {
        self.url
            .join(&format!("{}/{}", REST_PATH, table))
            .with_context(|| format!("Invalid table name: {}", table))
    }

    /// URL of the admin users listing.
    pub fn users_url(&self) -> Result<Url> {
        Ok(self.url.join(ADMIN_USERS_PATH)?)
    }

    /// Select `columns` from `table`, returning at most `limit` rows.
    ///
    /// Rows are returned exactly as PostgREST serialized them.
    pub async fn select(&self, table: &str, columns: &str, limit: usize) -> Result<Vec<Value>> {
        let url = self.table_url(table)?;
        log::debug!("GET {} (select={}, limit={})", url, columns, limit);

        let limit = limit.to_string();
        let request = self
            .client
            .get(url)
            .query(&[("select", columns), ("limit", limit.as_str())]);
        let response = request
            .send()
            .await
            .with_context(|| "Failed to send request")?;

        match Self::json_or_error(response).await? {
            Value::Array(rows) => Ok(rows),
            other => eyre::bail!(
                "Unexpected response for table '{}': expected an array, got {}",
                table,
                json_kind(&other)
            ),
        }
    }

    /// List the identities known to the project's auth service.
    ///
    /// Requires a service-role key. A response without a `users` array
    /// yields an empty list.
    pub async fn list_users(&self) -> Result<Vec<Value>> {
        let url = self.users_url()?;
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| "Failed to send request")?;

        let body = Self::json_or_error(response).await?;
        match body.get("users") {
            Some(Value::Array(users)) => Ok(users.clone()),
            Some(Value::Null) | None => Ok(Vec::new()),
            Some(other) => eyre::bail!(
                "Unexpected users listing: expected an array, got {}",
                json_kind(other)
            ),
        }
    }

    /// Parse a successful response body, or turn an error response into an
    /// error carrying the API's own message.
    async fn json_or_error(response: Response) -> Result<Value> {
        let status = response.status();
        let body = response
            .text()
            .await
            .with_context(|| "Failed to read response body")?;
        log::trace!("Response {}: {}", status, body);

        if !status.is_success() {
            eyre::bail!("{}", api_error_message(status.as_u16(), &body));
        }

        serde_json::from_str(&body).with_context(|| "Failed to parse response as JSON")
    }
}

impl std::fmt::Display for SupabaseClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.url)
    }
}

/// Extract the human-readable message from a PostgREST or GoTrue error body.
///
/// Falls back to `"<status>: <body>"` when the body carries no message.
pub fn api_error_message(status: u16, body: &str) -> String {
    let message = serde_json::from_str::<Value>(body).ok().and_then(|v| {
        ["message", "msg", "error_description", "error"]
            .iter()
            .find_map(|key| v.get(*key).and_then(Value::as_str).map(str::to_string))
    });

    match message {
        Some(message) if !message.is_empty() => message,
        _ if body.trim().is_empty() => format!("HTTP {}", status),
        _ => format!("HTTP {}: {}", status, body.trim()),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
