/// Credential sent with every request as both `apikey` and bearer token
#[derive(Clone, PartialEq, Eq)]
pub enum Auth {
    /// Service-role key, bypasses row level security and unlocks admin APIs
    ServiceRole(String),
    /// Public anon key, subject to row level security
    Anon(String),
}

impl Auth {
    pub fn key(&self) -> &str {
        match self {
            Self::ServiceRole(key) | Self::Anon(key) => key,
        }
    }

    pub fn is_service_role(&self) -> bool {
        matches!(self, Self::ServiceRole(_))
    }
}

impl std::fmt::Display for Auth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ServiceRole(_) => write!(f, "ServiceRole"),
            Self::Anon(_) => write!(f, "Anon"),
        }
    }
}

// Keys never end up in logs or panic messages
impl std::fmt::Debug for Auth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Auth::{}(***)", self)
    }
}
