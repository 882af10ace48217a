use std::fmt;

/// Role string attached to a session by the backend
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    User,
    Other(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
            Role::Other(s) => s,
        }
    }
}

impl From<&str> for Role {
    fn from(s: &str) -> Self {
        match s {
            "admin" => Role::Admin,
            "user" => Role::User,
            other => Role::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Client session. Every call that needs auth takes one explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated { token: String, role: Role },
}

impl Session {
    pub fn authenticated(token: impl Into<String>, role: &str) -> Self {
        Session::Authenticated {
            token: token.into(),
            role: Role::from(role),
        }
    }

    /// Rebuild a session from the persisted key/value pair.
    /// A missing or blank token means no session; a missing role reads as empty.
    pub fn from_parts(token: Option<String>, role: Option<String>) -> Self {
        match token {
            Some(token) if !token.trim().is_empty() => {
                Session::authenticated(token, role.as_deref().unwrap_or_default())
            }
            _ => Session::Anonymous,
        }
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            Session::Anonymous => None,
            Session::Authenticated { token, .. } => Some(token),
        }
    }

    pub fn role(&self) -> Option<&Role> {
        match self {
            Session::Anonymous => None,
            Session::Authenticated { role, .. } => Some(role),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated { .. })
    }

    /// Value for the `Authorization` header
    pub fn bearer(&self) -> Option<String> {
        self.token().map(|t| format!("Bearer {}", t))
    }
}
