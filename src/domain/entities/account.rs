//! Account entities: registrations, login credentials and sessions.

use chrono::{DateTime, Local};
use serde_json::Value;

/// Sign-up form contents, as raw JSON values. `None` means the key was absent.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Registration {
    pub email: Option<Value>,
    pub name: Option<Value>,
}

/// A user accepted by the mock registration endpoint. Nothing is stored.
#[derive(Debug, Clone, PartialEq)]
pub struct RegisteredUser {
    pub user_id: String,
    pub email: Value,
    pub name: Value,
    pub registered_at: DateTime<Local>,
}

/// Login form contents, as raw JSON values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Credentials {
    pub email: Option<Value>,
    pub password: Option<Value>,
}

/// The one account that logs in with administrator rights.
#[derive(Clone, PartialEq)]
pub struct AdminCredentials {
    pub email: String,
    pub password: String,
}

impl AdminCredentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Returns `true` if `email` and `password` both match exactly.
    pub fn matches(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password == password
    }
}

impl std::fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

/// Role granted to a logged-in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    User,
}

impl Role {
    /// Name as listed in the `roles` array of a login response.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::User => "User",
        }
    }
}

/// A mock login session.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub user_id: String,
    /// Echo of the submitted e-mail, whatever its JSON type.
    pub email: Value,
    pub name: String,
    pub roles: Vec<Role>,
    pub logged_in_at: DateTime<Local>,
}

impl Session {
    /// The role the frontend treats as the user's primary one.
    pub fn primary_role(&self) -> Role {
        self.roles.first().copied().unwrap_or(Role::User)
    }
}
