//! Account service: mock registration and login.

use crate::domain::clock::Clock;
use crate::domain::entities::{
    AdminCredentials, Credentials, RegisteredUser, Registration, Role, Session,
};
use serde_json::json;
use std::sync::Arc;

const ADMIN_NAME: &str = "Administrator";
const ADMIN_USER_ID: &str = "ADMIN_001";
const FALLBACK_USER_NAME: &str = "Demo User";

/// Handles sign-up and sign-in without storing anything.
///
/// Any credentials log in successfully. Only the configured
/// [`AdminCredentials`] receive the [`Role::Admin`] role.
pub struct AccountService {
    clock: Arc<dyn Clock>,
    admin: AdminCredentials,
}

impl AccountService {
    pub fn new(clock: Arc<dyn Clock>, admin: AdminCredentials) -> Self {
        Self { clock, admin }
    }

    /// Accepts a registration and assigns a `USER<seconds>` identifier.
    pub fn register(&self, registration: Registration) -> RegisteredUser {
        let now = self.clock.now();

        RegisteredUser {
            user_id: format!("USER{}", now.timestamp()),
            email: registration.email.unwrap_or_else(|| json!("")),
            name: registration.name.unwrap_or_else(|| json!("")),
            registered_at: now,
        }
    }

    /// Opens a mock session.
    ///
    /// # Identity rules
    ///
    /// - Admin credentials: name `Administrator`, ID `ADMIN_001`, role ADMIN.
    ///   Both values must be JSON strings to match.
    /// - Anyone else: name is the text before the first `@` of a string
    ///   e-mail, or `Demo User` when the e-mail is not a string or has no `@`.
    ///   ID `USER_<seconds>`, role User
    ///
    /// The e-mail is echoed back as sent; an absent one becomes `""`.
    pub fn login(&self, credentials: Credentials) -> Session {
        let now = self.clock.now();
        let secs = now.timestamp();
        let email = credentials.email.unwrap_or_else(|| json!(""));
        let password = credentials.password.unwrap_or_else(|| json!(""));

        let is_admin = match (email.as_str(), password.as_str()) {
            (Some(email), Some(password)) => self.admin.matches(email, password),
            _ => false,
        };

        let (user_id, name, role) = if is_admin {
            tracing::info!("Administrator logged in");
            (ADMIN_USER_ID.to_string(), ADMIN_NAME.to_string(), Role::Admin)
        } else {
            let name = match email.as_str().and_then(|e| e.split_once('@')) {
                Some((local, _)) => local.to_string(),
                None => FALLBACK_USER_NAME.to_string(),
            };
            (format!("USER_{}", secs), name, Role::User)
        };

        Session {
            token: format!("mock_jwt_token_{}", secs),
            user_id,
            email,
            name,
            roles: vec![role],
            logged_in_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clock::FixedClock;
    use serde_json::Value;

    fn service() -> AccountService {
        AccountService::new(
            Arc::new(FixedClock::at_unix(1_730_284_800)),
            AdminCredentials::new("admin@cinevision.com", "admin123"),
        )
    }

    fn credentials(email: &str, password: &str) -> Credentials {
        Credentials {
            email: Some(json!(email)),
            password: Some(json!(password)),
        }
    }

    #[test]
    fn test_register_assigns_user_id() {
        let user = service().register(Registration {
            email: Some(json!("an@example.com")),
            name: Some(json!("An")),
        });

        assert_eq!(user.user_id, "USER1730284800");
        assert_eq!(user.email, json!("an@example.com"));
        assert_eq!(user.name, json!("An"));
    }

    #[test]
    fn test_register_defaults_to_empty_strings() {
        let user = service().register(Registration::default());

        assert_eq!(user.email, json!(""));
        assert_eq!(user.name, json!(""));
    }

    #[test]
    fn test_login_admin() {
        let session = service().login(credentials("admin@cinevision.com", "admin123"));

        assert_eq!(session.user_id, "ADMIN_001");
        assert_eq!(session.name, "Administrator");
        assert_eq!(session.roles, vec![Role::Admin]);
        assert_eq!(session.primary_role(), Role::Admin);
        assert_eq!(session.token, "mock_jwt_token_1730284800");
    }

    #[test]
    fn test_login_admin_email_with_wrong_password_is_user() {
        let session = service().login(credentials("admin@cinevision.com", "nope"));

        assert_eq!(session.roles, vec![Role::User]);
        assert_eq!(session.name, "admin");
        assert_eq!(session.user_id, "USER_1730284800");
    }

    #[test]
    fn test_login_user_name_from_email() {
        let session = service().login(credentials("minh.chau@example.vn", "secret"));

        assert_eq!(session.name, "minh.chau");
        assert_eq!(session.email, json!("minh.chau@example.vn"));
        assert_eq!(session.primary_role(), Role::User);
    }

    #[test]
    fn test_login_without_at_sign_uses_demo_user() {
        let session = service().login(Credentials::default());

        assert_eq!(session.name, "Demo User");
        assert_eq!(session.email, json!(""));
    }

    #[test]
    fn test_login_non_string_email_uses_demo_user() {
        let session = service().login(Credentials {
            email: Some(json!(42)),
            password: Some(json!("admin123")),
        });

        assert_eq!(session.name, "Demo User");
        assert_eq!(session.email, json!(42));
        assert_eq!(session.primary_role(), Role::User);
    }

    #[test]
    fn test_login_null_email_is_echoed() {
        let session = service().login(Credentials {
            email: Some(Value::Null),
            password: None,
        });

        assert_eq!(session.name, "Demo User");
        assert_eq!(session.email, Value::Null);
    }

    #[test]
    fn test_login_admin_requires_string_password() {
        let session = service().login(Credentials {
            email: Some(json!("admin@cinevision.com")),
            password: Some(json!(["admin123"])),
        });

        assert_eq!(session.roles, vec![Role::User]);
        assert_eq!(session.name, "admin");
    }
}
