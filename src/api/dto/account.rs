//! DTOs for user registration and login.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::wall_clock;
use crate::domain::entities::{Credentials, RegisteredUser, Registration, Session};

/// "User registered successfully!"
pub const REGISTERED_MESSAGE: &str = "Đăng ký người dùng thành công!";
/// "Logged in successfully!"
pub const LOGGED_IN_MESSAGE: &str = "Đăng nhập thành công!";

/// Body of `POST /api/user/users/add`.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default, deserialize_with = "super::present")]
    pub email: Option<Value>,
    #[serde(default, deserialize_with = "super::present")]
    pub name: Option<Value>,
}

impl From<RegisterRequest> for Registration {
    fn from(r: RegisterRequest) -> Self {
        Self {
            email: r.email,
            name: r.name,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub success: bool,
    pub message: &'static str,
    pub user_id: String,
    pub user_details: UserDetails,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDetails {
    pub email: Value,
    pub name: Value,
    pub registered_at: String,
}

impl From<RegisteredUser> for RegisterResponse {
    fn from(u: RegisteredUser) -> Self {
        Self {
            success: true,
            message: REGISTERED_MESSAGE,
            user_id: u.user_id,
            user_details: UserDetails {
                email: u.email,
                name: u.name,
                registered_at: wall_clock(&u.registered_at),
            },
        }
    }
}

/// Body of `POST /api/user/auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default, deserialize_with = "super::present")]
    pub email: Option<Value>,
    #[serde(default, deserialize_with = "super::present")]
    pub password: Option<Value>,
}

impl From<LoginRequest> for Credentials {
    fn from(r: LoginRequest) -> Self {
        Self {
            email: r.email,
            password: r.password,
        }
    }
}

/// Login response.
///
/// Identity fields appear both at the top level and nested under `user`,
/// matching the two places the frontend reads them from.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub success: bool,
    pub message: &'static str,
    pub token: String,
    pub user_id: String,
    pub email: Value,
    pub full_name: String,
    pub name: String,
    pub roles: Vec<&'static str>,
    pub user: SessionUser,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub email: Value,
    pub name: String,
    pub role: String,
    pub user_id: String,
    pub login_time: String,
}

impl From<Session> for LoginResponse {
    fn from(s: Session) -> Self {
        let role = s.primary_role().as_str().to_lowercase();
        Self {
            success: true,
            message: LOGGED_IN_MESSAGE,
            token: s.token,
            user_id: s.user_id.clone(),
            email: s.email.clone(),
            full_name: s.name.clone(),
            name: s.name.clone(),
            roles: s.roles.iter().map(|r| r.as_str()).collect(),
            user: SessionUser {
                email: s.email,
                name: s.name,
                role,
                user_id: s.user_id,
                login_time: wall_clock(&s.logged_in_at),
            },
        }
    }
}
