//! Admin catalog additions. The mock acknowledges them without storing anything.

use chrono::{DateTime, Local};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewMovie {
    pub name: Option<Value>,
}

/// A movie acknowledged by the admin endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct AddedMovie {
    pub id: i64,
    pub name: Value,
    pub added_at: DateTime<Local>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewDirector {
    pub name: Option<Value>,
}

/// A director acknowledged by the admin endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct AddedDirector {
    pub id: i64,
    pub name: Value,
    pub added_at: DateTime<Local>,
}
