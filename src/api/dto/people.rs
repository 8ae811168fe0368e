//! DTOs for cast, actor, category and director endpoints.

use serde::Serialize;

use crate::domain::entities::{Actor, CastMember, Category, Director};

/// Wrapper used by the admin listing endpoints: `{"success": true, "data": [...]}`.
#[derive(Debug, Serialize)]
pub struct DataEnvelope<T> {
    pub success: bool,
    pub data: Vec<T>,
}

impl<T> DataEnvelope<T> {
    pub fn ok(data: Vec<T>) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CastItem {
    pub id: i64,
    pub name: String,
    pub character: String,
}

impl From<CastMember> for CastItem {
    fn from(c: CastMember) -> Self {
        Self {
            id: c.actor.id,
            name: c.actor.name,
            character: c.character,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActorItem {
    pub id: i64,
    pub name: String,
    pub actor_name: String,
}

impl From<Actor> for ActorItem {
    fn from(a: Actor) -> Self {
        Self {
            id: a.id,
            actor_name: a.name.clone(),
            name: a.name,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryItem {
    pub id: i64,
    pub name: String,
    pub category_name: String,
}

impl From<Category> for CategoryItem {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            category_name: c.name.clone(),
            name: c.name,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectorItem {
    pub id: i64,
    pub name: String,
    pub director_name: String,
}

impl From<Director> for DirectorItem {
    fn from(d: Director) -> Self {
        Self {
            id: d.id,
            director_name: d.name.clone(),
            name: d.name,
        }
    }
}
