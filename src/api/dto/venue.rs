//! DTOs for city and saloon endpoints.

use serde::Serialize;

use crate::domain::entities::{City, Saloon};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CityItem {
    pub city_id: i64,
    pub city_name: String,
}

impl From<City> for CityItem {
    fn from(c: City) -> Self {
        Self {
            city_id: c.id,
            city_name: c.name,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaloonItem {
    pub saloon_id: i64,
    pub saloon_name: String,
    pub city_id: i64,
}

impl From<Saloon> for SaloonItem {
    fn from(s: Saloon) -> Self {
        Self {
            saloon_id: s.id,
            saloon_name: s.name,
            city_id: s.city_id,
        }
    }
}
