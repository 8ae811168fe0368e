//! Cities and the saloons (cinema venues) located in them.

/// A city with at least one cinema.
#[derive(Debug, Clone, PartialEq)]
pub struct City {
    pub id: i64,
    pub name: String,
}

/// A cinema venue. The frontend calls these "saloons".
#[derive(Debug, Clone, PartialEq)]
pub struct Saloon {
    pub id: i64,
    pub name: String,
    pub city_id: i64,
}
