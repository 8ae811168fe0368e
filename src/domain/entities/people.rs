//! Credits and classification entities: actors, directors, categories.

/// An actor known to the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    pub id: i64,
    pub name: String,
}

/// An actor credited in a movie, with the character they play.
#[derive(Debug, Clone, PartialEq)]
pub struct CastMember {
    pub actor: Actor,
    pub character: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Director {
    pub id: i64,
    pub name: String,
}

/// A movie genre.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i64,
    pub name: String,
}
