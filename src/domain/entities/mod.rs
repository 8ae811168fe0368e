//! Core domain entities representing the mock cinema data model.
//!
//! Entities are plain data structures without business logic. Catalog
//! entities are loaded once from fixtures; submission entities model what
//! the POST endpoints accept and acknowledge.
//!
//! # Entity Types
//!
//! - [`Movie`], [`ComingSoonEntry`] - Catalog titles
//! - [`City`], [`Saloon`] - Cinema venues
//! - [`Showtime`], [`ShowtimeListing`], [`DailySlot`] - Screenings
//! - [`Comment`] - Movie comments
//! - [`Actor`], [`CastMember`], [`Director`], [`Category`] - Credits and genres
//!
//! # Submissions
//!
//! Inputs follow the "New Type" pattern with separate structs for what comes
//! in and what is acknowledged:
//! - [`TicketOrder`] → [`Booking`]
//! - [`Registration`] → [`RegisteredUser`], [`Credentials`] → [`Session`]
//! - [`NewComment`] → [`PostedComment`]
//! - [`NewMovie`] → [`AddedMovie`], [`NewDirector`] → [`AddedDirector`]

pub mod account;
pub mod admin;
pub mod booking;
pub mod comment;
pub mod movie;
pub mod people;
pub mod showtime;
pub mod venue;

pub use account::{AdminCredentials, Credentials, RegisteredUser, Registration, Role, Session};
pub use admin::{AddedDirector, AddedMovie, NewDirector, NewMovie};
pub use booking::{Booking, TicketOrder};
pub use comment::{Comment, NewComment, PostedComment};
pub use movie::{ComingSoonEntry, Movie};
pub use people::{Actor, CastMember, Category, Director};
pub use showtime::{DailySlot, Showtime, ShowtimeListing};
pub use venue::{City, Saloon};
