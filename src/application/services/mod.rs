//! Mock behaviour services for the application layer.

pub mod account_service;
pub mod admin_service;
pub mod booking_service;
pub mod catalog_service;
pub mod comment_service;

pub use account_service::AccountService;
pub use admin_service::AdminService;
pub use booking_service::BookingService;
pub use catalog_service::CatalogService;
pub use comment_service::CommentService;
