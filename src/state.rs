//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{
    AccountService, AdminService, BookingService, CatalogService, CommentService,
};
use crate::domain::clock::Clock;
use crate::domain::entities::AdminCredentials;
use crate::domain::repositories::CatalogRepository;

/// Handler state. Cheap to clone; every service is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub catalog_service: Arc<CatalogService>,
    pub booking_service: Arc<BookingService>,
    pub account_service: Arc<AccountService>,
    pub comment_service: Arc<CommentService>,
    pub admin_service: Arc<AdminService>,
}

impl AppState {
    /// Wires every service to the same catalog and clock.
    pub fn new(
        catalog: Arc<dyn CatalogRepository>,
        clock: Arc<dyn Clock>,
        admin: AdminCredentials,
    ) -> Self {
        Self {
            catalog_service: Arc::new(CatalogService::new(catalog.clone())),
            booking_service: Arc::new(BookingService::new(clock.clone())),
            account_service: Arc::new(AccountService::new(clock.clone(), admin)),
            comment_service: Arc::new(CommentService::new(clock.clone())),
            admin_service: Arc::new(AdminService::new(catalog, clock)),
        }
    }
}
