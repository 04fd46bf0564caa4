//! HTTP API: the gateway callback plus a few JSON endpoints

mod handlers;
mod types;

pub use handlers::create_router;

use crate::controller::DialogController;
use crate::store::StoreKind;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub controller: Arc<DialogController>,
}

impl AppState {
    pub fn new(controller: Arc<DialogController>) -> Self {
        Self { controller }
    }

    pub fn store_kind(&self) -> StoreKind {
        self.controller.sessions().kind()
    }
}
