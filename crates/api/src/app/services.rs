//! Service wiring: one store instance shared by the write and read paths.

use std::sync::Arc;

use swapcart_store::InMemoryVerificationStore;
use swapcart_verification::{QueryService, WorkflowEngine};

/// Application services handed to the route handlers.
///
/// The engine is the sole write path and the query service the sole read
/// path; both see the same store, so a read issued after a committed
/// transition always observes it.
pub struct AppServices {
    engine: WorkflowEngine<Arc<InMemoryVerificationStore>>,
    query: QueryService<Arc<InMemoryVerificationStore>>,
}

impl AppServices {
    pub fn new(store: Arc<InMemoryVerificationStore>) -> Self {
        Self {
            engine: WorkflowEngine::new(store.clone()),
            query: QueryService::new(store),
        }
    }

    pub fn engine(&self) -> &WorkflowEngine<Arc<InMemoryVerificationStore>> {
        &self.engine
    }

    pub fn query(&self) -> &QueryService<Arc<InMemoryVerificationStore>> {
        &self.query
    }
}
