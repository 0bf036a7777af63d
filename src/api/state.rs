//! Application state for the Labor Cost Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::calculation::LaborCostAllocator;
use crate::config::ConfigLoader;

/// Shared application state.
///
/// Holds the loaded restaurant configuration and the allocator used for
/// every request.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    allocator: LaborCostAllocator,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
            allocator: LaborCostAllocator::new(),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the allocator used to cost requests.
    pub fn allocator(&self) -> &LaborCostAllocator {
        &self.allocator
    }
}
