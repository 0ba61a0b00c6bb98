use std::sync::Arc;

use async_trait::async_trait;

use crate::models::event::LiveEvent;
use crate::traits::event_handler::LiveEventHandler;

/// Composite event handler that can combine multiple handlers
pub struct CompositeEventHandler {
    handlers: Vec<Arc<dyn LiveEventHandler>>,
}

impl CompositeEventHandler {
    /// Create a new composite event handler
    pub fn new() -> Self {
        Self { handlers: Vec::new() }
    }

    /// Add a handler to the composite
    pub fn add_handler(&mut self, handler: Arc<dyn LiveEventHandler>) {
        self.handlers.push(handler);
    }

    /// Check if there are any handlers
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Number of handlers
    pub fn len(&self) -> usize {
        self.handlers.len()
    }
}

impl Default for CompositeEventHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LiveEventHandler for CompositeEventHandler {
    async fn handle_live_event(&self, event: &LiveEvent) {
        for handler in &self.handlers {
            handler.handle_live_event(event).await;
        }
    }

    async fn handle_error(&self, error: &anyhow::Error) {
        for handler in &self.handlers {
            handler.handle_error(error).await;
        }
    }
}
