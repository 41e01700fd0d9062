//! Route changes requested by components.

use std::sync::{Arc, Mutex};

/// Route of the product listing page.
pub const PRODUCTS_ROUTE: &str = "/products";

/// Requests a route change. Fire-and-forget.
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

/// A [`Navigator`] that remembers the last requested route.
///
/// Server-rendered pages cannot change route themselves; the handler reads
/// the captured path afterwards and answers with a redirect.
#[derive(Debug, Clone, Default)]
pub struct RedirectNavigator {
    target: Arc<Mutex<Option<String>>>,
}

impl RedirectNavigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the captured route, leaving none behind.
    #[must_use]
    pub fn take(&self) -> Option<String> {
        self.target.lock().ok().and_then(|mut target| target.take())
    }
}

impl Navigator for RedirectNavigator {
    fn navigate(&self, path: &str) {
        tracing::debug!(path, "Navigation requested");
        if let Ok(mut target) = self.target.lock() {
            *target = Some(path.to_owned());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captures_last_route() {
        let navigator = RedirectNavigator::new();
        assert_eq!(navigator.take(), None);

        navigator.navigate("/cart");
        navigator.navigate(PRODUCTS_ROUTE);
        assert_eq!(navigator.take().as_deref(), Some(PRODUCTS_ROUTE));
        assert_eq!(navigator.take(), None);
    }

    #[test]
    fn test_clones_share_the_slot() {
        let navigator = RedirectNavigator::new();
        let handle: Arc<dyn Navigator> = Arc::new(navigator.clone());

        handle.navigate(PRODUCTS_ROUTE);
        assert_eq!(navigator.take().as_deref(), Some(PRODUCTS_ROUTE));
    }
}
