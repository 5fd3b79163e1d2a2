use std::cell::RefCell;
use std::rc::Rc;

use tracing::warn;

use crate::state::errors::HandleError;
use crate::state::snapshot::RouterSnapshot;
use crate::state::store::Router;

/// Shared handle to the application's one router.
///
/// Clones point at the same router. The handle is `!Send` and `!Sync`, so it stays on
/// the thread that created it. Access that overlaps a running operation, such as a
/// tracker calling back into the router, fails with [`HandleError::Reentrant`].
#[derive(Debug, Clone)]
pub struct RouterHandle {
    inner: Rc<RefCell<Router>>,
}

impl RouterHandle {
    pub fn new(router: Router) -> Self {
        Self {
            inner: Rc::new(RefCell::new(router)),
        }
    }

    pub fn read<T>(&self, f: impl FnOnce(&Router) -> T) -> Result<T, HandleError> {
        let router = self.inner.try_borrow().map_err(|_| {
            warn!(event = "core.handle.reentrant_access", operation = "read");
            HandleError::Reentrant { operation: "read" }
        })?;
        Ok(f(&router))
    }

    pub fn update<T>(&self, f: impl FnOnce(&mut Router) -> T) -> Result<T, HandleError> {
        let mut router = self.inner.try_borrow_mut().map_err(|_| {
            warn!(event = "core.handle.reentrant_access", operation = "update");
            HandleError::Reentrant {
                operation: "update",
            }
        })?;
        Ok(f(&mut router))
    }

    pub fn snapshot(&self) -> Result<RouterSnapshot, HandleError> {
        self.read(Router::snapshot)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::routes::HomeRoute;
    use crate::state::events::NavigationEvent;
    use crate::state::routing::{CommandHandling, HomeRouting};
    use crate::state::types::{Command, Flow, Tab};
    use crate::tracking::NavigationTracker;

    #[test]
    fn test_clones_share_router() {
        let handle = RouterHandle::new(Router::new());
        let other = handle.clone();
        other
            .update(|r| r.handle_command(Command::GoAuthorizedRoot { tab: Tab::Profile }))
            .unwrap();
        assert_eq!(handle.read(|r| r.flow()).unwrap(), Flow::Authorized);
    }

    #[test]
    fn test_nested_update_is_rejected() {
        let handle = RouterHandle::new(Router::new());
        let inner = handle.clone();
        let nested = handle
            .update(|_| inner.update(|r| r.home_push(HomeRoute::Filters)))
            .unwrap();
        assert!(matches!(
            nested,
            Err(HandleError::Reentrant {
                operation: "update"
            })
        ));
        assert!(handle.read(|r| r.home_stack().is_empty()).unwrap());
    }

    /// Tracker that tries to read the router while an operation is running.
    struct CallbackTracker {
        handle: RefCell<Option<RouterHandle>>,
        outcomes: Rc<RefCell<Vec<bool>>>,
    }

    impl NavigationTracker for CallbackTracker {
        fn name(&self) -> &'static str {
            "callback"
        }

        fn track(&self, _event: &NavigationEvent) {
            if let Some(handle) = self.handle.borrow().as_ref() {
                self.outcomes.borrow_mut().push(handle.read(|_| ()).is_ok());
            }
        }
    }

    #[test]
    fn test_tracker_callback_is_reported_not_applied() {
        let outcomes = Rc::new(RefCell::new(Vec::new()));
        let tracker = Rc::new(CallbackTracker {
            handle: RefCell::new(None),
            outcomes: Rc::clone(&outcomes),
        });

        struct Shared(Rc<CallbackTracker>);
        impl NavigationTracker for Shared {
            fn name(&self) -> &'static str {
                self.0.name()
            }
            fn track(&self, event: &NavigationEvent) {
                self.0.track(event);
            }
        }

        let handle = RouterHandle::new(Router::new().with_tracker(Shared(Rc::clone(&tracker))));
        *tracker.handle.borrow_mut() = Some(handle.clone());

        handle.update(|r| r.home_push(HomeRoute::Filters)).unwrap();

        assert_eq!(*outcomes.borrow(), vec![false]);
        assert_eq!(handle.read(|r| r.home_stack().len()).unwrap(), 1);

        // Break the Rc cycle between the tracker and the router.
        tracker.handle.borrow_mut().take();
    }
}
