//! Map widget lifecycle and the shared script-load registry.

#[cfg(test)]
#[path = "loader_test.rs"]
mod loader_test;

use std::cell::RefCell;

use crate::map::error::MapError;

/// Lifecycle of one mounted map widget.
///
/// `Failed` is terminal: no event moves a widget out of it, and a new
/// attempt requires unmounting and remounting the widget.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum MapPhase {
    #[default]
    Uninitialized,
    ScriptLoading,
    ScriptReady,
    Initialized,
    Failed(MapError),
}

impl MapPhase {
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    pub fn error(&self) -> Option<&MapError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// The widget registered for the shared load and is waiting.
    #[must_use]
    pub fn begin_loading(self) -> Self {
        if self.is_failed() { self } else { Self::ScriptLoading }
    }

    /// The shared load finished (or failed) for this widget.
    #[must_use]
    pub fn script_arrived(self, result: Result<(), MapError>) -> Self {
        if self.is_failed() {
            return self;
        }
        match result {
            Ok(()) => Self::ScriptReady,
            Err(err) => Self::Failed(err),
        }
    }

    /// Map construction ran against the loaded engine.
    #[must_use]
    pub fn map_built(self, result: Result<(), MapError>) -> Self {
        if self.is_failed() {
            return self;
        }
        match result {
            Ok(()) => Self::Initialized,
            Err(err) => Self::Failed(err),
        }
    }
}

/// Handle for one registered subscriber.
pub type WaiterId = u64;

/// What the subscriber must do next.
#[derive(Debug, PartialEq, Eq)]
pub enum SubscribeOutcome {
    /// Engine already loaded. The ready callback has been invoked
    /// synchronously; nothing to inject.
    Ready,
    /// A load started by an earlier subscriber is in flight; the shared
    /// ready signal will fire the callback.
    Pending(WaiterId),
    /// This subscriber starts the load and must inject the provider
    /// script.
    Inject(WaiterId),
}

type ReadyFn = Box<dyn FnOnce(Result<(), MapError>)>;

/// Document-wide load status of the provider script.
///
/// Replaces probing the DOM for a script tag or the engine namespace:
/// this registry is the only record of whether the script is absent,
/// in flight, or evaluated, and all mutation goes through it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum ScriptStatus {
    #[default]
    NotLoaded,
    Loading,
    Loaded,
}

#[derive(Default)]
struct Registry {
    status: ScriptStatus,
    waiters: Vec<(WaiterId, ReadyFn)>,
    next_id: WaiterId,
}

impl Registry {
    fn enqueue(&mut self, ready: ReadyFn) -> WaiterId {
        let id = self.next_id;
        self.next_id += 1;
        self.waiters.push((id, ready));
        id
    }
}

thread_local! {
    // UI code is single-threaded; thread_local gives the module-scoped
    // singleton without locking.
    static REGISTRY: RefCell<Registry> = RefCell::default();
}

/// Register interest in the loaded engine.
///
/// Exactly one subscriber per load cycle is told to inject; everyone
/// else waits on the shared signal. Subscribing after the script has
/// loaded invokes `on_ready` immediately and injects nothing.
pub fn subscribe(on_ready: impl FnOnce(Result<(), MapError>) + 'static) -> SubscribeOutcome {
    let status = REGISTRY.with(|cell| cell.borrow().status);
    match status {
        ScriptStatus::Loaded => {
            // Invoked outside the borrow so the callback may re-enter.
            on_ready(Ok(()));
            SubscribeOutcome::Ready
        }
        ScriptStatus::Loading => {
            let id = REGISTRY.with(|cell| cell.borrow_mut().enqueue(Box::new(on_ready)));
            SubscribeOutcome::Pending(id)
        }
        ScriptStatus::NotLoaded => {
            let id = REGISTRY.with(|cell| {
                let mut reg = cell.borrow_mut();
                reg.status = ScriptStatus::Loading;
                reg.enqueue(Box::new(on_ready))
            });
            SubscribeOutcome::Inject(id)
        }
    }
}

/// Drop a pending subscription. Best-effort unmount cleanup; the script
/// tag and any constructed map instance stay behind.
pub fn unsubscribe(id: WaiterId) {
    REGISTRY.with(|cell| cell.borrow_mut().waiters.retain(|(wid, _)| *wid != id));
}

/// The provider invoked the global ready callback: the script evaluated.
pub fn script_ready() {
    let waiters = REGISTRY.with(|cell| {
        let mut reg = cell.borrow_mut();
        reg.status = ScriptStatus::Loaded;
        std::mem::take(&mut reg.waiters)
    });
    for (_, ready) in waiters {
        ready(Ok(()));
    }
}

/// The script tag failed to load. Pending subscribers fail; the status
/// resets so a widget mounted later may attempt a fresh load.
pub fn script_failed() {
    let waiters = REGISTRY.with(|cell| {
        let mut reg = cell.borrow_mut();
        reg.status = ScriptStatus::NotLoaded;
        std::mem::take(&mut reg.waiters)
    });
    for (_, ready) in waiters {
        ready(Err(MapError::ScriptLoad));
    }
}
