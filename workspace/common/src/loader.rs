//! Load state machine for the external mapping library.
//!
//! The library script must be fetched at most once per process no matter
//! how many map widgets mount, and every widget must learn when it is
//! ready. This type owns that bookkeeping; the DOM side (creating the
//! actual script/stylesheet elements and wiring `onload`) is injected by
//! the caller, which keeps the machine testable with a counting stub.

/// Where the external library is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    NotRequested,
    Loading,
    Ready,
}

/// Handle for removing a registered subscriber.
pub type SubscriberId = u64;

type ReadyCallback = Box<dyn FnOnce()>;

/// Result of [`LibraryLoader::subscribe`].
pub enum Subscription {
    /// The library is already ready; the callback is handed back so the
    /// caller can run it synchronously, outside any borrow of the loader.
    Immediate(ReadyCallback),
    /// The callback is queued until [`LibraryLoader::notify_loaded`].
    Registered(SubscriberId),
}

/// One-shot broadcast of "the mapping library finished loading".
///
/// Single-threaded by design: the embedding runtime is the browser UI
/// thread, so there is no locking, only an ordered subscriber list.
pub struct LibraryLoader {
    phase: LoadPhase,
    next_id: SubscriberId,
    subscribers: Vec<(SubscriberId, ReadyCallback)>,
}

impl Default for LibraryLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl LibraryLoader {
    pub fn new() -> Self {
        Self {
            phase: LoadPhase::NotRequested,
            next_id: 0,
            subscribers: Vec::new(),
        }
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn is_ready(&self) -> bool {
        self.phase == LoadPhase::Ready
    }

    /// Requests the library, invoking `inject` only on the very first
    /// call. Later calls (more widgets mounting) are no-ops.
    ///
    /// If injection fails the phase stays `NotRequested` and the error is
    /// returned, so a later mount may attempt injection again.
    pub fn request<E>(&mut self, inject: impl FnOnce() -> Result<(), E>) -> Result<LoadPhase, E> {
        if self.phase == LoadPhase::NotRequested {
            inject()?;
            self.phase = LoadPhase::Loading;
            tracing::debug!("mapping library injection requested");
        }
        Ok(self.phase)
    }

    /// Registers a one-shot callback for the ready broadcast. When the
    /// library is already ready the callback is returned unchanged for
    /// the caller to invoke immediately.
    pub fn subscribe(&mut self, callback: ReadyCallback) -> Subscription {
        if self.phase == LoadPhase::Ready {
            return Subscription::Immediate(callback);
        }
        let id = self.next_id;
        self.next_id += 1;
        self.subscribers.push((id, callback));
        Subscription::Registered(id)
    }

    /// Drops a pending registration. Safe to call with an id that already
    /// fired or was never issued.
    pub fn unsubscribe(&mut self, id: SubscriberId) {
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
    }

    /// Marks the library ready and drains the subscriber list in
    /// registration order. The callbacks are returned rather than invoked
    /// here so the caller can release any surrounding borrow first.
    pub fn notify_loaded(&mut self) -> Vec<ReadyCallback> {
        self.phase = LoadPhase::Ready;
        let drained: Vec<ReadyCallback> = self
            .subscribers
            .drain(..)
            .map(|(_, callback)| callback)
            .collect();
        tracing::debug!(listeners = drained.len(), "mapping library ready");
        drained
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counter() -> (Rc<Cell<u32>>, impl Fn() -> ReadyCallback) {
        let count = Rc::new(Cell::new(0));
        let make = {
            let count = count.clone();
            move || -> ReadyCallback {
                let count = count.clone();
                Box::new(move || count.set(count.get() + 1))
            }
        };
        (count, make)
    }

    #[test]
    fn test_request_injects_exactly_once() {
        let mut loader = LibraryLoader::new();
        let injections = Cell::new(0);
        let inject = || -> Result<(), ()> {
            injections.set(injections.get() + 1);
            Ok(())
        };

        // Two widgets mounting concurrently both request the library.
        assert_eq!(loader.request(inject).unwrap(), LoadPhase::Loading);
        assert_eq!(loader.request(inject).unwrap(), LoadPhase::Loading);
        assert_eq!(injections.get(), 1);
    }

    #[test]
    fn test_request_after_ready_does_not_reinject() {
        let mut loader = LibraryLoader::new();
        loader.request(|| Ok::<(), ()>(())).unwrap();
        loader.notify_loaded();

        let mut injected = false;
        let phase = loader
            .request(|| -> Result<(), ()> {
                injected = true;
                Ok(())
            })
            .unwrap();
        assert_eq!(phase, LoadPhase::Ready);
        assert!(!injected);
    }

    #[test]
    fn test_failed_injection_leaves_phase_not_requested() {
        let mut loader = LibraryLoader::new();
        assert_eq!(loader.request(|| Err::<(), _>("boom")), Err("boom"));
        assert_eq!(loader.phase(), LoadPhase::NotRequested);

        // The next mount gets another attempt.
        assert_eq!(
            loader.request(|| Ok::<(), &str>(())).unwrap(),
            LoadPhase::Loading
        );
    }

    #[test]
    fn test_broadcast_drains_all_subscribers_once() {
        let mut loader = LibraryLoader::new();
        let (count, make) = counter();

        assert!(matches!(
            loader.subscribe(make()),
            Subscription::Registered(_)
        ));
        assert!(matches!(
            loader.subscribe(make()),
            Subscription::Registered(_)
        ));

        for callback in loader.notify_loaded() {
            callback();
        }
        assert_eq!(count.get(), 2);
        assert!(loader.is_ready());

        // A second broadcast has nothing left to deliver.
        assert!(loader.notify_loaded().is_empty());
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_late_subscriber_fires_synchronously() {
        let mut loader = LibraryLoader::new();
        loader.notify_loaded();

        let (count, make) = counter();
        match loader.subscribe(make()) {
            Subscription::Immediate(callback) => callback(),
            Subscription::Registered(_) => panic!("expected immediate readiness"),
        }
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_unsubscribed_callback_never_fires() {
        let mut loader = LibraryLoader::new();
        let (count, make) = counter();

        let id = match loader.subscribe(make()) {
            Subscription::Registered(id) => id,
            Subscription::Immediate(_) => panic!("loader cannot be ready yet"),
        };
        loader.unsubscribe(id);

        for callback in loader.notify_loaded() {
            callback();
        }
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_unsubscribe_unknown_id_is_harmless() {
        let mut loader = LibraryLoader::new();
        loader.unsubscribe(42);
        assert_eq!(loader.phase(), LoadPhase::NotRequested);
    }
}
