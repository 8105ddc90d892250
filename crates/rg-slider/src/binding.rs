use std::cell::{Cell, RefCell};
use std::rc::Rc;

type Observer = Box<dyn FnMut(i64)>;

#[derive(Default)]
struct Inner {
    value: Cell<Option<i64>>,
    writes: Cell<u64>,
    observers: RefCell<Vec<Observer>>,
}

/// Host-owned value the slider publishes into
///
/// Clones share the same cell. Every [`BoundValue::set`] stores the value and
/// then notifies all observers synchronously, even when the value did not
/// change. Observers must not write back into the same cell.
#[derive(Clone, Default)]
pub struct BoundValue {
    inner: Rc<Inner>,
}

impl BoundValue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last written value, `None` until the first write
    pub fn get(&self) -> Option<i64> {
        self.inner.value.get()
    }

    /// Number of writes so far
    pub fn writes(&self) -> u64 {
        self.inner.writes.get()
    }

    /// Store `value` and notify observers
    pub fn set(&self, value: i64) {
        self.inner.value.set(Some(value));
        self.inner.writes.set(self.inner.writes.get() + 1);
        for observer in self.inner.observers.borrow_mut().iter_mut() {
            observer(value);
        }
    }

    /// Register a change-detection callback run after every write
    pub fn subscribe(&self, observer: impl FnMut(i64) + 'static) {
        self.inner.observers.borrow_mut().push(Box::new(observer));
    }
}

impl std::fmt::Debug for BoundValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundValue")
            .field("value", &self.get())
            .field("writes", &self.writes())
            .finish()
    }
}
