use std::cell::RefCell;
use std::rc::Rc;

/// Shared, mutable UI state the async drivers read and write.
///
/// The app implements this over a Dioxus signal; tests use
/// `Rc<RefCell<_>>`. Closures must not hold the value across an await.
pub trait StateHandle<V> {
    fn with<R>(&self, f: impl FnOnce(&V) -> R) -> R;

    fn update<R>(&self, f: impl FnOnce(&mut V) -> R) -> R;

    fn snapshot(&self) -> V
    where
        V: Clone,
    {
        self.with(V::clone)
    }
}

impl<V> StateHandle<V> for Rc<RefCell<V>> {
    fn with<R>(&self, f: impl FnOnce(&V) -> R) -> R {
        f(&self.borrow())
    }

    fn update<R>(&self, f: impl FnOnce(&mut V) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}
