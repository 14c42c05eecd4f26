use client::StateHandle;
use dioxus::prelude::*;

/// Lets the client drivers read and write a Dioxus signal.
///
/// Every `update` goes through `Signal::write`, so components reading the
/// signal re-render after each transition.
pub struct SignalStore<V: 'static>(pub Signal<V>);

impl<V: 'static> Clone for SignalStore<V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V: 'static> Copy for SignalStore<V> {}

impl<V: 'static> StateHandle<V> for SignalStore<V> {
    fn with<R>(&self, f: impl FnOnce(&V) -> R) -> R {
        f(&self.0.read())
    }

    fn update<R>(&self, f: impl FnOnce(&mut V) -> R) -> R {
        let mut signal = self.0;
        let mut value = signal.write();
        f(&mut value)
    }
}
