use std::fmt;

use slotmap::{SlotMap, new_key_type};

/// Name of a property as announced to subscribers.
pub type PropertyName = &'static str;

new_key_type! {
    /// Handle returned by `subscribe`; pass it back to `unsubscribe`.
    pub struct SubscriptionId;
}

type Callback<S> = Box<dyn Fn(&S, PropertyName)>;

/// Subscriber registry embedded in every observable state object.
pub struct PropertyObservers<S> {
    subs: SlotMap<SubscriptionId, Callback<S>>,
}

impl<S> PropertyObservers<S> {
    pub fn new() -> Self {
        Self {
            subs: SlotMap::with_key(),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subs.len()
    }

    fn insert(&mut self, f: Callback<S>) -> SubscriptionId {
        let id = self.subs.insert(f);
        log::debug!("subscribed {id:?} ({} live)", self.subs.len());
        id
    }

    fn remove(&mut self, id: SubscriptionId) -> bool {
        let removed = self.subs.remove(id).is_some();
        if removed {
            log::debug!("unsubscribed {id:?} ({} live)", self.subs.len());
        }
        removed
    }

    /// Delivers `property` to every subscriber before returning.
    pub fn emit(&self, state: &S, property: PropertyName) {
        log::trace!("{property} changed; {} subscriber(s)", self.subs.len());
        for f in self.subs.values() {
            f(state, property);
        }
    }
}

impl<S> Default for PropertyObservers<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> fmt::Debug for PropertyObservers<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyObservers")
            .field("subscribers", &self.subs.len())
            .finish()
    }
}

/// Change notification for a plain data object.
///
/// Implementors embed a [`PropertyObservers<Self>`] and hand it out through
/// the two accessors; everything else is provided.
///
/// Subscribers receive `&Self` so they can re-read the field that was named.
/// Calling back into a mutating operation of the same instance from inside a
/// subscriber is the caller's responsibility and is not guarded.
pub trait ObservableState: Sized + 'static {
    fn observers(&self) -> &PropertyObservers<Self>;
    fn observers_mut(&mut self) -> &mut PropertyObservers<Self>;

    fn subscribe(&mut self, f: impl Fn(&Self, PropertyName) + 'static) -> SubscriptionId {
        self.observers_mut().insert(Box::new(f))
    }

    /// Returns false if `id` was not (or no longer) subscribed.
    fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers_mut().remove(id)
    }

    fn subscriber_count(&self) -> usize {
        self.observers().subscriber_count()
    }

    /// Announces `property` unconditionally. Used for derived properties
    /// that have no storage of their own.
    fn notify(&self, property: PropertyName) {
        self.observers().emit(self, property);
    }

    /// Equality-gated write.
    ///
    /// Stores `value` into the slot returned by `field` and announces
    /// `property` only when the value actually changes. Returns whether it
    /// changed.
    fn set_field<T: PartialEq>(
        &mut self,
        field: impl FnOnce(&mut Self) -> &mut T,
        value: T,
        property: PropertyName,
    ) -> bool {
        let slot = field(self);
        if *slot == value {
            return false;
        }
        *slot = value;
        self.notify(property);
        true
    }
}

/// Equality-gated write of a named field, announcing the field's own name.
///
/// ```
/// use tether_core::*;
///
/// #[derive(Default)]
/// struct Counter {
///     count: u32,
///     observers: PropertyObservers<Self>,
/// }
///
/// impl ObservableState for Counter {
///     fn observers(&self) -> &PropertyObservers<Self> {
///         &self.observers
///     }
///     fn observers_mut(&mut self) -> &mut PropertyObservers<Self> {
///         &mut self.observers
///     }
/// }
///
/// let mut c = Counter::default();
/// assert!(set_property!(&mut c, count, 3));
/// assert!(!set_property!(&mut c, count, 3));
/// ```
#[macro_export]
macro_rules! set_property {
    ($state:expr, $field:ident, $value:expr) => {
        $crate::observable::ObservableState::set_field(
            &mut *$state,
            |s| &mut s.$field,
            $value,
            stringify!($field),
        )
    };
}
