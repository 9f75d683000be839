use std::fmt;
use std::ops::Deref;

use slotmap::SlotMap;

use crate::observable::SubscriptionId;

/// Structural change to an [`ObservableVec`].
///
/// Items are borrowed from the collection (or from the value being handed
/// back to the caller, for removals), so no clone is needed to announce them.
#[derive(Debug, PartialEq)]
pub enum CollectionChange<'a, T> {
    Added { index: usize, item: &'a T },
    Removed { index: usize, item: &'a T },
    Replaced { index: usize, old: &'a T, new: &'a T },
    Moved { from: usize, to: usize, item: &'a T },
    /// The collection was emptied in one step.
    Reset,
}

type ChangeCallback<T> = Box<dyn Fn(&CollectionChange<'_, T>)>;

/// Ordered collection that announces which item moved where.
///
/// Reads go through `Deref<Target = [T]>`; every mutation goes through a
/// method that notifies subscribers synchronously.
pub struct ObservableVec<T> {
    items: Vec<T>,
    subs: SlotMap<SubscriptionId, ChangeCallback<T>>,
}

impl<T> ObservableVec<T> {
    pub fn new() -> Self {
        Self::from_vec(Vec::new())
    }

    /// Seeds the collection without emitting anything.
    pub fn from_vec(items: Vec<T>) -> Self {
        Self {
            items,
            subs: SlotMap::with_key(),
        }
    }

    pub fn subscribe(&mut self, f: impl Fn(&CollectionChange<'_, T>) + 'static) -> SubscriptionId {
        let id = self.subs.insert(Box::new(f));
        log::debug!("collection subscribed {id:?} ({} live)", self.subs.len());
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let removed = self.subs.remove(id).is_some();
        if removed {
            log::debug!("collection unsubscribed {id:?} ({} live)", self.subs.len());
        }
        removed
    }

    pub fn subscriber_count(&self) -> usize {
        self.subs.len()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Appends `item` and returns its index.
    pub fn push(&mut self, item: T) -> usize {
        self.items.push(item);
        let index = self.items.len() - 1;
        self.emit(&CollectionChange::Added {
            index,
            item: &self.items[index],
        });
        index
    }

    /// Returns false (and leaves the collection untouched) if
    /// `index > len`.
    pub fn insert(&mut self, index: usize, item: T) -> bool {
        if index > self.items.len() {
            log::debug!("insert at {index} past end ({})", self.items.len());
            return false;
        }
        self.items.insert(index, item);
        self.emit(&CollectionChange::Added {
            index,
            item: &self.items[index],
        });
        true
    }

    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        if index >= self.items.len() {
            log::debug!("remove at {index} out of range ({})", self.items.len());
            return None;
        }
        let item = self.items.remove(index);
        self.emit(&CollectionChange::Removed { index, item: &item });
        Some(item)
    }

    /// Removes the first item equal to `item`. Absent items are a no-op.
    pub fn remove_item(&mut self, item: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let index = self.items.iter().position(|it| it == item)?;
        self.remove_at(index)
    }

    pub fn replace(&mut self, index: usize, item: T) -> Option<T> {
        let slot = self.items.get_mut(index)?;
        let old = std::mem::replace(slot, item);
        self.emit(&CollectionChange::Replaced {
            index,
            old: &old,
            new: &self.items[index],
        });
        Some(old)
    }

    /// Moves the item at `from` so that it ends up at `to`. Moving an item
    /// onto itself changes nothing and emits nothing.
    pub fn move_item(&mut self, from: usize, to: usize) -> bool {
        let len = self.items.len();
        if from >= len || to >= len {
            log::debug!("move {from} -> {to} out of range ({len})");
            return false;
        }
        if from == to {
            return true;
        }
        let item = self.items.remove(from);
        self.items.insert(to, item);
        self.emit(&CollectionChange::Moved {
            from,
            to,
            item: &self.items[to],
        });
        true
    }

    pub fn clear(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.items.clear();
        self.emit(&CollectionChange::Reset);
    }

    fn emit(&self, change: &CollectionChange<'_, T>) {
        log::trace!("collection changed; {} subscriber(s)", self.subs.len());
        for f in self.subs.values() {
            f(change);
        }
    }
}

impl<T> Default for ObservableVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for ObservableVec<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T: fmt::Debug> fmt::Debug for ObservableVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObservableVec")
            .field("items", &self.items)
            .field("subscribers", &self.subs.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder(v: &mut ObservableVec<&'static str>) -> Rc<RefCell<Vec<String>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        let log2 = log.clone();
        v.subscribe(move |c| log2.borrow_mut().push(format!("{c:?}")));
        log
    }

    #[test]
    fn test_insert_and_move_report_indices() {
        let mut v = ObservableVec::from_vec(vec!["a", "b"]);
        let log = recorder(&mut v);

        assert!(v.insert(1, "x"));
        assert!(!v.insert(9, "y"));
        assert!(v.move_item(0, 2));
        assert!(v.move_item(1, 1));
        assert_eq!(&*v, &["x", "b", "a"]);

        let log = log.borrow();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0], r#"Added { index: 1, item: "x" }"#);
        assert_eq!(log[1], r#"Moved { from: 0, to: 2, item: "a" }"#);
    }

    #[test]
    fn test_replace_and_clear() {
        let mut v = ObservableVec::from_vec(vec!["a"]);
        let log = recorder(&mut v);

        assert_eq!(v.replace(0, "b"), Some("a"));
        assert_eq!(v.replace(3, "c"), None);
        v.clear();
        v.clear();

        let log = log.borrow();
        assert_eq!(
            *log,
            vec![
                r#"Replaced { index: 0, old: "a", new: "b" }"#.to_string(),
                "Reset".to_string(),
            ]
        );
    }

    #[test]
    fn test_unsubscribe_tracks_live_count() {
        let mut v: ObservableVec<&'static str> = ObservableVec::new();
        let log = recorder(&mut v);
        let id = v.subscribe(|_| {});
        assert_eq!(v.subscriber_count(), 2);

        assert!(v.unsubscribe(id));
        assert!(!v.unsubscribe(id));
        assert_eq!(v.subscriber_count(), 1);

        v.push("a");
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn test_remove_out_of_range_is_silent() {
        let mut v: ObservableVec<&'static str> = ObservableVec::new();
        let log = recorder(&mut v);
        assert_eq!(v.remove_at(0), None);
        assert_eq!(v.remove_item(&"z"), None);
        assert!(log.borrow().is_empty());
    }
}
