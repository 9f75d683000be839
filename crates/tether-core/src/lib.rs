//! # Observable state
//!
//! Tether is the change-notification layer behind a view-model. A view
//! subscribes to a plain data object and is told, synchronously, the name of
//! every field that changed so it can re-read just that field.
//!
//! There are three pieces:
//!
//! - `ObservableState` — the capability: equality-gated `set_field`,
//!   unconditional `notify` for derived values, `subscribe` / `unsubscribe`.
//! - `ObservableVec<T>` — a collection whose mutations are announced as
//!   structural events (`Added`, `Removed`, ...) carrying item and index.
//! - `Color` — the small value type the color samples are built from.
//!
//! ## Writing a view-model
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use tether_core::*;
//!
//! #[derive(Default)]
//! struct Login {
//!     name: String,
//!     observers: PropertyObservers<Self>,
//! }
//!
//! impl ObservableState for Login {
//!     fn observers(&self) -> &PropertyObservers<Self> {
//!         &self.observers
//!     }
//!     fn observers_mut(&mut self) -> &mut PropertyObservers<Self> {
//!         &mut self.observers
//!     }
//! }
//!
//! impl Login {
//!     fn set_name(&mut self, name: &str) {
//!         if set_property!(self, name, name.to_string()) {
//!             // derived, no storage of its own
//!             self.notify("can_submit");
//!         }
//!     }
//! }
//!
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let mut login = Login::default();
//! login.subscribe({
//!     let seen = seen.clone();
//!     move |_, prop| seen.borrow_mut().push(prop)
//! });
//!
//! login.set_name("ada");
//! login.set_name("ada");
//! assert_eq!(*seen.borrow(), vec!["name", "can_submit"]);
//! ```
//!
//! Field names are always explicit. `set_property!` fills them in from the
//! field identifier; `set_field` takes them as an argument.
//!
//! ## Threading
//!
//! Everything is single-threaded and synchronous: all notifications caused by
//! one call are delivered, in the order they were issued, before it returns.

pub mod collection;
pub mod color;
pub mod error;
pub mod observable;
pub mod tests;

pub use collection::*;
pub use color::*;
pub use error::*;
pub use observable::*;
