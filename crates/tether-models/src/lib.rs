//! View-models for the data-binding samples.
//!
//! - [`SelectionState`]: pick colors from a catalog and keep a favorites list.
//! - [`GreetingState`]: a name field gating a greeting, plus a clock readout.
//!
//! Both implement [`tether_core::ObservableState`]; property names are
//! published as associated constants (`SelectionState::SELECTED_COLOR`, ...).

pub mod clock;
pub mod entry;
pub mod greeting;
pub mod selection;

pub use clock::*;
pub use entry::*;
pub use greeting::*;
pub use selection::*;
