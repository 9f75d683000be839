use std::fmt;

use tether_core::{ObservableState, PropertyName, PropertyObservers, set_property};

use crate::clock::{SystemClock, WallClock, long_time};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Collapsed,
}

/// View-model for the greeting page: a name field, a submit gate, and a
/// clock that an outside timer refreshes through [`tick`](Self::tick).
pub struct GreetingState {
    user_name: String,
    is_name_needed: bool,
    clock: Box<dyn WallClock>,
    observers: PropertyObservers<Self>,
}

impl GreetingState {
    pub const USER_NAME: PropertyName = "user_name";
    pub const IS_SUBMIT_ALLOWED: PropertyName = "is_submit_allowed";
    pub const IS_NAME_NEEDED: PropertyName = "is_name_needed";
    pub const GREETING_VISIBILITY: PropertyName = "greeting_visibility";
    pub const CURRENT_TIME: PropertyName = "current_time";

    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    pub fn with_clock(clock: impl WallClock) -> Self {
        Self {
            user_name: String::new(),
            is_name_needed: true,
            clock: Box::new(clock),
            observers: PropertyObservers::new(),
        }
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn set_user_name(&mut self, name: impl Into<String>) -> bool {
        let changed = set_property!(self, user_name, name.into());
        if changed {
            self.notify(Self::IS_SUBMIT_ALLOWED);
        }
        changed
    }

    /// More than two characters once surrounding whitespace is trimmed.
    pub fn is_submit_allowed(&self) -> bool {
        self.user_name.trim().chars().count() > 2
    }

    pub fn is_name_needed(&self) -> bool {
        self.is_name_needed
    }

    pub fn greeting_visibility(&self) -> Visibility {
        if self.is_name_needed {
            Visibility::Collapsed
        } else {
            Visibility::Visible
        }
    }

    /// Returns false without touching anything if no name has been entered.
    pub fn submit(&mut self) -> bool {
        if self.user_name.is_empty() {
            log::debug!("submit ignored: empty name");
            return false;
        }
        set_property!(self, is_name_needed, false);
        self.notify(Self::GREETING_VISIBILITY);
        true
    }

    pub fn current_time(&self) -> String {
        long_time(self.clock.now())
    }

    /// Called once per second by whoever owns the timer.
    pub fn tick(&self) {
        self.notify(Self::CURRENT_TIME);
    }
}

impl Default for GreetingState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for GreetingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GreetingState")
            .field("user_name", &self.user_name)
            .field("is_name_needed", &self.is_name_needed)
            .field("observers", &self.observers)
            .finish_non_exhaustive()
    }
}

impl ObservableState for GreetingState {
    fn observers(&self) -> &PropertyObservers<Self> {
        &self.observers
    }
    fn observers_mut(&mut self) -> &mut PropertyObservers<Self> {
        &mut self.observers
    }
}
