use tether_core::{
    CollectionChange, ObservableState, ObservableVec, PropertyName, PropertyObservers,
    SubscriptionId, set_property,
};

use crate::entry::{ColorEntry, standard_catalog};

/// View-model for the color list page.
///
/// Holds a fixed catalog, the highlighted catalog entry, a list of favorites
/// and the highlighted favorite. Changes to the favorites list are announced
/// twice: as a structural event on [`subscribe_favorites`](Self::subscribe_favorites)
/// and as a `favorites` property change.
#[derive(Debug)]
pub struct SelectionState {
    catalog: Vec<ColorEntry>,
    favorites: ObservableVec<ColorEntry>,
    selected_color: ColorEntry,
    selected_favorite: Option<ColorEntry>,
    observers: PropertyObservers<Self>,
}

impl SelectionState {
    pub const SELECTED_COLOR: PropertyName = "selected_color";
    pub const SELECTED_FAVORITE: PropertyName = "selected_favorite";
    pub const IS_REMOVE_FAVORITE_VISIBLE: PropertyName = "is_remove_favorite_visible";
    pub const FAVORITES: PropertyName = "favorites";

    pub fn new() -> Self {
        Self::with_catalog(standard_catalog())
    }

    /// The first catalog entry starts out highlighted.
    ///
    /// # Panics
    ///
    /// If `catalog` is empty.
    pub fn with_catalog(catalog: Vec<ColorEntry>) -> Self {
        assert!(!catalog.is_empty(), "color catalog must not be empty");
        let selected_color = catalog[0].clone();
        Self {
            catalog,
            favorites: ObservableVec::new(),
            selected_color,
            selected_favorite: None,
            observers: PropertyObservers::new(),
        }
    }

    pub fn catalog(&self) -> &[ColorEntry] {
        &self.catalog
    }

    /// Catalog entry with the given label, if any.
    pub fn entry(&self, label: &str) -> Option<&ColorEntry> {
        self.catalog.iter().find(|e| e.label() == label)
    }

    pub fn favorites(&self) -> &[ColorEntry] {
        &self.favorites
    }

    pub fn selected_color(&self) -> &ColorEntry {
        &self.selected_color
    }

    pub fn selected_favorite(&self) -> Option<&ColorEntry> {
        self.selected_favorite.as_ref()
    }

    pub fn is_remove_favorite_visible(&self) -> bool {
        self.selected_favorite.is_some()
    }

    /// `entry` is expected to come from [`catalog`](Self::catalog); that is
    /// only checked in debug builds.
    pub fn select_color(&mut self, entry: ColorEntry) -> bool {
        debug_assert!(
            self.catalog.contains(&entry),
            "{entry} is not in the catalog"
        );
        set_property!(self, selected_color, entry)
    }

    /// Appends the highlighted color (duplicates allowed) and returns its
    /// index in the favorites list.
    pub fn add_selected_to_favorites(&mut self) -> usize {
        let index = self.favorites.push(self.selected_color.clone());
        self.notify(Self::FAVORITES);
        index
    }

    pub fn select_favorite(&mut self, entry: Option<ColorEntry>) {
        set_property!(self, selected_favorite, entry);
        self.notify(Self::IS_REMOVE_FAVORITE_VISIBLE);
    }

    /// Removes the first favorite equal to the highlighted favorite.
    ///
    /// Nothing happens when no favorite is highlighted or it is no longer in
    /// the list. The highlight itself is left alone; a view that wants it
    /// cleared calls `select_favorite(None)`.
    pub fn remove_favorite(&mut self) -> Option<ColorEntry> {
        let target = self.selected_favorite.as_ref()?;
        let Some(removed) = self.favorites.remove_item(target) else {
            log::debug!("remove_favorite: {target} not in favorites");
            return None;
        };
        self.notify(Self::FAVORITES);
        Some(removed)
    }

    pub fn subscribe_favorites(
        &mut self,
        f: impl Fn(&CollectionChange<'_, ColorEntry>) + 'static,
    ) -> SubscriptionId {
        self.favorites.subscribe(f)
    }

    pub fn unsubscribe_favorites(&mut self, id: SubscriptionId) -> bool {
        self.favorites.unsubscribe(id)
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new()
    }
}

impl ObservableState for SelectionState {
    fn observers(&self) -> &PropertyObservers<Self> {
        &self.observers
    }
    fn observers_mut(&mut self) -> &mut PropertyObservers<Self> {
        &mut self.observers
    }
}
