//! Filter state synchronized with the address bar.
//!
//! The filter state and the URL must mirror each other without
//! triggering each other recursively. Every state change funnels
//! through one sync point; an inbound (URL-driven) update arms a
//! one-shot flag that suppresses exactly the next outbound write.
//! The origin of the last sync is recorded so the arbitration is
//! observable rather than an ad-hoc boolean buried in a callback.

use store_browse::FilterState;

/// Which side drove the most recent synchronization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOrigin {
    /// The URL changed and state was updated from it.
    Inbound,
    /// State changed and the URL was written from it.
    Outbound,
}

/// Where outbound query strings are written.
///
/// The production implementation replaces the current history entry
/// (no new entry per filter tweak, so back-navigation does not undo
/// checkboxes one by one); tests substitute a recorder.
pub trait HistorySink {
    /// Replace the current history entry's query string.
    fn replace_query(&mut self, query: &str);
}

/// Filter state plus URL synchronization.
#[derive(Debug)]
pub struct FilterStore<H: HistorySink> {
    state: FilterState,
    history: H,
    suppress_outbound: bool,
    last_sync: Option<SyncOrigin>,
}

impl<H: HistorySink> FilterStore<H> {
    /// Create a store with default filters and no sync performed.
    pub fn new(history: H) -> Self {
        Self {
            state: FilterState::default(),
            history,
            suppress_outbound: false,
            last_sync: None,
        }
    }

    /// Create a store initialized from the current URL.
    ///
    /// Loading from the URL is an inbound sync: it must not write the
    /// URL straight back.
    pub fn from_query(query: &str, history: H) -> Self {
        let mut store = Self::new(history);
        store.apply_inbound(query);
        store
    }

    /// The current filter state.
    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Origin of the most recent synchronization.
    pub fn last_sync(&self) -> Option<SyncOrigin> {
        self.last_sync
    }

    /// Access the history sink (used by tests to inspect writes).
    pub fn history(&self) -> &H {
        &self.history
    }

    /// Apply a URL change (back/forward navigation, shared link).
    pub fn apply_inbound(&mut self, query: &str) {
        self.suppress_outbound = true;
        self.state = FilterState::from_query(query);
        self.on_state_changed(SyncOrigin::Inbound);
    }

    /// Set the price range.
    pub fn set_price_range(&mut self, min: i64, max: i64) {
        self.state.set_price_range(min, max);
        self.on_state_changed(SyncOrigin::Outbound);
    }

    /// Toggle a style selection.
    pub fn toggle_style(&mut self, style: impl Into<String>) {
        self.state.toggle_style(style);
        self.on_state_changed(SyncOrigin::Outbound);
    }

    /// Toggle a material selection.
    pub fn toggle_material(&mut self, material: impl Into<String>) {
        self.state.toggle_material(material);
        self.on_state_changed(SyncOrigin::Outbound);
    }

    /// Toggle a brand selection.
    pub fn toggle_brand(&mut self, brand: impl Into<String>) {
        self.state.toggle_brand(brand);
        self.on_state_changed(SyncOrigin::Outbound);
    }

    /// Set the discount-only toggle.
    pub fn set_show_discounted(&mut self, show: bool) {
        self.state.set_show_discounted(show);
        self.on_state_changed(SyncOrigin::Outbound);
    }

    /// Clear all filters.
    pub fn reset(&mut self) {
        self.state.reset();
        self.on_state_changed(SyncOrigin::Outbound);
    }

    /// The single synchronization point for every state change.
    fn on_state_changed(&mut self, origin: SyncOrigin) {
        self.last_sync = Some(origin);

        if self.suppress_outbound {
            // One-shot: swallow this write only.
            self.suppress_outbound = false;
            tracing::debug!("outbound URL sync suppressed after inbound update");
            return;
        }
        if origin == SyncOrigin::Outbound {
            let query = self.state.to_query();
            tracing::debug!(query = %query, "replacing history entry");
            self.history.replace_query(&query);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every outbound write.
    #[derive(Debug, Default)]
    struct RecordingSink {
        writes: Vec<String>,
    }

    impl HistorySink for RecordingSink {
        fn replace_query(&mut self, query: &str) {
            self.writes.push(query.to_string());
        }
    }

    #[test]
    fn test_mutation_writes_url() {
        let mut store = FilterStore::new(RecordingSink::default());
        store.toggle_style("Modern");

        assert_eq!(store.history().writes.len(), 1);
        assert_eq!(store.history().writes[0], "styles=%5B%22Modern%22%5D");
        assert_eq!(store.last_sync(), Some(SyncOrigin::Outbound));
    }

    #[test]
    fn test_inbound_does_not_echo() {
        let mut store = FilterStore::new(RecordingSink::default());
        store.apply_inbound("showDiscounted=true");

        assert!(store.state().show_discounted);
        assert!(store.history().writes.is_empty());
        assert_eq!(store.last_sync(), Some(SyncOrigin::Inbound));
    }

    #[test]
    fn test_suppression_is_one_shot() {
        let mut store = FilterStore::new(RecordingSink::default());
        store.apply_inbound("showDiscounted=true");
        assert!(store.history().writes.is_empty());

        // The next user mutation syncs normally.
        store.toggle_brand("Herman");
        assert_eq!(store.history().writes.len(), 1);
    }

    #[test]
    fn test_from_query_initializes_without_write() {
        let store = FilterStore::from_query(
            "priceRange=%5B100%2C500%5D",
            RecordingSink::default(),
        );
        assert_eq!(store.state().price_range, (100, 500));
        assert!(store.history().writes.is_empty());
    }

    #[test]
    fn test_reset_writes_empty_query() {
        let mut store = FilterStore::new(RecordingSink::default());
        store.toggle_style("Modern");
        store.reset();

        assert_eq!(store.history().writes.last().map(String::as_str), Some(""));
        assert!(store.state().is_default());
    }

    #[test]
    fn test_consecutive_inbound_updates() {
        let mut store = FilterStore::new(RecordingSink::default());
        store.apply_inbound("showDiscounted=true");
        store.apply_inbound("styles=%5B%22A%22%5D");

        // The second inbound replaces the first wholesale.
        assert!(!store.state().show_discounted);
        assert!(store.state().styles.contains("A"));
        assert!(store.history().writes.is_empty());
    }
}
