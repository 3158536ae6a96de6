// File: crates/window-demo/src/tags.rs
// Summary: Keyboard-driven stand-in for the variable tag list: focusing a tag runs its
// description through the show/hide debounce and feeds the variable store.

use std::time::{Duration, Instant};

use chart_core::disclosure::{HIDE_DELAY, SHOW_DELAY};
use chart_core::{DisclosureTimers, VariableStore};
use tracing::info;

pub struct TagPanel {
    store: VariableStore,
    timers: Vec<DisclosureTimers>,
    focused: Option<usize>,
}

impl TagPanel {
    pub fn new(store: VariableStore) -> Self {
        Self::with_delays(store, SHOW_DELAY, HIDE_DELAY)
    }

    pub fn with_delays(store: VariableStore, show: Duration, hide: Duration) -> Self {
        let timers = store
            .variables()
            .iter()
            .map(|v| DisclosureTimers::with_delays(v.description.is_some(), show, hide))
            .collect();
        Self { store, timers, focused: None }
    }

    pub fn store(&self) -> &VariableStore { &self.store }

    /// Move focus to tag `index` (or none), as the pointer moving between tags.
    pub fn focus(&mut self, index: Option<usize>, now: Instant) {
        let index = index.filter(|&i| i < self.timers.len());
        if index == self.focused {
            return;
        }
        if let Some(t) = self.focused.and_then(|i| self.timers.get_mut(i)) {
            t.pointer_leave(now);
        }
        if let Some(t) = index.and_then(|i| self.timers.get_mut(i)) {
            t.pointer_enter(now);
        }
        self.focused = index;
    }

    /// Flip selection of the focused tag; returns its name and new state.
    pub fn toggle_focused(&mut self) -> Option<(String, bool)> {
        let id = self.store.variables().get(self.focused?)?.id.clone();
        let selected = self.store.toggle(&id)?;
        let name = self.store.get(&id)?.name.clone();
        info!(%name, selected, "variable toggled");
        Some((name, selected))
    }

    /// Fire due timers. Returns whether the described variable changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        let before = self.store.described().map(|v| v.id.clone());
        let ids: Vec<String> = self.store.variables().iter().map(|v| v.id.clone()).collect();
        for (timer, id) in self.timers.iter_mut().zip(&ids) {
            if let Some(event) = timer.poll(now) {
                self.store.apply_disclosure(id, event);
            }
        }
        let after = self.store.described().map(|v| v.id.clone());
        before != after
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.iter().filter_map(DisclosureTimers::next_deadline).min()
    }

    /// Disarm every timer, as on teardown.
    pub fn cancel(&mut self) {
        self.timers.iter_mut().for_each(DisclosureTimers::cancel);
        self.focused = None;
    }

    /// Window title line for the current description.
    pub fn caption(&self) -> String {
        match self.store.described() {
            Some(v) => format!("{}: {}", v.name, v.description.as_deref().unwrap_or_default()),
            None => "KPI Dashboard Chart".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHOW: Duration = Duration::from_millis(1000);
    const HIDE: Duration = Duration::from_millis(2000);

    #[test]
    fn description_follows_focus_after_delays() {
        let mut panel = TagPanel::with_delays(VariableStore::sample(), SHOW, HIDE);
        let t0 = Instant::now();
        panel.focus(Some(0), t0);
        assert!(!panel.poll(t0 + Duration::from_millis(999)));
        assert!(panel.store().described().is_none());

        assert!(panel.poll(t0 + SHOW));
        assert_eq!(panel.store().described().map(|v| v.name.as_str()), Some("Carbon Emissions"));
        assert!(panel.caption().starts_with("Carbon Emissions: "));

        let t1 = t0 + SHOW;
        panel.focus(None, t1);
        assert!(!panel.poll(t1 + Duration::from_millis(1999)));
        assert!(panel.poll(t1 + HIDE));
        assert!(panel.store().described().is_none());
        assert_eq!(panel.next_deadline(), None);
    }

    #[test]
    fn cancel_stops_pending_show() {
        let mut panel = TagPanel::with_delays(VariableStore::sample(), SHOW, HIDE);
        let t0 = Instant::now();
        panel.focus(Some(2), t0);
        assert_eq!(panel.next_deadline(), Some(t0 + SHOW));
        panel.cancel();
        assert!(!panel.poll(t0 + SHOW * 2));
        assert!(panel.store().described().is_none());
    }

    #[test]
    fn toggles_focused_tag() {
        let mut panel = TagPanel::new(VariableStore::sample());
        assert!(panel.toggle_focused().is_none());
        panel.focus(Some(3), Instant::now());
        assert_eq!(panel.toggle_focused(), Some(("Parking Utilization Rate".to_string(), true)));
    }
}
