//! Shared active-tab state for one container instance.
//!
//! `TabsContext` is a `Copy` handle over shared reactive cells; every
//! descendant that reads it through context observes the same live values.

use leptos::prelude::*;

use super::refs::TabBarBinding;

#[derive(Clone, Copy, Debug)]
pub struct TabsContext {
    active: RwSignal<Option<String>>,
    select: RwSignal<Option<Callback<String, bool>>>,
    bound: StoredValue<bool>,
}

impl TabsContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(None),
            select: RwSignal::new(None),
            bound: StoredValue::new(false),
        }
    }

    /// Reactive read of the mirrored active tab. `None` until the mounted
    /// bar has been bound (render-then-bind protocol).
    pub fn active_tab(&self) -> Option<String> {
        self.active.get()
    }

    pub fn active_tab_untracked(&self) -> Option<String> {
        self.active.get_untracked()
    }

    /// Ask the bound bar to switch tabs. Returns the bar's verdict; `false`
    /// before a bar has been bound, with no state touched.
    pub fn select_tab(&self, tab: &str) -> bool {
        match self.select.get_untracked() {
            Some(select) => select.run(tab.to_string()),
            None => false,
        }
    }

    /// Bridge this state to the mounted bar. Runs at most once per container
    /// instance: seeds the mirror from the bar's current value, subscribes
    /// the write-through hook, and captures the bar's selection function.
    pub(crate) fn bind(&self, binding: TabBarBinding) {
        if self.bound.get_value() {
            return;
        }
        self.bound.set_value(true);

        self.active.set(binding.active_tab());
        let active = self.active;
        binding.on_active_change(Callback::new(move |tab: String| active.set(Some(tab))));
        self.select.set(Some(binding.select_callback()));
    }

    #[cfg(test)]
    pub(crate) fn is_bound(&self) -> bool {
        self.bound.get_value()
    }
}

impl Default for TabsContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_tabs() -> TabsContext {
    use_context::<TabsContext>()
        .expect("TabsContext not found; <Tabs/> provides it in tab-group and router modes")
}

pub fn try_use_tabs() -> Option<TabsContext> {
    use_context::<TabsContext>()
}
