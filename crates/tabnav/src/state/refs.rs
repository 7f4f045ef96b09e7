//! Boundary handles for the selector-bar and outlet collaborators.
//!
//! The container never reaches into a widget; a mounted widget registers a
//! binding into the handle it was given, and the container observes the
//! registration slot.

use leptos::prelude::*;

/// What a mounted selector bar exposes: its current active tab, a selection
/// function, and a change subscription the container writes through.
#[derive(Clone, Copy)]
pub struct TabBarBinding {
    active_tab: RwSignal<Option<String>>,
    select: Callback<String, bool>,
    change_hook: RwSignal<Option<Callback<String>>>,
}

impl TabBarBinding {
    pub fn new(active_tab: RwSignal<Option<String>>, select: Callback<String, bool>) -> Self {
        Self {
            active_tab,
            select,
            change_hook: RwSignal::new(None),
        }
    }

    /// Current active tab as the bar itself sees it.
    pub fn active_tab(&self) -> Option<String> {
        self.active_tab.get_untracked()
    }

    pub fn select_callback(&self) -> Callback<String, bool> {
        self.select
    }

    pub fn select_tab(&self, tab: &str) -> bool {
        self.select.run(tab.to_string())
    }

    /// Subscribe to active-tab changes. The container installs its
    /// write-through hook here at bind time; the bar stays the source of
    /// truth, subscribers get a read-mirror.
    pub fn on_active_change(&self, hook: Callback<String>) {
        self.change_hook.set(Some(hook));
    }

    /// Record a newly active tab and fan it out to the subscriber. The bar
    /// widget calls this for every selection it accepts.
    pub fn notify_active(&self, tab: &str) {
        self.active_tab.set(Some(tab.to_string()));
        if let Some(hook) = self.change_hook.get_untracked() {
            hook.run(tab.to_string());
        }
    }
}

/// Registration slot for the mounted selector bar. Injected into the derived
/// bar node; the container's bind effect watches it.
#[derive(Clone, Copy, Debug)]
pub struct TabBarRef {
    slot: RwSignal<Option<TabBarBinding>>,
}

impl TabBarRef {
    pub fn new() -> Self {
        Self {
            slot: RwSignal::new(None),
        }
    }

    pub fn register(&self, binding: TabBarBinding) {
        self.slot.set(Some(binding));
    }

    /// Reactive read; the bind effect re-runs when a bar registers.
    pub fn get(&self) -> Option<TabBarBinding> {
        self.slot.get()
    }

    pub fn get_untracked(&self) -> Option<TabBarBinding> {
        self.slot.get_untracked()
    }
}

impl Default for TabBarRef {
    fn default() -> Self {
        Self::new()
    }
}

/// What a mounted outlet registers for downstream DOM/host access.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutletBinding {
    pub host_id: Option<String>,
}

/// Registration slot for the mounted outlet region; otherwise opaque.
#[derive(Clone, Copy, Debug)]
pub struct OutletRef {
    slot: RwSignal<Option<OutletBinding>>,
}

impl OutletRef {
    pub fn new() -> Self {
        Self {
            slot: RwSignal::new(None),
        }
    }

    pub fn register(&self, binding: OutletBinding) {
        self.slot.set(Some(binding));
    }

    pub fn get(&self) -> Option<OutletBinding> {
        self.slot.get_untracked()
    }

    pub fn is_attached(&self) -> bool {
        self.slot.with_untracked(|binding| binding.is_some())
    }
}

impl Default for OutletRef {
    fn default() -> Self {
        Self::new()
    }
}
