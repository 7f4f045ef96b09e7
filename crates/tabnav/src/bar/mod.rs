//! Reference selector-bar widget.
//!
//! Tracks its own active tab and the set of known tab ids, fires the
//! will/did-change callbacks around every accepted selection, and registers
//! its binding into the container-injected `TabBarRef`. Styling and touch
//! behavior beyond plain buttons stay out of scope.

use leptos::prelude::*;

use crate::compose::composer::BarInjection;
use crate::events::TabChangeEvent;
use crate::state::refs::TabBarBinding;

/// Bar-internal channel between `TabBar` and its `TabButton`s.
#[derive(Clone, Copy)]
struct TabBarContext {
    active: RwSignal<Option<String>>,
    known: RwSignal<Vec<String>>,
    select: Callback<String, bool>,
}

#[component]
pub fn TabBar(
    #[prop(optional)] class: Option<String>,
    #[prop(optional)] selected_tab: Option<String>,
    #[prop(optional)] on_tabs_will_change: Option<Callback<TabChangeEvent>>,
    #[prop(optional)] on_tabs_did_change: Option<Callback<TabChangeEvent>>,
    children: Children,
) -> impl IntoView {
    let injection = use_context::<BarInjection>();

    let active = RwSignal::new(selected_tab);
    let known = RwSignal::new(Vec::<String>::new());

    // Handlers forwarded from <Tabs/> win; an absent forward must not
    // clobber the handlers set on the bar itself.
    let will_change = injection
        .and_then(|injection| injection.on_tabs_will_change)
        .or(on_tabs_will_change);
    let did_change = injection
        .and_then(|injection| injection.on_tabs_did_change)
        .or(on_tabs_did_change);

    let binding_cell = StoredValue::new(None::<TabBarBinding>);
    let select = Callback::new(move |tab: String| {
        let is_known = known.with_untracked(|tabs| tabs.iter().any(|known_tab| known_tab == &tab));
        if !is_known {
            leptos::logging::warn!("⚠️ TabBar: select_tab for unknown tab '{}'", tab);
            return false;
        }
        if let Some(callback) = will_change {
            callback.run(TabChangeEvent { tab: tab.clone() });
        }
        match binding_cell.get_value() {
            Some(binding) => binding.notify_active(&tab),
            None => active.set(Some(tab.clone())),
        }
        if let Some(callback) = did_change {
            callback.run(TabChangeEvent { tab });
        }
        true
    });

    let binding = TabBarBinding::new(active, select);
    binding_cell.set_value(Some(binding));
    if let Some(injection) = injection {
        injection.bar_ref.register(binding);
    }

    provide_context(TabBarContext {
        active,
        known,
        select,
    });

    view! {
        <nav class=class.unwrap_or_else(|| "tab-bar".to_string()) role="tablist">
            {children()}
        </nav>
    }
}

#[component]
pub fn TabButton(#[prop(into)] tab: String, children: Children) -> impl IntoView {
    let bar = use_context::<TabBarContext>()
        .expect("TabBarContext not found; <TabButton/> must be inside a <TabBar/>");

    let tab_for_register = tab.clone();
    bar.known.update(|tabs| {
        if !tabs.contains(&tab_for_register) {
            tabs.push(tab_for_register);
        }
    });

    // First button becomes the default selection when none was configured.
    if bar.active.with_untracked(|active| active.is_none()) {
        bar.active.set(Some(tab.clone()));
    }

    let tab_for_cleanup = tab.clone();
    on_cleanup(move || {
        bar.known
            .update(|tabs| tabs.retain(|known_tab| known_tab != &tab_for_cleanup));
    });

    let tab_for_active = tab.clone();
    let is_active = Memo::new(move |_| bar.active.get().as_deref() == Some(tab_for_active.as_str()));

    let tab_for_click = tab.clone();
    let on_click = move |_| {
        bar.select.run(tab_for_click.clone());
    };

    view! {
        <button class="tab-button" class:active=is_active role="tab" data-tab=tab on:click=on_click>
            {children()}
        </button>
    }
}
