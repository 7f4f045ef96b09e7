use leptos::prelude::*;

use crate::children::node::ChildBody;
use crate::state::context::try_use_tabs;

/// Plain-mode tab panel: visible iff its id matches the shared active tab.
/// Content is created once and toggled by class, so panel state survives
/// switching. Standalone (no ambient tab state) it renders unconditionally.
#[component]
pub(crate) fn TabPanel(tab: String, body: ChildBody) -> impl IntoView {
    let state = try_use_tabs();

    let tab_for_active = tab.clone();
    let is_active = Memo::new(move |_| match state {
        Some(state) => state.active_tab().as_deref() == Some(tab_for_active.as_str()),
        None => true,
    });

    view! {
        <div class="tab-page" class:tab-page--hidden=move || !is_active.get() data-tab=tab>
            {body.run()}
        </div>
    }
}
