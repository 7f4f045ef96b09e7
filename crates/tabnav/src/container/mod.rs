//! The tabs navigation container.
//!
//! Per render: resolve children → classify → enforce invariants → branch on
//! router presence → render the composed tree. Per mount: a one-shot effect
//! binds the shared state to the bar once the bar registers itself.

use leptos::prelude::*;

use crate::children::classifier::classify;
use crate::children::node::{TabsChild, TabsChildren};
use crate::compose::composer::{
    compose, BarInjection, ComposedBar, ComposedChild, ComposedOutlet, ComposedTree, TabsCallbacks,
    TabsRefs,
};
use crate::events::TabChangeEvent;
use crate::router::{use_router, PageTransition, RouteInfo};
use crate::state::context::TabsContext;
use crate::state::refs::OutletBinding;

#[component]
pub fn Tabs(
    #[prop(optional)] class: Option<String>,
    #[prop(optional)] on_tabs_will_change: Option<Callback<TabChangeEvent>>,
    #[prop(optional)] on_tabs_did_change: Option<Callback<TabChangeEvent>>,
    #[prop(into)] children: TabsChildren,
) -> impl IntoView {
    let state = TabsContext::new();
    let refs = TabsRefs::new();

    // Render-then-bind: the bar registers during render, the effect runs
    // after commit and bridges the shared state to it exactly once.
    let bar_ref = refs.bar_ref;
    Effect::new(move |_| {
        if let Some(binding) = bar_ref.get() {
            state.bind(binding);
        }
    });

    let resolved = children.resolve(state);
    let classification = classify(&resolved);
    let route = use_router()
        .filter(|router| router.has_router())
        .map(|router| router.route_info());
    let callbacks = TabsCallbacks {
        on_tabs_will_change,
        on_tabs_did_change,
    };

    match compose(
        &resolved,
        &classification,
        state,
        refs,
        route,
        class,
        &callbacks,
    ) {
        Ok(tree) => render_tree(tree),
        Err(err) => panic!("<Tabs/>: {err}"),
    }
}

fn render_tree(tree: ComposedTree) -> AnyView {
    match tree {
        ComposedTree::TabGroup {
            class,
            state,
            bar,
            children,
        } => render_tab_group(class, state, bar, children),
        ComposedTree::Routed {
            class,
            state,
            route_info,
            children,
        } => render_routed(class, state, route_info, children),
        ComposedTree::Static { class, bar, outlet } => render_static(class, bar, outlet),
    }
}

fn render_tab_group(
    class: Option<String>,
    state: TabsContext,
    bar: BarInjection,
    children: Vec<TabsChild>,
) -> AnyView {
    let rendered: Vec<AnyView> = children.iter().map(TabsChild::render).collect();
    view! {
        <TabsScope state=state bar=Some(bar)>
            <div class=class.unwrap_or_else(|| "tabs".to_string())>{rendered}</div>
        </TabsScope>
    }
    .into_any()
}

fn render_routed(
    class: Option<String>,
    state: TabsContext,
    route_info: RouteInfo,
    children: Vec<ComposedChild>,
) -> AnyView {
    let rendered: Vec<AnyView> = children.into_iter().map(render_composed_child).collect();
    view! {
        <TabsScope state=state bar=None>
            <PageTransition class=class route_info=route_info>
                <div class="tabs">{rendered}</div>
            </PageTransition>
        </TabsScope>
    }
    .into_any()
}

fn render_static(class: Option<String>, bar: ComposedBar, outlet: ComposedOutlet) -> AnyView {
    let top = bar.is_top().then(|| bar.clone());
    let bottom = bar.is_bottom().then(|| bar);
    view! {
        <div class=class.unwrap_or_else(|| "tabs".to_string())>
            {top.map(|bar| view! { <BarHost bar=bar /> })}
            <div class="tabs-inner">
                <OutletHost outlet=outlet />
            </div>
            {bottom.map(|bar| view! { <BarHost bar=bar /> })}
        </div>
    }
    .into_any()
}

fn render_composed_child(child: ComposedChild) -> AnyView {
    match child {
        ComposedChild::SelectorBar(bar) => view! { <BarHost bar=bar /> }.into_any(),
        ComposedChild::Outlet(outlet) => view! { <OutletHost outlet=outlet /> }.into_any(),
        ComposedChild::Passthrough(node) => node.render(),
    }
}

/// Provides the shared tab state (and, in tab-group mode, the bar injection)
/// to everything rendered below the container.
#[component]
fn TabsScope(state: TabsContext, bar: Option<BarInjection>, children: Children) -> impl IntoView {
    provide_context(state);
    if let Some(bar) = bar {
        provide_context(bar);
    }
    children()
}

/// Host of the derived selector-bar node: exposes the injected props to the
/// bar widget it renders.
#[component]
fn BarHost(bar: ComposedBar) -> impl IntoView {
    provide_context(bar.injection);
    bar.widget.body.run()
}

/// Host of the derived outlet node: registers the host id on the outlet
/// boundary and exposes the handle to the subtree.
#[component]
fn OutletHost(outlet: ComposedOutlet) -> impl IntoView {
    let host_id = outlet.widget.props.id.clone();
    outlet.outlet_ref.register(OutletBinding {
        host_id: host_id.clone(),
    });
    provide_context(outlet.outlet_ref);
    view! {
        <div class="tabs-outlet" id=host_id>
            {outlet.widget.body.run()}
        </div>
    }
}
