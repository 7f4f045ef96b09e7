//! Render composition: invariant enforcement and the choice between the
//! three layout modes (plain tab group, router-integrated, static).
//!
//! The composer is pure: it turns the classified child sequence into a
//! `ComposedTree` value, which the container then renders. Derived nodes are
//! the original widgets paired with the cross-cutting values (`TabBarRef`,
//! `OutletRef`, forwarded callbacks) the hosts inject via context.

use leptos::prelude::*;

use crate::children::classifier::{ChildRole, Classification};
use crate::children::node::{ChildWidget, Slot, TabsChild};
use crate::events::TabChangeEvent;
use crate::router::RouteInfo;
use crate::state::context::TabsContext;
use crate::state::refs::{OutletRef, TabBarRef};

use super::error::TabsStructureError;

/// The two handles one container instance injects into its derived nodes.
#[derive(Clone, Copy)]
pub struct TabsRefs {
    pub bar_ref: TabBarRef,
    pub outlet_ref: OutletRef,
}

impl TabsRefs {
    pub fn new() -> Self {
        Self {
            bar_ref: TabBarRef::new(),
            outlet_ref: OutletRef::new(),
        }
    }
}

impl Default for TabsRefs {
    fn default() -> Self {
        Self::new()
    }
}

/// Caller-supplied change callbacks, forwarded to the bar only when present.
#[derive(Clone, Copy, Default)]
pub struct TabsCallbacks {
    pub on_tabs_will_change: Option<Callback<TabChangeEvent>>,
    pub on_tabs_did_change: Option<Callback<TabChangeEvent>>,
}

/// Cross-cutting props of the derived selector-bar node. An absent callback
/// stays absent so a handler set on the bar itself is left intact.
#[derive(Clone, Copy, Debug)]
pub struct BarInjection {
    pub bar_ref: TabBarRef,
    pub router_outlet_ref: OutletRef,
    pub on_tabs_will_change: Option<Callback<TabChangeEvent>>,
    pub on_tabs_did_change: Option<Callback<TabChangeEvent>>,
}

#[derive(Clone, Debug)]
pub struct ComposedBar {
    pub widget: ChildWidget,
    pub injection: BarInjection,
}

impl ComposedBar {
    pub fn slot(&self) -> Option<Slot> {
        self.widget.props.slot
    }

    /// Static mode places the bar before the content region iff this holds.
    pub fn is_top(&self) -> bool {
        self.slot() == Some(Slot::Top)
    }

    /// Static mode places the bar after the content region iff this holds.
    /// Both checks are independent; a bar with no slot lands in neither
    /// position, which is defined behavior.
    pub fn is_bottom(&self) -> bool {
        self.slot() == Some(Slot::Bottom)
    }
}

#[derive(Clone, Debug)]
pub struct ComposedOutlet {
    pub widget: ChildWidget,
    pub outlet_ref: OutletRef,
}

#[derive(Clone, Debug)]
pub enum ComposedChild {
    SelectorBar(ComposedBar),
    Outlet(ComposedOutlet),
    Passthrough(TabsChild),
}

/// Output of a successful composition.
#[derive(Clone, Debug)]
pub enum ComposedTree {
    /// Plain tab group: children render as-is in the fixed host layout, no
    /// router involvement regardless of router presence.
    TabGroup {
        class: Option<String>,
        state: TabsContext,
        bar: BarInjection,
        children: Vec<TabsChild>,
    },
    /// Router-integrated: the re-walked sequence inside the page-transition
    /// region, with the shared state exposed to the whole subtree.
    Routed {
        class: Option<String>,
        state: TabsContext,
        route_info: RouteInfo,
        children: Vec<ComposedChild>,
    },
    /// Router-absent two-region layout; no transition wrapper, no context.
    Static {
        class: Option<String>,
        bar: ComposedBar,
        outlet: ComposedOutlet,
    },
}

pub fn compose(
    children: &[TabsChild],
    classification: &Classification,
    state: TabsContext,
    refs: TabsRefs,
    router: Option<RouteInfo>,
    class: Option<String>,
    callbacks: &TabsCallbacks,
) -> Result<ComposedTree, TabsStructureError> {
    if classification.outlet.is_none() && !classification.has_plain_tab_group {
        return Err(TabsStructureError::MissingNavigationTarget);
    }
    if classification.outlet.is_some() && classification.has_plain_tab_group {
        return Err(TabsStructureError::AmbiguousNavigationTarget);
    }
    let Some(bar_widget) = classification.selector_bar.as_ref() else {
        return Err(TabsStructureError::MissingSelectorBar);
    };

    let injection = BarInjection {
        bar_ref: refs.bar_ref,
        router_outlet_ref: refs.outlet_ref,
        on_tabs_will_change: callbacks.on_tabs_will_change,
        on_tabs_did_change: callbacks.on_tabs_did_change,
    };

    if classification.has_plain_tab_group {
        return Ok(ComposedTree::TabGroup {
            class,
            state,
            bar: injection,
            children: children.to_vec(),
        });
    }

    let Some(outlet_widget) = classification.outlet.as_ref() else {
        // Unreachable after the checks above; kept as a structural error
        // rather than a panic path.
        return Err(TabsStructureError::MissingNavigationTarget);
    };

    let bar = ComposedBar {
        widget: bar_widget.clone(),
        injection,
    };
    let outlet = ComposedOutlet {
        widget: outlet_widget.clone(),
        outlet_ref: refs.outlet_ref,
    };

    match router {
        Some(route_info) => Ok(ComposedTree::Routed {
            class,
            state,
            route_info,
            children: substitute(children, &bar, &outlet),
        }),
        None => Ok(ComposedTree::Static { class, bar, outlet }),
    }
}

/// Re-walk the original sequence, swapping every role position for the
/// classified winner's derived node and passing everything else through. A
/// matched group expands into its matched parts in positional order.
fn substitute(
    children: &[TabsChild],
    bar: &ComposedBar,
    outlet: &ComposedOutlet,
) -> Vec<ComposedChild> {
    let mut out = Vec::with_capacity(children.len());
    for child in children {
        match child {
            TabsChild::Widget(widget) => match widget.role() {
                ChildRole::SelectorBar => out.push(ComposedChild::SelectorBar(bar.clone())),
                ChildRole::Outlet => out.push(ComposedChild::Outlet(outlet.clone())),
                _ => out.push(ComposedChild::Passthrough(child.clone())),
            },
            TabsChild::Group(items) => {
                let outlet_at_first = matches!(
                    items.first(),
                    Some(TabsChild::Widget(widget)) if widget.role() == ChildRole::Outlet
                );
                let bar_at_second = matches!(
                    items.get(1),
                    Some(TabsChild::Widget(widget)) if widget.role() == ChildRole::SelectorBar
                );
                if !outlet_at_first && !bar_at_second {
                    out.push(ComposedChild::Passthrough(child.clone()));
                    continue;
                }
                if outlet_at_first {
                    out.push(ComposedChild::Outlet(outlet.clone()));
                }
                if bar_at_second {
                    out.push(ComposedChild::SelectorBar(bar.clone()));
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::children::classifier::classify;

    fn compose_children(
        children: Vec<TabsChild>,
        router: Option<RouteInfo>,
        callbacks: TabsCallbacks,
    ) -> Result<ComposedTree, TabsStructureError> {
        let classification = classify(&children);
        compose(
            &children,
            &classification,
            TabsContext::new(),
            TabsRefs::new(),
            router,
            None,
            &callbacks,
        )
    }

    fn outlet_and_bar() -> Vec<TabsChild> {
        vec![TabsChild::router_outlet(|| ()), TabsChild::tab_bar(|| ())]
    }

    #[test]
    fn test_router_present_composes_routed_mode() {
        let tree = compose_children(
            outlet_and_bar(),
            Some(RouteInfo::default()),
            TabsCallbacks::default(),
        )
        .unwrap();

        let ComposedTree::Routed { children, .. } = tree else {
            panic!("expected routed mode");
        };
        assert_eq!(children.len(), 2);
        assert!(matches!(children[0], ComposedChild::Outlet(_)));
        assert!(matches!(children[1], ComposedChild::SelectorBar(_)));
    }

    #[test]
    fn test_router_absent_composes_static_mode() {
        let tree = compose_children(outlet_and_bar(), None, TabsCallbacks::default()).unwrap();
        assert!(matches!(tree, ComposedTree::Static { .. }));
    }

    #[test]
    fn test_tab_group_wins_regardless_of_router() {
        let children = vec![TabsChild::tab("home", || ()), TabsChild::tab_bar(|| ())];
        let tree = compose_children(
            children,
            Some(RouteInfo::default()),
            TabsCallbacks::default(),
        )
        .unwrap();
        assert!(matches!(tree, ComposedTree::TabGroup { .. }));
    }

    #[test]
    fn test_missing_navigation_target() {
        let children = vec![TabsChild::tab_bar(|| ()), TabsChild::node(|| ())];
        assert_eq!(
            compose_children(children, None, TabsCallbacks::default()).unwrap_err(),
            TabsStructureError::MissingNavigationTarget
        );
    }

    #[test]
    fn test_ambiguous_navigation_target() {
        let children = vec![
            TabsChild::router_outlet(|| ()),
            TabsChild::tab("home", || ()),
            TabsChild::tab_bar(|| ()),
        ];
        assert_eq!(
            compose_children(children, None, TabsCallbacks::default()).unwrap_err(),
            TabsStructureError::AmbiguousNavigationTarget
        );
    }

    #[test]
    fn test_missing_selector_bar() {
        let children = vec![TabsChild::router_outlet(|| ())];
        assert_eq!(
            compose_children(children, None, TabsCallbacks::default()).unwrap_err(),
            TabsStructureError::MissingSelectorBar
        );
    }

    #[test]
    fn test_cross_role_ambiguity_beats_missing_bar() {
        // Both defects at once: the ambiguity check runs first.
        let children = vec![TabsChild::router_outlet(|| ()), TabsChild::tab("a", || ())];
        assert_eq!(
            compose_children(children, None, TabsCallbacks::default()).unwrap_err(),
            TabsStructureError::AmbiguousNavigationTarget
        );
    }

    #[test]
    fn test_static_slot_positions() {
        for (slot, top, bottom) in [
            (Some(Slot::Top), true, false),
            (Some(Slot::Bottom), false, true),
            (None, false, false),
        ] {
            let mut bar = TabsChild::tab_bar(|| ());
            if let Some(slot) = slot {
                bar = bar.with_slot(slot);
            }
            let children = vec![TabsChild::router_outlet(|| ()), bar];
            let tree = compose_children(children, None, TabsCallbacks::default()).unwrap();
            let ComposedTree::Static { bar, .. } = tree else {
                panic!("expected static mode");
            };
            assert_eq!(bar.is_top(), top);
            assert_eq!(bar.is_bottom(), bottom);
        }
    }

    #[test]
    fn test_callbacks_forwarded_only_when_supplied() {
        let tree = compose_children(
            outlet_and_bar(),
            Some(RouteInfo::default()),
            TabsCallbacks::default(),
        )
        .unwrap();
        let ComposedTree::Routed { children, .. } = tree else {
            panic!("expected routed mode");
        };
        let Some(ComposedChild::SelectorBar(bar)) = children
            .iter()
            .find(|child| matches!(child, ComposedChild::SelectorBar(_)))
        else {
            panic!("expected a composed bar");
        };
        assert!(bar.injection.on_tabs_will_change.is_none());
        assert!(bar.injection.on_tabs_did_change.is_none());

        let callbacks = TabsCallbacks {
            on_tabs_will_change: Some(Callback::new(|_event: TabChangeEvent| ())),
            on_tabs_did_change: None,
        };
        let tree =
            compose_children(outlet_and_bar(), Some(RouteInfo::default()), callbacks).unwrap();
        let ComposedTree::Routed { children, .. } = tree else {
            panic!("expected routed mode");
        };
        let Some(ComposedChild::SelectorBar(bar)) = children
            .iter()
            .find(|child| matches!(child, ComposedChild::SelectorBar(_)))
        else {
            panic!("expected a composed bar");
        };
        assert!(bar.injection.on_tabs_will_change.is_some());
        assert!(bar.injection.on_tabs_did_change.is_none());
    }

    #[test]
    fn test_plain_children_pass_through_in_routed_mode() {
        let children = vec![
            TabsChild::router_outlet(|| ()),
            TabsChild::node(|| ()),
            TabsChild::tab_bar(|| ()),
        ];
        let tree = compose_children(
            children,
            Some(RouteInfo::default()),
            TabsCallbacks::default(),
        )
        .unwrap();
        let ComposedTree::Routed { children, .. } = tree else {
            panic!("expected routed mode");
        };
        assert_eq!(children.len(), 3);
        assert!(matches!(children[1], ComposedChild::Passthrough(_)));
    }

    #[test]
    fn test_group_expands_into_both_derived_parts() {
        let children = vec![TabsChild::group(vec![
            TabsChild::router_outlet(|| ()),
            TabsChild::tab_bar(|| ()),
        ])];
        let tree = compose_children(
            children,
            Some(RouteInfo::default()),
            TabsCallbacks::default(),
        )
        .unwrap();
        let ComposedTree::Routed { children, .. } = tree else {
            panic!("expected routed mode");
        };
        assert_eq!(children.len(), 2);
        assert!(matches!(children[0], ComposedChild::Outlet(_)));
        assert!(matches!(children[1], ComposedChild::SelectorBar(_)));
    }

    #[test]
    fn test_duplicate_bar_positions_render_the_winner() {
        let children = vec![
            TabsChild::router_outlet(|| ()),
            TabsChild::tab_bar(|| ()).with_id("first"),
            TabsChild::tab_bar(|| ()).with_id("second"),
        ];
        let tree = compose_children(
            children,
            Some(RouteInfo::default()),
            TabsCallbacks::default(),
        )
        .unwrap();
        let ComposedTree::Routed { children, .. } = tree else {
            panic!("expected routed mode");
        };
        for child in &children {
            if let ComposedChild::SelectorBar(bar) = child {
                assert_eq!(bar.widget.props.id.as_deref(), Some("second"));
            }
        }
    }

    #[test]
    fn test_route_info_snapshot_is_carried() {
        let route = RouteInfo {
            pathname: "/app/home".to_string(),
            search: String::new(),
            tab: Some("home".to_string()),
            last_pathname: None,
        };
        let tree =
            compose_children(outlet_and_bar(), Some(route.clone()), TabsCallbacks::default())
                .unwrap();
        let ComposedTree::Routed { route_info, .. } = tree else {
            panic!("expected routed mode");
        };
        assert_eq!(route_info, route);
    }
}
