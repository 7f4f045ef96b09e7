//! Child-node model for the tabs container.
//!
//! Callers hand the container an ordered sequence of `TabsChild` nodes.
//! Each leaf carries a `WidgetKind` role marker, a small props bag and an
//! opaque render closure; `Group` is the transparent pass-through wrapper
//! used to pre-group an outlet/bar pair positionally.

use std::fmt;
use std::sync::Arc;

use leptos::prelude::*;

use crate::panel::TabPanel;
use crate::state::context::TabsContext;

/// Role marker of a child node: exact identity against one of the known
/// kinds below, or a capability flag carried by a custom kind.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct WidgetKind {
    pub tag: &'static str,
    pub is_router_outlet: bool,
    pub is_tab_bar: bool,
}

impl WidgetKind {
    pub const fn plain(tag: &'static str) -> Self {
        Self {
            tag,
            is_router_outlet: false,
            is_tab_bar: false,
        }
    }
}

pub const ROUTER_OUTLET: WidgetKind = WidgetKind {
    tag: "router-outlet",
    is_router_outlet: true,
    is_tab_bar: false,
};

pub const TAB: WidgetKind = WidgetKind::plain("tab");

pub const TAB_BAR: WidgetKind = WidgetKind {
    tag: "tab-bar",
    is_router_outlet: false,
    is_tab_bar: true,
};

/// Where the selector bar sits in the static two-region layout.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Slot {
    Top,
    Bottom,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChildProps {
    pub slot: Option<Slot>,
    /// Tab id this node belongs to; set for `TAB` panels.
    pub tab: Option<String>,
    /// Host element id, registered on the outlet boundary for DOM access.
    pub id: Option<String>,
}

/// Opaque render closure of a child node. Construction is lazy; nothing is
/// rendered until the composed tree is mounted.
#[derive(Clone)]
pub struct ChildBody(Arc<dyn Fn() -> AnyView + Send + Sync>);

impl ChildBody {
    pub fn new<F, V>(body: F) -> Self
    where
        F: Fn() -> V + Send + Sync + 'static,
        V: IntoAny + 'static,
    {
        Self(Arc::new(move || body().into_any()))
    }

    pub fn run(&self) -> AnyView {
        (self.0)()
    }
}

impl Default for ChildBody {
    fn default() -> Self {
        Self(Arc::new(|| ().into_any()))
    }
}

impl<F, V> From<F> for ChildBody
where
    F: Fn() -> V + Send + Sync + 'static,
    V: IntoAny + 'static,
{
    fn from(body: F) -> Self {
        Self::new(body)
    }
}

impl fmt::Debug for ChildBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ChildBody")
    }
}

#[derive(Clone, Debug)]
pub struct ChildWidget {
    pub kind: WidgetKind,
    pub props: ChildProps,
    pub body: ChildBody,
}

/// A node of the caller-supplied child tree. Nodes are immutable snapshots;
/// the container only ever produces derived values referencing them.
#[derive(Clone, Debug)]
pub enum TabsChild {
    Widget(ChildWidget),
    Group(Vec<TabsChild>),
}

impl TabsChild {
    pub fn widget(kind: WidgetKind, props: ChildProps, body: impl Into<ChildBody>) -> Self {
        Self::Widget(ChildWidget {
            kind,
            props,
            body: body.into(),
        })
    }

    /// Content region driven by the external router.
    pub fn router_outlet(body: impl Into<ChildBody>) -> Self {
        Self::widget(ROUTER_OUTLET, ChildProps::default(), body)
    }

    /// Plain tab panel: local tab switching, no router involvement.
    pub fn tab(tab: impl Into<String>, body: impl Into<ChildBody>) -> Self {
        let tab = tab.into();
        let body = body.into();
        let panel = {
            let tab = tab.clone();
            ChildBody::new(move || view! { <TabPanel tab=tab.clone() body=body.clone() /> })
        };
        Self::Widget(ChildWidget {
            kind: TAB,
            props: ChildProps {
                tab: Some(tab),
                ..ChildProps::default()
            },
            body: panel,
        })
    }

    pub fn tab_bar(body: impl Into<ChildBody>) -> Self {
        Self::widget(TAB_BAR, ChildProps::default(), body)
    }

    /// An arbitrary node with no navigation role; passed through untouched.
    pub fn node(body: impl Into<ChildBody>) -> Self {
        Self::widget(WidgetKind::plain("node"), ChildProps::default(), body)
    }

    /// Transparent grouping construct. Only the fixed positions 0 (outlet
    /// candidate) and 1 (bar candidate) are inspected during classification.
    pub fn group(children: Vec<TabsChild>) -> Self {
        Self::Group(children)
    }

    pub fn with_slot(mut self, slot: Slot) -> Self {
        if let Self::Widget(widget) = &mut self {
            widget.props.slot = Some(slot);
        }
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        if let Self::Widget(widget) = &mut self {
            widget.props.id = Some(id.into());
        }
        self
    }

    pub(crate) fn render(&self) -> AnyView {
        match self {
            Self::Widget(widget) => widget.body.run(),
            Self::Group(children) => children
                .iter()
                .map(Self::render)
                .collect::<Vec<_>>()
                .into_any(),
        }
    }
}

/// Children of the container: either a direct node sequence, or a function
/// of the live tab state for render-time conditional layout.
#[derive(Clone)]
pub enum TabsChildren {
    Nodes(Vec<TabsChild>),
    Build(Arc<dyn Fn(TabsContext) -> Vec<TabsChild> + Send + Sync>),
}

impl TabsChildren {
    pub fn nodes(nodes: Vec<TabsChild>) -> Self {
        Self::Nodes(nodes)
    }

    pub fn build(build: impl Fn(TabsContext) -> Vec<TabsChild> + Send + Sync + 'static) -> Self {
        Self::Build(Arc::new(build))
    }

    pub fn resolve(&self, state: TabsContext) -> Vec<TabsChild> {
        match self {
            Self::Nodes(nodes) => nodes.clone(),
            Self::Build(build) => build(state),
        }
    }
}

impl From<Vec<TabsChild>> for TabsChildren {
    fn from(nodes: Vec<TabsChild>) -> Self {
        Self::Nodes(nodes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders_set_kinds() {
        let outlet = TabsChild::router_outlet(|| ());
        let bar = TabsChild::tab_bar(|| ());
        let tab = TabsChild::tab("home", || ());

        let TabsChild::Widget(outlet) = outlet else {
            panic!("expected widget")
        };
        assert_eq!(outlet.kind, ROUTER_OUTLET);

        let TabsChild::Widget(bar) = bar else {
            panic!("expected widget")
        };
        assert_eq!(bar.kind, TAB_BAR);

        let TabsChild::Widget(tab) = tab else {
            panic!("expected widget")
        };
        assert_eq!(tab.kind, TAB);
        assert_eq!(tab.props.tab.as_deref(), Some("home"));
    }

    #[test]
    fn test_with_slot_and_id() {
        let bar = TabsChild::tab_bar(|| ()).with_slot(Slot::Bottom);
        let outlet = TabsChild::router_outlet(|| ()).with_id("main-outlet");

        let TabsChild::Widget(bar) = bar else {
            panic!("expected widget")
        };
        assert_eq!(bar.props.slot, Some(Slot::Bottom));

        let TabsChild::Widget(outlet) = outlet else {
            panic!("expected widget")
        };
        assert_eq!(outlet.props.id.as_deref(), Some("main-outlet"));
    }

    #[test]
    fn test_children_resolve_nodes() {
        let children = TabsChildren::from(vec![
            TabsChild::router_outlet(|| ()),
            TabsChild::tab_bar(|| ()),
        ]);
        assert_eq!(children.resolve(TabsContext::new()).len(), 2);
    }

    #[test]
    fn test_children_build_receives_live_state() {
        let children = TabsChildren::build(|state| {
            // No bar has been bound yet, so the handle reports no active tab
            // and rejects selection.
            assert_eq!(state.active_tab_untracked(), None);
            assert!(!state.select_tab("home"));
            vec![TabsChild::tab_bar(|| ())]
        });
        assert_eq!(children.resolve(TabsContext::new()).len(), 1);
    }
}
