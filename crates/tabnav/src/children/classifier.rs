//! Child classification: normalizes every child node to one of a closed set
//! of role tags, then folds the sequence into a `Classification`.

use super::node::{ChildWidget, TabsChild, ROUTER_OUTLET, TAB, TAB_BAR};

/// Role of a single child node.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ChildRole {
    Outlet,
    PlainTab,
    SelectorBar,
    Plain,
}

impl ChildWidget {
    /// Single dispatch over identity and capability flags, in rule order:
    /// outlet, plain tab (exact identity only), selector bar, plain.
    pub fn role(&self) -> ChildRole {
        if self.kind == ROUTER_OUTLET || self.kind.is_router_outlet {
            ChildRole::Outlet
        } else if self.kind == TAB {
            ChildRole::PlainTab
        } else if self.kind == TAB_BAR || self.kind.is_tab_bar {
            ChildRole::SelectorBar
        } else {
            ChildRole::Plain
        }
    }
}

/// Per-render classification result; never persisted.
#[derive(Clone, Debug, Default)]
pub struct Classification {
    pub outlet: Option<ChildWidget>,
    pub selector_bar: Option<ChildWidget>,
    pub has_plain_tab_group: bool,
}

impl Classification {
    fn set_outlet(&mut self, widget: &ChildWidget) {
        if self.outlet.is_some() {
            log::warn!("tabs: more than one router outlet among children, the last one wins");
        }
        self.outlet = Some(widget.clone());
    }

    fn set_selector_bar(&mut self, widget: &ChildWidget) {
        if self.selector_bar.is_some() {
            log::warn!("tabs: more than one tab bar among children, the last one wins");
        }
        self.selector_bar = Some(widget.clone());
    }
}

/// Scans the flattened child sequence and reports which nodes play the
/// outlet / selector-bar roles and whether any plain tab is present.
///
/// A `Group` is unwrapped one level at fixed positions: index 0 is tested as
/// an outlet candidate, index 1 as a bar candidate. A group with a different
/// internal order or arity is not matched; that positional assumption is
/// contract. Pure function; invariant checking belongs to the composer.
pub fn classify(children: &[TabsChild]) -> Classification {
    let mut result = Classification::default();
    for child in children {
        match child {
            TabsChild::Widget(widget) => match widget.role() {
                ChildRole::Outlet => result.set_outlet(widget),
                ChildRole::PlainTab => result.has_plain_tab_group = true,
                ChildRole::SelectorBar => result.set_selector_bar(widget),
                ChildRole::Plain => {}
            },
            TabsChild::Group(items) => {
                if let Some(TabsChild::Widget(widget)) = items.first() {
                    if widget.role() == ChildRole::Outlet {
                        result.set_outlet(widget);
                    }
                }
                if let Some(TabsChild::Widget(widget)) = items.get(1) {
                    if widget.role() == ChildRole::SelectorBar {
                        result.set_selector_bar(widget);
                    }
                }
            }
        }
    }
    result
}
