pub mod bar;
pub mod children;
pub mod compose;
pub mod container;
pub mod events;
mod panel;
pub mod router;
pub mod state;

pub use bar::{TabBar, TabButton};
pub use children::classifier::{classify, ChildRole, Classification};
pub use children::node::{
    ChildBody, ChildProps, ChildWidget, Slot, TabsChild, TabsChildren, WidgetKind, ROUTER_OUTLET,
    TAB, TAB_BAR,
};
pub use compose::composer::{
    compose, BarInjection, ComposedBar, ComposedChild, ComposedOutlet, ComposedTree, TabsCallbacks,
    TabsRefs,
};
pub use compose::error::TabsStructureError;
pub use container::Tabs;
pub use events::TabChangeEvent;
pub use router::{use_router, PageTransition, RouteInfo, RouterContext, RouterProvider};
pub use state::context::{try_use_tabs, use_tabs, TabsContext};
pub use state::refs::{OutletBinding, OutletRef, TabBarBinding, TabBarRef};
