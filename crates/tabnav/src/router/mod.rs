//! Router collaborator boundary.
//!
//! The actual route matching and history handling live in a routing crate;
//! this module only defines what the container consumes: presence, a route
//! snapshot, and the transition-aware mount point.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

/// Snapshot of the router's current position.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteInfo {
    pub pathname: String,
    pub search: String,
    pub tab: Option<String>,
    pub last_pathname: Option<String>,
}

#[derive(Clone, Copy)]
pub struct RouterContext {
    route_info: RwSignal<RouteInfo>,
    linked: bool,
}

impl RouterContext {
    pub fn new(initial: RouteInfo) -> Self {
        Self {
            route_info: RwSignal::new(initial),
            linked: true,
        }
    }

    /// A context with no live router behind it; consumers treat it the same
    /// as no context at all.
    pub fn unlinked() -> Self {
        Self {
            route_info: RwSignal::new(RouteInfo::default()),
            linked: false,
        }
    }

    pub fn has_router(&self) -> bool {
        self.linked
    }

    /// Current snapshot, untracked: the transition region owns reacting to
    /// navigation, not the container's composition pass.
    pub fn route_info(&self) -> RouteInfo {
        self.route_info.get_untracked()
    }

    /// The routing collaborator pushes every navigation through here.
    pub fn update_route(&self, route_info: RouteInfo) {
        self.route_info.set(route_info);
    }
}

pub fn use_router() -> Option<RouterContext> {
    use_context::<RouterContext>()
}

/// Registers a router context for the subtree.
#[component]
pub fn RouterProvider(initial: RouteInfo, children: Children) -> impl IntoView {
    provide_context(RouterContext::new(initial));
    children()
}

/// Transition-aware mount point the routed layout wraps its children in.
/// Animation timing belongs to the transition collaborator; this region only
/// carries the route snapshot and the forwarded class.
#[component]
pub fn PageTransition(
    class: Option<String>,
    route_info: RouteInfo,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=class.unwrap_or_else(|| "page-transition".to_string())
            data-pathname=route_info.pathname
        >
            {children()}
        </div>
    }
}
