use thiserror::Error;

/// Structural defects in the caller-supplied child tree. All three are
/// fatal: the composer does no partial work and the container surfaces them
/// out of the render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TabsStructureError {
    #[error("tabs must contain a router outlet or a tab")]
    MissingNavigationTarget,
    #[error("tabs cannot contain a router outlet and a tab at the same time")]
    AmbiguousNavigationTarget,
    #[error("tabs needs a tab bar")]
    MissingSelectorBar,
}
