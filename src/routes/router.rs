//! Router component: runs the guard, then matches against the route table.

use super::guard::{self, Navigation};
use super::table::{RouteMatch, RouteTable};
use crate::session::SessionState;

/// Result of one navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// Path as requested, with query and fragment removed.
    pub requested: String,
    pub decision: Navigation,
    /// Path the transition ended at after applying the guard.
    pub path: String,
    /// `None` when `path` has no route.
    pub matched: Option<RouteMatch>,
}

impl Transition {
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.matched.is_none()
    }

    /// Name of the page being shown.
    #[must_use]
    pub fn route_name(&self) -> Option<&str> {
        self.matched.as_ref().and_then(RouteMatch::name)
    }
}

#[derive(Debug, Clone)]
pub struct Router {
    table: RouteTable,
    current: Option<Transition>,
}

impl Router {
    pub fn new(table: RouteTable) -> Self {
        Self { table, current: None }
    }

    /// Last completed transition.
    #[must_use]
    pub fn current(&self) -> Option<&Transition> {
        self.current.as_ref()
    }

    /// Navigate to `location` given the caller's session state.
    pub fn navigate(&mut self, location: &str, session: SessionState) -> &Transition {
        let requested = location_path(location);
        let decision = guard::evaluate(&requested, session);
        let path = decision.target(&requested).to_owned();
        let matched = self.table.resolve(&path);

        tracing::debug!(
            %requested,
            %path,
            ?decision,
            found = matched.is_some(),
            "route transition"
        );

        self.current.insert(Transition { requested, decision, path, matched })
    }

    /// Navigate to the route called `name`; `None` if no such route exists.
    pub fn navigate_to_name(&mut self, name: &str, session: SessionState) -> Option<&Transition> {
        let path = self.table.path_for(name)?;
        Some(self.navigate(&path, session))
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(RouteTable::admin())
    }
}

/// Reduce a location to its path: drop `?query`/`#fragment`, default to `/`
/// and ensure a leading `/`.
fn location_path(location: &str) -> String {
    let path = location.find(&['?', '#'][..]).map_or(location, |i| &location[..i]);
    if path.starts_with('/') {
        path.to_owned()
    } else {
        format!("/{path}")
    }
}

#[cfg(test)]
#[path = "router_test.rs"]
mod router_test;
