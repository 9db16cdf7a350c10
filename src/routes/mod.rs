//! Page routing for the admin panel.
//!
//! ARCHITECTURE
//! ============
//! `table` holds the immutable route tree, `guard` is the login gate
//! evaluated before each transition, and `router` applies the guard and
//! matches the resulting path.

pub mod guard;
pub mod router;
pub mod table;

pub use guard::{HOME_ROUTE, LOGIN_ROUTE, Navigation, REGISTER_ROUTE};
pub use router::{Router, Transition};
pub use table::{RouteMatch, RouteRecord, RouteTable};
