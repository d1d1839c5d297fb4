//! Public surface for the `microstream-node` crate.
//!
//! Exposes the router builder, config and route registry so that external
//! crates (e.g. the conformance test suite) can spin up an in-process node
//! without spawning a subprocess.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod handlers;
pub mod router;
pub mod routes;

pub use config::NodeConfig;
pub use dispatch::{Dispatcher, Reply};
pub use router::{build_router, build_router_with};
pub use routes::{RequestContext, RouteHandler, RouteTable};
