//! Library side of the `drillcheck` command: run configuration, dataset
//! loading, and rule dispatch.

pub mod config;
pub mod logging;
pub mod pipeline;
pub mod store;
