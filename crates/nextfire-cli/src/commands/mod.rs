//! Command implementations for the nextfire CLI.
//!
//! Each command lives in its own module and exposes an `execute` function
//! taking the parsed arguments and the resolved [`Context`].

pub mod build;
pub mod check;
pub mod descriptor;
pub mod entrypoint;
pub mod package;
pub mod routes;
pub(crate) mod utils;

pub use utils::Context;

// Re-export execute functions for convenience
pub use build::execute as build_execute;
pub use check::execute as check_execute;
pub use descriptor::execute as descriptor_execute;
pub use entrypoint::execute as entrypoint_execute;
pub use package::execute as package_execute;
pub use routes::execute as routes_execute;
