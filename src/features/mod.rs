//! Domain-level frontend features and their shared logic. Routes import these
//! modules to keep view code focused while API handling stays in dedicated
//! feature areas.

pub(crate) mod auth;
