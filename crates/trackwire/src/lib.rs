//! Top-level facade crate for trackwire.
//!
//! Re-exports core types and the gateway library so users can depend on a single crate.

pub mod core {
    pub use trackwire_core::*;
}

pub mod gateway {
    pub use trackwire_gateway::*;
}
