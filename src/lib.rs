#![warn(missing_debug_implementations, rust_2018_idioms, unreachable_pub)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! # eth2-networks
//!
//! Static parameters of the supported beacon chain networks (fork version,
//! deposit contract address, genesis time, slot timing) and estimation of
//! protocol time from wall-clock time.
//!
//! # Quickstart
//!
//! A prelude is provided which imports all the important things for you.
//!
//! ```
//! use eth2_networks::prelude::*;
//!
//! # fn main() -> Result<(), NetworkError> {
//! let network = parse_network("prater");
//! let registry = NetworkRegistry::with_clock(FixedClock::new(1616508000 + 24));
//!
//! assert_eq!(registry.fork_version(&network)?, [0x00, 0x00, 0x10, 0x20]);
//! assert_eq!(registry.estimated_current_slot(&network)?, Slot::new(2));
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! * [`core`]: network identifiers, `Slot` and `Epoch`, clocks and EIP-2334 paths
//! * [`registry`]: the per-network parameter table, its accessors and the slot and
//!   epoch estimators
//!
//! # Unknown networks
//!
//! Parsing never fails: an unsupported tag becomes [`core::types::Network::Unknown`].
//! Every parameter lookup against it returns
//! [`registry::NetworkError::UnknownNetwork`], which should abort startup.

/// Network identifiers, protocol time units and time sources
pub mod core {
    pub use eth2_networks_core::*;
}

/// Network parameters and slot/epoch estimation
pub mod registry {
    pub use eth2_networks_registry::*;
}

/// Easy import of frequently used type definitions and functions
pub mod prelude {
    pub use eth2_networks_core::path::BASE_EIP2334_PATH;
    pub use eth2_networks_registry::*;
}
