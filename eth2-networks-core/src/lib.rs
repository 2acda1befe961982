#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code, rustdoc::broken_intra_doc_links)]
//! Beacon chain data types and time sources.
//!
//! This library provides the identifiers of the supported beacon chain networks,
//! the `Slot` and `Epoch` units of the proof-of-stake protocol, and the [`Clock`]
//! abstraction used to turn wall-clock time into protocol time.
//!
//! ## Parsing a network
//!
//! Network tags are matched exactly. Anything else is kept as an
//! [`Network::Unknown`](types::Network::Unknown) sentinel so that the failure can be reported, with the
//! offending value, wherever the network is first used.
//!
//! ```rust
//! use eth2_networks_core::types::{parse_network, Network};
//!
//! assert_eq!(parse_network("mainnet"), Network::Main);
//! assert_eq!(parse_network("Mainnet"), Network::Unknown("Mainnet".to_string()));
//! ```
pub mod types;

/// Time sources
pub mod clock;
pub use clock::{Clock, FixedClock, SystemClock};

/// EIP-2334 key derivation paths
pub mod path;
