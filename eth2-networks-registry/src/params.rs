use eth2_networks_core::types::{parse_network, serde_helpers::fork_version, ForkVersion, Network};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, time::Duration};

const NETWORKS_JSON: &str = include_str!("./networks/networks.json");

/// Duration of a slot, in seconds, for every network in the table.
pub const SLOT_DURATION_SECONDS: u64 = 12;

/// Number of slots in an epoch, for every network in the table.
pub const SLOTS_PER_EPOCH: u64 = 32;

static NETWORKS: Lazy<HashMap<Network, NetworkParameters>> = Lazy::new(|| {
    let networks: HashMap<Network, NetworkParameters> = serde_json::from_str(NETWORKS_JSON)
        .unwrap_or_else(|err| panic!("embedded network table is malformed: {err}"));
    tracing::trace!(networks = networks.len(), "loaded network parameters");
    networks
});

/// The static protocol parameters of a beacon chain network.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkParameters {
    #[serde(with = "fork_version")]
    fork_version: ForkVersion,
    deposit_contract_address: String,
    min_genesis_time: u64,
    #[serde(default = "default_slot_duration_seconds")]
    slot_duration_seconds: u64,
    #[serde(default = "default_slots_per_epoch")]
    slots_per_epoch: u64,
}

fn default_slot_duration_seconds() -> u64 {
    SLOT_DURATION_SECONDS
}

fn default_slots_per_epoch() -> u64 {
    SLOTS_PER_EPOCH
}

impl NetworkParameters {
    /// The 4-byte genesis fork version.
    pub fn fork_version(&self) -> ForkVersion {
        self.fork_version
    }

    /// The deposit contract address, exactly as published (checksum casing included).
    pub fn deposit_contract_address(&self) -> &str {
        &self.deposit_contract_address
    }

    /// The Unix timestamp of slot 0.
    pub fn min_genesis_time(&self) -> u64 {
        self.min_genesis_time
    }

    pub fn slot_duration(&self) -> Duration {
        Duration::from_secs(self.slot_duration_seconds)
    }

    pub fn slot_duration_seconds(&self) -> u64 {
        self.slot_duration_seconds
    }

    pub fn slots_per_epoch(&self) -> u64 {
        self.slots_per_epoch
    }
}

/// Returns the parameters of `network`, if it is in the table.
///
/// An `Unknown` holding a known tag resolves to that tag's network.
pub(crate) fn lookup(network: &Network) -> Option<&'static NetworkParameters> {
    match network {
        Network::Unknown(raw) => match parse_network(raw) {
            Network::Unknown(_) => None,
            known => NETWORKS.get(&known),
        },
        known => NETWORKS.get(known),
    }
}
