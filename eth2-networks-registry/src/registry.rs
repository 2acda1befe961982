use crate::{
    errors::{NetworkError, Result},
    params::{self, NetworkParameters, SLOTS_PER_EPOCH, SLOT_DURATION_SECONDS},
};
use eth2_networks_core::{
    path,
    types::{Epoch, ForkVersion, Network, Slot},
    Clock, SystemClock,
};
use std::time::Duration;
use tracing::{error, trace};

/// Resolves networks to their parameters and estimates protocol time on them.
///
/// The registry itself holds nothing but a [`Clock`]; the parameters live in a
/// process-wide table that is loaded on first use and never mutated, so any
/// number of registries can be used concurrently.
///
/// # Errors
///
/// Every lookup against [`Network::Unknown`] logs the offending value and returns
/// [`NetworkError::UnknownNetwork`]. This signals a misconfigured process, not a
/// transient condition: callers are expected to propagate it and stop.
///
/// # Example
///
/// ```
/// use eth2_networks_core::{types::Network, FixedClock};
/// use eth2_networks_registry::NetworkRegistry;
///
/// # fn main() -> Result<(), eth2_networks_registry::NetworkError> {
/// let registry = NetworkRegistry::with_clock(FixedClock::new(1606824023 + 3600));
///
/// assert_eq!(registry.estimated_current_slot(&Network::Main)?, 300);
/// assert_eq!(registry.estimated_current_epoch(&Network::Main)?, 9);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default)]
pub struct NetworkRegistry<C = SystemClock> {
    clock: C,
}

impl NetworkRegistry<SystemClock> {
    /// A registry reading the system wall clock.
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl<C: Clock> NetworkRegistry<C> {
    /// A registry reading time from `clock`.
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// The clock the `estimated_current_*` methods read.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// The full parameter record of `network`.
    pub fn parameters(&self, network: &Network) -> Result<&'static NetworkParameters> {
        params::lookup(network).ok_or_else(|| {
            error!(network = %network, "undefined network");
            NetworkError::UnknownNetwork(network.to_string())
        })
    }

    pub fn fork_version(&self, network: &Network) -> Result<ForkVersion> {
        self.parameters(network).map(NetworkParameters::fork_version)
    }

    pub fn deposit_contract_address(&self, network: &Network) -> Result<&'static str> {
        self.parameters(network).map(NetworkParameters::deposit_contract_address)
    }

    pub fn min_genesis_time(&self, network: &Network) -> Result<u64> {
        self.parameters(network).map(NetworkParameters::min_genesis_time)
    }

    /// The EIP-2334 path of `relative_path`.
    ///
    /// The same base path is used on every network, so `network` does not take
    /// part in the result and unknown networks are not rejected here.
    pub fn full_path(&self, _network: &Network, relative_path: &str) -> String {
        path::full_path(relative_path)
    }

    /// 12 seconds on every network.
    pub fn slot_duration(&self, network: &Network) -> Duration {
        Duration::from_secs(self.slot_duration_seconds(network))
    }

    /// 32 on every network.
    pub fn slots_per_epoch(&self, network: &Network) -> u64 {
        params::lookup(network).map_or(SLOTS_PER_EPOCH, NetworkParameters::slots_per_epoch)
    }

    fn slot_duration_seconds(&self, network: &Network) -> u64 {
        params::lookup(network)
            .map_or(SLOT_DURATION_SECONDS, NetworkParameters::slot_duration_seconds)
    }

    /// Estimates the slot in progress at Unix time `timestamp`.
    ///
    /// Times before genesis are clamped to slot 0.
    pub fn estimated_slot_at_time(&self, network: &Network, timestamp: i64) -> Result<Slot> {
        let params = self.parameters(network)?;
        let genesis = params.min_genesis_time();
        let slot = match u64::try_from(timestamp) {
            Ok(timestamp) if timestamp >= genesis => {
                (timestamp - genesis) / params.slot_duration_seconds()
            }
            _ => 0,
        };
        trace!(network = %network, timestamp, slot, "estimated slot");
        Ok(Slot::new(slot))
    }

    /// Estimates the slot in progress now, according to the registry's clock.
    pub fn estimated_current_slot(&self, network: &Network) -> Result<Slot> {
        self.estimated_slot_at_time(network, self.clock.now())
    }

    /// The epoch containing `slot`.
    pub fn estimated_epoch_at_slot(&self, network: &Network, slot: Slot) -> Epoch {
        Epoch::new((slot / self.slots_per_epoch(network)).as_u64())
    }

    /// Estimates the epoch in progress now, according to the registry's clock.
    pub fn estimated_current_epoch(&self, network: &Network) -> Result<Epoch> {
        let slot = self.estimated_current_slot(network)?;
        Ok(self.estimated_epoch_at_slot(network, slot))
    }

    /// The first slot of `epoch`.
    pub fn epoch_start_slot(&self, network: &Network, epoch: Epoch) -> Slot {
        Slot::new(epoch.as_u64().saturating_mul(self.slots_per_epoch(network)))
    }

    /// The Unix time at which `slot` starts.
    pub fn slot_start_time(&self, network: &Network, slot: Slot) -> Result<u64> {
        let params = self.parameters(network)?;
        Ok(slot
            .as_u64()
            .saturating_mul(params.slot_duration_seconds())
            .saturating_add(params.min_genesis_time()))
    }
}
