use crate::errors::Result;
use eth2_networks_core::types::{parse_network, Network};

/// Environment variable naming the network the process runs against.
pub const NETWORK_ENV_VAR: &str = "ETH2_NETWORK";

/// Reads the network from the [`NETWORK_ENV_VAR`] environment variable.
///
/// An unsupported value is not rejected here; it resolves to
/// [`Network::Unknown`] and fails at the first parameter lookup.
pub fn network_from_env() -> Result<Network> {
    let tag = std::env::var(NETWORK_ENV_VAR)?;
    Ok(parse_network(&tag))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NetworkError;

    // Single test so that the variable is never mutated concurrently.
    #[test]
    fn reads_network_from_env() {
        std::env::remove_var(NETWORK_ENV_VAR);
        assert!(matches!(network_from_env(), Err(NetworkError::EnvVar(_))));

        std::env::set_var(NETWORK_ENV_VAR, "prater");
        assert_eq!(network_from_env().unwrap(), Network::Prater);

        std::env::set_var(NETWORK_ENV_VAR, "kiln");
        assert_eq!(network_from_env().unwrap(), Network::Unknown("kiln".to_string()));

        #[cfg(unix)]
        {
            use std::{env::VarError, ffi::OsString, os::unix::ffi::OsStringExt};

            std::env::set_var(NETWORK_ENV_VAR, OsString::from_vec(vec![0x6d, 0xff, 0x6e]));
            assert!(matches!(network_from_env(), Err(NetworkError::EnvVar(VarError::NotUnicode(_)))));
        }

        std::env::remove_var(NETWORK_ENV_VAR);
    }
}
