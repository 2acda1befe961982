use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use strum::EnumString;

/// A beacon chain network.
///
/// The set of supported networks is closed. Any other tag parses into
/// [`Network::Unknown`], which keeps the raw input so that lookups against it can
/// report exactly what was asked for.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, EnumString, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Network {
    /// The Pyrmont test network.
    #[strum(serialize = "pyrmont")]
    Pyrmont,
    /// The Prater test network.
    #[strum(serialize = "prater")]
    Prater,
    /// The main network.
    #[strum(serialize = "mainnet")]
    Main,
    /// The dev network.
    #[strum(serialize = "devnet")]
    Dev,
    /// Anything that is not one of the tags above.
    ///
    /// Build it with [`parse_network`] or `Network::from(String)`, which never
    /// wrap a known tag. A hand-built `Unknown("mainnet")` is brought back to
    /// [`Network::Main`] by [`Network::normalize`].
    #[strum(default)]
    Unknown(String),
}

/// Returns the network identified by `tag`.
///
/// Only exact, case-sensitive matches of `pyrmont`, `prater`, `mainnet` and `devnet`
/// resolve to a known network; everything else, the empty string included, yields
/// [`Network::Unknown`]. Resolution never fails here: using an unknown network is
/// reported by the registry accessors.
pub fn parse_network(tag: &str) -> Network {
    Network::from_str(tag).unwrap_or_else(|_| Network::Unknown(tag.to_owned()))
}

impl Network {
    /// All known networks, in declaration order.
    pub const KNOWN: [Network; 4] = [Network::Pyrmont, Network::Prater, Network::Main, Network::Dev];

    /// See [`parse_network`].
    pub fn from_tag(tag: &str) -> Self {
        parse_network(tag)
    }

    /// The network's tag, or the raw value for an unknown network.
    pub fn as_str(&self) -> &str {
        match self {
            Network::Pyrmont => "pyrmont",
            Network::Prater => "prater",
            Network::Main => "mainnet",
            Network::Dev => "devnet",
            Network::Unknown(raw) => raw,
        }
    }

    /// Resolves an `Unknown` that wraps a known tag to that network.
    #[must_use]
    pub fn normalize(self) -> Self {
        match self {
            Network::Unknown(raw) => Network::from(raw),
            known => known,
        }
    }

    /// Whether this is one of the supported networks.
    pub fn is_known(&self) -> bool {
        !matches!(self, Network::Unknown(_))
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Network {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<String> for Network {
    fn from(tag: String) -> Self {
        match Network::from_str(&tag) {
            Ok(Network::Unknown(_)) | Err(_) => Network::Unknown(tag),
            Ok(known) => known,
        }
    }
}

impl From<Network> for String {
    fn from(network: Network) -> Self {
        match network {
            Network::Unknown(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}
