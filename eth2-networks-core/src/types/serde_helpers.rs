//! Some convenient serde helpers

use crate::types::ForkVersion;
use serde::{Deserialize, Deserializer, Serializer};
use thiserror::Error;

/// Error produced when decoding a [`ForkVersion`] from its hex form.
#[derive(Debug, Error)]
pub enum ForkVersionError {
    #[error(transparent)]
    Hex(#[from] hex::FromHexError),
    #[error("fork version must be 4 bytes, got {0}")]
    InvalidLength(usize),
}

/// Decodes a fork version from a hex string, with or without the `0x` prefix.
pub fn parse_fork_version(s: &str) -> Result<ForkVersion, ForkVersionError> {
    let bytes = hex::decode(s.strip_prefix("0x").unwrap_or(s))?;
    let len = bytes.len();
    ForkVersion::try_from(bytes).map_err(|_| ForkVersionError::InvalidLength(len))
}

/// Serde support for [`ForkVersion`] as a `0x`-prefixed hex string.
///
/// Use as `#[serde(with = "fork_version")]`.
pub mod fork_version {
    use super::*;

    pub fn serialize<S>(version: &ForkVersion, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("0x{}", hex::encode(version)))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<ForkVersion, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_fork_version(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Debug, Serialize, Deserialize)]
    struct Versioned {
        #[serde(with = "fork_version")]
        version: ForkVersion,
    }

    #[test]
    fn parses_with_and_without_prefix() {
        assert_eq!(parse_fork_version("0x00002009").unwrap(), [0, 0, 32, 9]);
        assert_eq!(parse_fork_version("10000038").unwrap(), [0x10, 0, 0, 0x38]);
    }

    #[test]
    fn rejects_wrong_length() {
        let err = parse_fork_version("0x000020").unwrap_err();
        assert!(matches!(err, ForkVersionError::InvalidLength(3)));
        assert!(matches!(parse_fork_version("0xzz002009"), Err(ForkVersionError::Hex(_))));
    }

    #[test]
    fn serde_hex_string() {
        let v = Versioned { version: [0x00, 0x00, 0x10, 0x20] };
        let s = serde_json::to_string(&v).unwrap();
        assert_eq!(s, r#"{"version":"0x00001020"}"#);
        let back: Versioned = serde_json::from_str(&s).unwrap();
        assert_eq!(back.version, v.version);

        assert!(serde_json::from_str::<Versioned>(r#"{"version":"0x0000"}"#).is_err());
    }
}
