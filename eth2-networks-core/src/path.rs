/// Root of the EIP-2334 derivation path for BLS12-381 validator keys.
pub const BASE_EIP2334_PATH: &str = "m/12381/3600";

/// Prefixes `relative_path` with [`BASE_EIP2334_PATH`].
///
/// The relative path is appended verbatim, so it is expected to start with a
/// separator, e.g. `/0/0/0` for the signing key of the first validator.
pub fn full_path(relative_path: &str) -> String {
    format!("{BASE_EIP2334_PATH}{relative_path}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_verbatim() {
        assert_eq!(full_path("/0/0/0"), "m/12381/3600/0/0/0");
        assert_eq!(full_path("/1/0"), "m/12381/3600/1/0");
        assert_eq!(full_path(""), BASE_EIP2334_PATH);
    }
}
