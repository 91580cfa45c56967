//! Module name constants.
//!
//! Values must match the names the modules register under at runtime.

pub const AUTH_MODULE_NAME: &str = "auth";
pub const AUTHZ_MODULE_NAME: &str = "authz";
pub const BANK_MODULE_NAME: &str = "bank";
pub const CIRCUIT_MODULE_NAME: &str = "circuit";
pub const DISTRIBUTION_MODULE_NAME: &str = "distribution";
pub const EVIDENCE_MODULE_NAME: &str = "evidence";
pub const FEEGRANT_MODULE_NAME: &str = "feegrant";
pub const GOV_MODULE_NAME: &str = "gov";
pub const GROUP_MODULE_NAME: &str = "group";
pub const MINT_MODULE_NAME: &str = "mint";
pub const NFT_MODULE_NAME: &str = "nft";
pub const PARAMS_MODULE_NAME: &str = "params";
pub const PROTOCOL_POOL_MODULE_NAME: &str = "protocolpool";
pub const SLASHING_MODULE_NAME: &str = "slashing";
pub const STAKING_MODULE_NAME: &str = "staking";
/// The auth module's tx config provider registers under `tx`, not under its own name.
pub const AUTH_TX_CONFIG_DEPINJECT_MODULE_NAME: &str = "tx";
pub const UPGRADE_MODULE_NAME: &str = "upgrade";
pub const EPOCHS_MODULE_NAME: &str = "epochs";

/// Every known module name, once each.
pub const ALL_MODULE_NAMES: [&str; 18] = [
    AUTH_MODULE_NAME,
    AUTHZ_MODULE_NAME,
    BANK_MODULE_NAME,
    CIRCUIT_MODULE_NAME,
    DISTRIBUTION_MODULE_NAME,
    EVIDENCE_MODULE_NAME,
    FEEGRANT_MODULE_NAME,
    GOV_MODULE_NAME,
    GROUP_MODULE_NAME,
    MINT_MODULE_NAME,
    NFT_MODULE_NAME,
    PARAMS_MODULE_NAME,
    PROTOCOL_POOL_MODULE_NAME,
    SLASHING_MODULE_NAME,
    STAKING_MODULE_NAME,
    AUTH_TX_CONFIG_DEPINJECT_MODULE_NAME,
    UPGRADE_MODULE_NAME,
    EPOCHS_MODULE_NAME,
];

// Checked at compile time: a bad edit to the table above fails the build.
const _: () = {
    let mut i = 0;
    while i < ALL_MODULE_NAMES.len() {
        assert!(
            is_name_token(ALL_MODULE_NAMES[i]),
            "module names must be non-empty lowercase ASCII tokens"
        );
        let mut j = i + 1;
        while j < ALL_MODULE_NAMES.len() {
            assert!(
                !bytes_eq(ALL_MODULE_NAMES[i], ALL_MODULE_NAMES[j]),
                "module names must be unique"
            );
            j += 1;
        }
        i += 1;
    }
};

const fn is_name_token(name: &str) -> bool {
    let bytes = name.as_bytes();
    if bytes.is_empty() {
        return false;
    }
    let mut i = 0;
    while i < bytes.len() {
        if !(bytes[i].is_ascii_lowercase() || bytes[i].is_ascii_digit()) {
            return false;
        }
        i += 1;
    }
    true
}

const fn bytes_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}
