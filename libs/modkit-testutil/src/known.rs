use std::fmt;

use serde::{Serialize, Serializer};

use crate::names::*;

/// Typed handle for a module listed in [`ALL_MODULE_NAMES`].
///
/// Serializes as its canonical name, so it can key `modules.<name>` sections
/// when building host config fixtures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KnownModule {
    Auth,
    Authz,
    Bank,
    Circuit,
    Distribution,
    Evidence,
    Feegrant,
    Gov,
    Group,
    Mint,
    Nft,
    Params,
    ProtocolPool,
    Slashing,
    Staking,
    AuthTxConfigDepinject,
    Upgrade,
    Epochs,
}

impl KnownModule {
    /// All variants, in the order of [`ALL_MODULE_NAMES`].
    pub const ALL: [KnownModule; 18] = [
        Self::Auth,
        Self::Authz,
        Self::Bank,
        Self::Circuit,
        Self::Distribution,
        Self::Evidence,
        Self::Feegrant,
        Self::Gov,
        Self::Group,
        Self::Mint,
        Self::Nft,
        Self::Params,
        Self::ProtocolPool,
        Self::Slashing,
        Self::Staking,
        Self::AuthTxConfigDepinject,
        Self::Upgrade,
        Self::Epochs,
    ];

    /// Canonical runtime name of the module.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Auth => AUTH_MODULE_NAME,
            Self::Authz => AUTHZ_MODULE_NAME,
            Self::Bank => BANK_MODULE_NAME,
            Self::Circuit => CIRCUIT_MODULE_NAME,
            Self::Distribution => DISTRIBUTION_MODULE_NAME,
            Self::Evidence => EVIDENCE_MODULE_NAME,
            Self::Feegrant => FEEGRANT_MODULE_NAME,
            Self::Gov => GOV_MODULE_NAME,
            Self::Group => GROUP_MODULE_NAME,
            Self::Mint => MINT_MODULE_NAME,
            Self::Nft => NFT_MODULE_NAME,
            Self::Params => PARAMS_MODULE_NAME,
            Self::ProtocolPool => PROTOCOL_POOL_MODULE_NAME,
            Self::Slashing => SLASHING_MODULE_NAME,
            Self::Staking => STAKING_MODULE_NAME,
            Self::AuthTxConfigDepinject => AUTH_TX_CONFIG_DEPINJECT_MODULE_NAME,
            Self::Upgrade => UPGRADE_MODULE_NAME,
            Self::Epochs => EPOCHS_MODULE_NAME,
        }
    }
}

impl fmt::Display for KnownModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl AsRef<str> for KnownModule {
    fn as_ref(&self) -> &str {
        self.name()
    }
}

impl From<KnownModule> for &'static str {
    fn from(m: KnownModule) -> Self {
        m.name()
    }
}

impl PartialEq<str> for KnownModule {
    fn eq(&self, other: &str) -> bool {
        self.name() == other
    }
}

impl PartialEq<&str> for KnownModule {
    fn eq(&self, other: &&str) -> bool {
        self.name() == *other
    }
}

impl Serialize for KnownModule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_follows_name_table_order() {
        let names: Vec<&str> = KnownModule::ALL.iter().map(|m| m.name()).collect();
        assert_eq!(names, ALL_MODULE_NAMES);
    }

    #[test]
    fn display_and_as_ref_use_canonical_name() {
        assert_eq!(KnownModule::ProtocolPool.to_string(), "protocolpool");
        assert_eq!(KnownModule::Nft.as_ref(), "nft");
        let raw: &'static str = KnownModule::Gov.into();
        assert_eq!(raw, "gov");
    }

    #[test]
    fn compares_against_runtime_strings() {
        let registered = String::from("staking");
        assert!(KnownModule::Staking == *registered);
        assert_eq!(KnownModule::Staking, "staking");
        assert_ne!(KnownModule::Slashing, "staking");
    }

    #[test]
    fn tx_provider_keeps_short_name() {
        assert_eq!(KnownModule::AuthTxConfigDepinject.name(), "tx");
    }
}
