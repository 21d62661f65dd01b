//! Deterministic record addressing.
//!
//! Every record lives at a 32-byte address computed from a namespace tag and
//! the record's business key. Handlers recompute the address on every call;
//! nothing stores an address-to-key index.

use std::fmt;

use cosmwasm_std::{Addr, HexBinary};
use sha2::{Digest, Sha256};

use crate::error::ContractError;

/// Domain prefix mixed into every derivation
const ADDRESS_DOMAIN: &[u8] = b"bugquest.record.v1";

pub const CAMPAIGN_TAG: &str = "campaign";
pub const COLLECTION_TAG: &str = "collection";
pub const COMPLETION_TAG: &str = "completion";
pub const PROGRESS_TAG: &str = "progress";
pub const REWARD_TAG: &str = "reward";

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordAddress([u8; 32]);

impl RecordAddress {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        HexBinary::from(self.0.as_slice()).to_hex()
    }

    pub fn to_hex_binary(&self) -> HexBinary {
        HexBinary::from(self.0.as_slice())
    }
}

impl fmt::Display for RecordAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for RecordAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RecordAddress({})", self.to_hex())
    }
}

/// SHA-256 over domain, tag and seeds. Each part is prefixed with its u64
/// big-endian length so ("ab", "c") and ("a", "bc") never collide.
pub fn derive_address(tag: &str, seeds: &[&[u8]]) -> RecordAddress {
    let mut hasher = Sha256::new();
    hasher.update(ADDRESS_DOMAIN);
    write_part(&mut hasher, tag.as_bytes());
    for seed in seeds {
        write_part(&mut hasher, seed);
    }
    RecordAddress(hasher.finalize().into())
}

fn write_part(hasher: &mut Sha256, part: &[u8]) {
    // usize never exceeds 64 bits, so the prefix is exact for any slice.
    hasher.update((part.len() as u64).to_be_bytes());
    hasher.update(part);
}

pub fn campaign_address(campaign_id: u8) -> RecordAddress {
    derive_address(CAMPAIGN_TAG, &[&campaign_id.to_le_bytes()])
}

pub fn collection_address(collection: &Addr) -> RecordAddress {
    derive_address(COLLECTION_TAG, &[collection.as_bytes()])
}

pub fn completion_address(campaign_id: u8, player: &Addr, challenge_id: u8) -> RecordAddress {
    derive_address(
        COMPLETION_TAG,
        &[
            &campaign_id.to_le_bytes(),
            player.as_bytes(),
            &challenge_id.to_le_bytes(),
        ],
    )
}

pub fn progress_address(campaign_id: u8, player: &Addr) -> RecordAddress {
    derive_address(PROGRESS_TAG, &[&campaign_id.to_le_bytes(), player.as_bytes()])
}

/// Reward token ids hang off the completion they pay out, so a given
/// completion can only ever name one token.
pub fn reward_token_id(completion: &RecordAddress) -> String {
    derive_address(REWARD_TAG, &[completion.as_bytes()]).to_hex()
}

/// Compare a caller-supplied address against the recomputed one.
/// `None` means the caller did not name an address.
pub fn ensure_address(
    supplied: Option<&HexBinary>,
    expected: &RecordAddress,
) -> Result<(), ContractError> {
    match supplied {
        Some(addr) if addr.as_slice() != expected.as_bytes() => {
            Err(ContractError::AddressMismatch {
                expected: expected.to_hex(),
                supplied: addr.to_hex(),
            })
        }
        _ => Ok(()),
    }
}
