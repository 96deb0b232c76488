//! secp256k1 signer recovery for Ethereum-style report signatures.
//!
//! Pure function of its inputs: it never reads contract storage, so whether
//! the recovered address is allowed to sign is decided by the caller.

use crate::types::AggregatorError;
use soroban_sdk::{Bytes, BytesN, Env};

/// secp256k1 group order `n`, big-endian.
const CURVE_ORDER: [u8; 32] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe,
    0xba, 0xae, 0xdc, 0xe6, 0xaf, 0x48, 0xa0, 0x3b, 0xbf, 0xd2, 0x5e, 0x8c, 0xd0, 0x36, 0x41, 0x41,
];

/// `n / 2`, the largest `s` accepted under the low-s rule.
const HALF_CURVE_ORDER: [u8; 32] = [
    0x7f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0x5d, 0x57, 0x6e, 0x73, 0x57, 0xa4, 0x50, 0x1d, 0xdf, 0xe9, 0x2f, 0x46, 0x68, 0x1b, 0x20, 0xa0,
];

pub struct SignatureVerifier;

impl SignatureVerifier {
    /// Recovers the address that signed `keccak256(report)`.
    ///
    /// `v` may be given either as a raw recovery id (`0`/`1`) or in the
    /// legacy Ethereum form (`27`/`28`).
    ///
    /// An `r` inside `[1, n)` that is not the x-coordinate of a curve point
    /// cannot be rejected here: the host recovery traps and the whole call
    /// aborts with a host error rather than `InvalidSignature`. No state is
    /// written in either case.
    pub fn recover_signer(
        env: &Env,
        report: &Bytes,
        r: &BytesN<32>,
        s: &BytesN<32>,
        v: u32,
    ) -> Result<BytesN<20>, AggregatorError> {
        let recovery_id = Self::normalize_v(v)?;

        let r = r.to_array();
        let s = s.to_array();
        if is_zero(&r) || r >= CURVE_ORDER {
            return Err(AggregatorError::InvalidSignature);
        }
        if is_zero(&s) || s > HALF_CURVE_ORDER {
            return Err(AggregatorError::InvalidSignature);
        }

        let mut signature = [0u8; 64];
        signature[..32].copy_from_slice(&r);
        signature[32..].copy_from_slice(&s);
        let signature = BytesN::from_array(env, &signature);

        let digest = env.crypto().keccak256(report);
        let public_key = env
            .crypto()
            .secp256k1_recover(&digest, &signature, recovery_id);

        let signer = Self::eth_address(env, &public_key);
        if is_zero(&signer.to_array()) {
            return Err(AggregatorError::InvalidSignature);
        }
        Ok(signer)
    }

    /// Last 20 bytes of `keccak256` over an uncompressed SEC1 key without
    /// its `0x04` prefix.
    pub fn eth_address(env: &Env, public_key: &BytesN<65>) -> BytesN<20> {
        let key: Bytes = public_key.clone().into();
        let digest = env.crypto().keccak256(&key.slice(1..)).to_bytes();

        let mut address = [0u8; 20];
        address.copy_from_slice(&digest.to_array()[12..]);
        BytesN::from_array(env, &address)
    }

    fn normalize_v(v: u32) -> Result<u32, AggregatorError> {
        match v {
            0 | 1 => Ok(v),
            27 | 28 => Ok(v - 27),
            _ => Err(AggregatorError::InvalidSignature),
        }
    }
}

fn is_zero(bytes: &[u8]) -> bool {
    bytes.iter().all(|b| *b == 0)
}
