use crate::constants::MAX_NUM_ORACLES;
use crate::events;
use crate::storage::Storage;
use crate::types::{AggregatorError, ConfigDetails};
use soroban_sdk::{log, Address, BytesN, Env, Map, Vec};

/// Who may sign reports and who may submit them.
pub struct ConfigRegistry;

impl ConfigRegistry {
    /// Replaces the signer and transmitter sets. The caller must already
    /// have passed the owner check.
    pub fn set_config(
        env: &Env,
        signers: &Vec<BytesN<20>>,
        transmitters: &Vec<Address>,
    ) -> Result<ConfigDetails, AggregatorError> {
        Self::validate(env, signers, transmitters)?;

        for signer in Storage::get_signers(env).iter() {
            Storage::remove_signer(env, &signer);
        }
        for transmitter in Storage::get_transmitters(env).iter() {
            Storage::remove_transmitter(env, &transmitter);
        }

        for (index, signer) in signers.iter().enumerate() {
            Storage::set_signer_index(env, &signer, index as u32);
        }
        for (index, transmitter) in transmitters.iter().enumerate() {
            Storage::set_transmitter_index(env, &transmitter, index as u32);
        }
        Storage::set_signers(env, signers);
        Storage::set_transmitters(env, transmitters);

        let previous = Storage::get_config_details(env);
        let details = ConfigDetails {
            config_count: previous.config_count + 1,
            block_number: env.ledger().sequence(),
        };
        Storage::set_config_details(env, &details);

        events::config_set(
            env,
            previous.block_number,
            details.config_count,
            signers,
            transmitters,
        );
        log!(
            env,
            "config set: count={}, oracles={}",
            details.config_count,
            signers.len()
        );

        Ok(details)
    }

    fn validate(
        env: &Env,
        signers: &Vec<BytesN<20>>,
        transmitters: &Vec<Address>,
    ) -> Result<(), AggregatorError> {
        if signers.len() != transmitters.len() {
            return Err(AggregatorError::OracleLengthMismatch);
        }
        if signers.len() > MAX_NUM_ORACLES {
            return Err(AggregatorError::TooManyOracles);
        }

        let mut seen_signers: Map<BytesN<20>, bool> = Map::new(env);
        for signer in signers.iter() {
            if seen_signers.contains_key(signer.clone()) {
                return Err(AggregatorError::RepeatedSigner);
            }
            seen_signers.set(signer, true);
        }

        let mut seen_transmitters: Map<Address, bool> = Map::new(env);
        for transmitter in transmitters.iter() {
            if seen_transmitters.contains_key(transmitter.clone()) {
                return Err(AggregatorError::RepeatedTransmitter);
            }
            seen_transmitters.set(transmitter, true);
        }

        Ok(())
    }

    pub fn latest_config_details(env: &Env) -> ConfigDetails {
        Storage::get_config_details(env)
    }

    pub fn is_authorized_signer(env: &Env, signer: &BytesN<20>) -> bool {
        Storage::has_signer(env, signer)
    }

    pub fn is_authorized_transmitter(env: &Env, transmitter: &Address) -> bool {
        Storage::has_transmitter(env, transmitter)
    }
}
