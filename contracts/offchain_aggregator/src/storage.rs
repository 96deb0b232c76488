use crate::constants::{
    HIGH_INSTANCE_BUMP_LEDGERS, HIGH_PERSISTENT_BUMP_LEDGERS, LOW_INSTANCE_BUMP_LEDGERS,
    LOW_PERSISTENT_BUMP_LEDGERS,
};
use crate::types::{
    AggregatorError, AnchorRatio, ConfigDetails, DataKey, Metadata, RoundData, TransmissionDetails,
};
use soroban_sdk::{Address, BytesN, Env, Vec};

pub struct Storage;

impl Storage {
    pub fn bump_instance(env: &Env) {
        env.storage()
            .instance()
            .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);
    }

    pub fn is_initialized(env: &Env) -> bool {
        env.storage().instance().has(&DataKey::Owner)
    }

    pub fn get_owner(env: &Env) -> Result<Address, AggregatorError> {
        env.storage()
            .instance()
            .get(&DataKey::Owner)
            .ok_or(AggregatorError::NotInitialized)
    }

    pub fn set_owner(env: &Env, owner: &Address) {
        env.storage().instance().set(&DataKey::Owner, owner);
    }

    pub fn get_pending_owner(env: &Env) -> Option<Address> {
        env.storage().instance().get(&DataKey::PendingOwner)
    }

    pub fn set_pending_owner(env: &Env, candidate: &Address) {
        env.storage().instance().set(&DataKey::PendingOwner, candidate);
    }

    pub fn clear_pending_owner(env: &Env) {
        env.storage().instance().remove(&DataKey::PendingOwner);
    }

    pub fn get_metadata(env: &Env) -> Result<Metadata, AggregatorError> {
        env.storage()
            .instance()
            .get(&DataKey::Metadata)
            .ok_or(AggregatorError::NotInitialized)
    }

    pub fn set_metadata(env: &Env, metadata: &Metadata) {
        env.storage().instance().set(&DataKey::Metadata, metadata);
    }

    pub fn get_anchor_ratio(env: &Env) -> Result<AnchorRatio, AggregatorError> {
        env.storage()
            .instance()
            .get(&DataKey::AnchorRatio)
            .ok_or(AggregatorError::NotInitialized)
    }

    pub fn set_anchor_ratio(env: &Env, ratio: &AnchorRatio) {
        env.storage().instance().set(&DataKey::AnchorRatio, ratio);
    }

    pub fn get_config_details(env: &Env) -> ConfigDetails {
        env.storage()
            .instance()
            .get(&DataKey::ConfigDetails)
            .unwrap_or(ConfigDetails {
                config_count: 0,
                block_number: 0,
            })
    }

    pub fn set_config_details(env: &Env, details: &ConfigDetails) {
        env.storage().instance().set(&DataKey::ConfigDetails, details);
    }

    pub fn get_signers(env: &Env) -> Vec<BytesN<20>> {
        env.storage()
            .instance()
            .get(&DataKey::Signers)
            .unwrap_or(Vec::new(env))
    }

    pub fn set_signers(env: &Env, signers: &Vec<BytesN<20>>) {
        env.storage().instance().set(&DataKey::Signers, signers);
    }

    pub fn get_transmitters(env: &Env) -> Vec<Address> {
        env.storage()
            .instance()
            .get(&DataKey::Transmitters)
            .unwrap_or(Vec::new(env))
    }

    pub fn set_transmitters(env: &Env, transmitters: &Vec<Address>) {
        env.storage()
            .instance()
            .set(&DataKey::Transmitters, transmitters);
    }

    /// Membership lookups keep live entries from being archived between
    /// config updates.
    pub fn has_signer(env: &Env, signer: &BytesN<20>) -> bool {
        let key = DataKey::Signer(signer.clone());
        let present = env.storage().persistent().has(&key);

        if present {
            env.storage().persistent().extend_ttl(
                &key,
                LOW_PERSISTENT_BUMP_LEDGERS,
                HIGH_PERSISTENT_BUMP_LEDGERS,
            );
        }

        present
    }

    pub fn set_signer_index(env: &Env, signer: &BytesN<20>, index: u32) {
        let key = DataKey::Signer(signer.clone());
        env.storage().persistent().set(&key, &index);
        env.storage().persistent().extend_ttl(
            &key,
            LOW_PERSISTENT_BUMP_LEDGERS,
            HIGH_PERSISTENT_BUMP_LEDGERS,
        );
    }

    pub fn remove_signer(env: &Env, signer: &BytesN<20>) {
        env.storage()
            .persistent()
            .remove(&DataKey::Signer(signer.clone()));
    }

    pub fn has_transmitter(env: &Env, transmitter: &Address) -> bool {
        let key = DataKey::Transmitter(transmitter.clone());
        let present = env.storage().persistent().has(&key);

        if present {
            env.storage().persistent().extend_ttl(
                &key,
                LOW_PERSISTENT_BUMP_LEDGERS,
                HIGH_PERSISTENT_BUMP_LEDGERS,
            );
        }

        present
    }

    pub fn set_transmitter_index(env: &Env, transmitter: &Address, index: u32) {
        let key = DataKey::Transmitter(transmitter.clone());
        env.storage().persistent().set(&key, &index);
        env.storage().persistent().extend_ttl(
            &key,
            LOW_PERSISTENT_BUMP_LEDGERS,
            HIGH_PERSISTENT_BUMP_LEDGERS,
        );
    }

    pub fn remove_transmitter(env: &Env, transmitter: &Address) {
        env.storage()
            .persistent()
            .remove(&DataKey::Transmitter(transmitter.clone()));
    }

    /// Zero means no round has been committed yet.
    pub fn get_latest_round_id(env: &Env) -> u64 {
        env.storage()
            .instance()
            .get(&DataKey::LatestRoundId)
            .unwrap_or(0)
    }

    pub fn set_latest_round_id(env: &Env, round_id: u64) {
        env.storage()
            .instance()
            .set(&DataKey::LatestRoundId, &round_id);
    }

    pub fn has_round(env: &Env, round_id: u64) -> bool {
        env.storage().persistent().has(&DataKey::Round(round_id))
    }

    pub fn get_round(env: &Env, round_id: u64) -> Option<RoundData> {
        let key = DataKey::Round(round_id);
        let round: Option<RoundData> = env.storage().persistent().get(&key);

        if round.is_some() {
            env.storage().persistent().extend_ttl(
                &key,
                LOW_PERSISTENT_BUMP_LEDGERS,
                HIGH_PERSISTENT_BUMP_LEDGERS,
            );
        }

        round
    }

    pub fn set_round(env: &Env, round: &RoundData) {
        let key = DataKey::Round(round.round_id);
        env.storage().persistent().set(&key, round);
        env.storage().persistent().extend_ttl(
            &key,
            LOW_PERSISTENT_BUMP_LEDGERS,
            HIGH_PERSISTENT_BUMP_LEDGERS,
        );
    }

    pub fn get_latest_transmission(env: &Env) -> Option<TransmissionDetails> {
        env.storage().instance().get(&DataKey::LatestTransmission)
    }

    pub fn set_latest_transmission(env: &Env, details: &TransmissionDetails) {
        env.storage()
            .instance()
            .set(&DataKey::LatestTransmission, details);
    }
}
