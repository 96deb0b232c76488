#![no_std]
use soroban_sdk::{
    contract, contractimpl, contractmeta, log, Address, Bytes, BytesN, Env, String, Vec,
};

mod anchor;
mod config;
mod constants;
mod events;
mod ledger;
mod ownership;
pub mod report;
mod signature;
mod storage;
pub mod types;

use config::ConfigRegistry;
use ledger::RoundLedger;
use ownership::Ownership;
use report::Report;
use signature::SignatureVerifier;
use storage::Storage;
use types::{AggregatorError, AnchorRatio, ConfigDetails, Metadata, RoundData, TransmissionDetails};

pub use constants::{MAX_NUM_ORACLES, TYPE_AND_VERSION, VERSION};

contractmeta!(
    key = "Description",
    val = "Single-reporter signed price aggregator with anchor-ratio guard"
);

#[contract]
pub struct OffchainAggregator;

#[contractimpl]
impl OffchainAggregator {
    pub fn initialize(
        env: Env,
        owner: Address,
        lower_bound_anchor_ratio: u32,
        upper_bound_anchor_ratio: u32,
        decimals: u32,
        description: String,
    ) -> Result<(), AggregatorError> {
        if Storage::is_initialized(&env) {
            return Err(AggregatorError::AlreadyInitialized);
        }
        owner.require_auth();

        let anchor = AnchorRatio::new(lower_bound_anchor_ratio, upper_bound_anchor_ratio)?;

        Storage::set_owner(&env, &owner);
        Storage::set_anchor_ratio(&env, &anchor);
        Storage::set_metadata(
            &env,
            &Metadata {
                decimals,
                description,
            },
        );
        Storage::bump_instance(&env);

        log!(
            &env,
            "aggregator initialized: owner={}, anchor={}..{}",
            owner,
            anchor.lower,
            anchor.upper
        );
        Ok(())
    }

    // ───────────── ADMIN ─────────────

    pub fn set_config(
        env: Env,
        caller: Address,
        signers: Vec<BytesN<20>>,
        transmitters: Vec<Address>,
    ) -> Result<ConfigDetails, AggregatorError> {
        Ownership::require_owner(&env, &caller)?;
        Storage::bump_instance(&env);

        ConfigRegistry::set_config(&env, &signers, &transmitters)
    }

    pub fn set_anchor_ratio(
        env: Env,
        caller: Address,
        lower: u32,
        upper: u32,
    ) -> Result<(), AggregatorError> {
        Ownership::require_owner(&env, &caller)?;
        let anchor = AnchorRatio::new(lower, upper)?;

        Storage::set_anchor_ratio(&env, &anchor);
        Storage::bump_instance(&env);

        events::anchor_ratio_set(&env, lower, upper);
        Ok(())
    }

    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        candidate: Address,
    ) -> Result<(), AggregatorError> {
        Ownership::transfer(&env, &caller, &candidate)?;
        Storage::bump_instance(&env);
        Ok(())
    }

    pub fn accept_ownership(env: Env, caller: Address) -> Result<(), AggregatorError> {
        Ownership::accept(&env, &caller)?;
        Storage::bump_instance(&env);
        Ok(())
    }

    // ───────────── TRANSMISSION ─────────────

    /// Commits a signed report as the next round if it passes the anchor guard.
    pub fn transmit(
        env: Env,
        transmitter: Address,
        report: Bytes,
        r: BytesN<32>,
        s: BytesN<32>,
        v: u32,
    ) -> Result<u64, AggregatorError> {
        transmitter.require_auth();
        Self::transmit_checked(&env, &transmitter, &report, &r, &s, v, true)
    }

    /// Same as `transmit` without the anchor guard. Needs the owner's
    /// authorization on top of the transmitter's.
    pub fn transmit_with_force(
        env: Env,
        transmitter: Address,
        report: Bytes,
        r: BytesN<32>,
        s: BytesN<32>,
        v: u32,
    ) -> Result<u64, AggregatorError> {
        transmitter.require_auth();
        let owner = Storage::get_owner(&env)?;
        if owner != transmitter {
            owner.require_auth();
        }
        Self::transmit_checked(&env, &transmitter, &report, &r, &s, v, false)
    }

    // ───────────── VIEWS ─────────────

    pub fn decimals(env: Env) -> Result<u32, AggregatorError> {
        Ok(Storage::get_metadata(&env)?.decimals)
    }

    pub fn description(env: Env) -> Result<String, AggregatorError> {
        Ok(Storage::get_metadata(&env)?.description)
    }

    pub fn version(_env: Env) -> u32 {
        VERSION
    }

    pub fn type_and_version(env: Env) -> String {
        String::from_str(&env, TYPE_AND_VERSION)
    }

    pub fn owner(env: Env) -> Result<Address, AggregatorError> {
        Storage::get_owner(&env)
    }

    pub fn pending_owner(env: Env) -> Option<Address> {
        Storage::get_pending_owner(&env)
    }

    pub fn lower_bound_anchor_ratio(env: Env) -> Result<u32, AggregatorError> {
        Ok(Storage::get_anchor_ratio(&env)?.lower)
    }

    pub fn upper_bound_anchor_ratio(env: Env) -> Result<u32, AggregatorError> {
        Ok(Storage::get_anchor_ratio(&env)?.upper)
    }

    pub fn latest_config_details(env: Env) -> ConfigDetails {
        ConfigRegistry::latest_config_details(&env)
    }

    pub fn get_transmitters(env: Env) -> Vec<Address> {
        Storage::get_transmitters(&env)
    }

    pub fn get_signers(env: Env) -> Vec<BytesN<20>> {
        Storage::get_signers(&env)
    }

    pub fn is_authorized_signer(env: Env, signer: BytesN<20>) -> bool {
        ConfigRegistry::is_authorized_signer(&env, &signer)
    }

    pub fn is_authorized_transmitter(env: Env, transmitter: Address) -> bool {
        ConfigRegistry::is_authorized_transmitter(&env, &transmitter)
    }

    pub fn latest_round(env: Env) -> Result<u64, AggregatorError> {
        RoundLedger::latest_round(&env)
    }

    pub fn latest_answer(env: Env) -> Result<i128, AggregatorError> {
        Ok(RoundLedger::latest_round_data(&env)?.answer)
    }

    pub fn latest_timestamp(env: Env) -> Result<u64, AggregatorError> {
        Ok(RoundLedger::latest_round_data(&env)?.updated_at)
    }

    pub fn get_answer(env: Env, round_id: u64) -> Result<i128, AggregatorError> {
        Ok(RoundLedger::get_round_data(&env, round_id)?.answer)
    }

    pub fn get_timestamp(env: Env, round_id: u64) -> Result<u64, AggregatorError> {
        Ok(RoundLedger::get_round_data(&env, round_id)?.updated_at)
    }

    pub fn get_round_data(env: Env, round_id: u64) -> Result<RoundData, AggregatorError> {
        RoundLedger::get_round_data(&env, round_id)
    }

    pub fn latest_round_data(env: Env) -> Result<RoundData, AggregatorError> {
        RoundLedger::latest_round_data(&env)
    }

    pub fn latest_transmission_details(env: Env) -> Result<TransmissionDetails, AggregatorError> {
        RoundLedger::latest_transmission_details(&env)
    }
}

impl OffchainAggregator {
    /// Decode, authenticate, guard, commit. Nothing is written unless every
    /// check has passed.
    fn transmit_checked(
        env: &Env,
        transmitter: &Address,
        report: &Bytes,
        r: &BytesN<32>,
        s: &BytesN<32>,
        v: u32,
        guarded: bool,
    ) -> Result<u64, AggregatorError> {
        let decoded = Report::decode(report)?;

        let signer = SignatureVerifier::recover_signer(env, report, r, s, v)?;
        if !ConfigRegistry::is_authorized_signer(env, &signer) {
            return Err(AggregatorError::UnauthorizedSigner);
        }
        if !ConfigRegistry::is_authorized_transmitter(env, transmitter) {
            return Err(AggregatorError::UnauthorizedTransmitter);
        }

        if guarded {
            let anchor = Storage::get_anchor_ratio(env)?;
            anchor.check(RoundLedger::latest_answer_opt(env), decoded.median)?;
        }

        let round_id = RoundLedger::commit(
            env,
            decoded.median,
            decoded.observations_timestamp,
            transmitter,
        );
        Storage::bump_instance(env);

        events::new_transmission(
            env,
            round_id,
            decoded.median,
            transmitter,
            decoded.observations_timestamp,
        );
        log!(
            env,
            "round {} committed: answer={}, forced={}",
            round_id,
            decoded.median,
            !guarded
        );

        Ok(round_id)
    }
}
