use crate::storage::Storage;
use crate::types::{AggregatorError, RoundData, TransmissionDetails};
use soroban_sdk::{Address, Env};

/// Append-only round history keyed by round id.
pub struct RoundLedger;

impl RoundLedger {
    /// Appends the next round and returns its id. Ids start at 1.
    pub fn commit(
        env: &Env,
        answer: i128,
        observations_timestamp: u32,
        transmitter: &Address,
    ) -> u64 {
        let round_id = Storage::get_latest_round_id(env) + 1;
        debug_assert!(!Storage::has_round(env, round_id));

        let now = env.ledger().timestamp();
        let round = RoundData {
            round_id,
            answer,
            started_at: observations_timestamp as u64,
            updated_at: now,
            answered_in_round: round_id,
        };
        Storage::set_round(env, &round);
        Storage::set_latest_round_id(env, round_id);

        Storage::set_latest_transmission(
            env,
            &TransmissionDetails {
                config_count: Storage::get_config_details(env).config_count,
                round_id,
                answer,
                observations_timestamp,
                transmitter: transmitter.clone(),
                transmitted_at: now,
            },
        );

        round_id
    }

    pub fn latest_round(env: &Env) -> Result<u64, AggregatorError> {
        match Storage::get_latest_round_id(env) {
            0 => Err(AggregatorError::NoData),
            round_id => Ok(round_id),
        }
    }

    pub fn get_round_data(env: &Env, round_id: u64) -> Result<RoundData, AggregatorError> {
        Storage::get_round(env, round_id).ok_or(AggregatorError::NoData)
    }

    pub fn latest_round_data(env: &Env) -> Result<RoundData, AggregatorError> {
        Self::get_round_data(env, Self::latest_round(env)?)
    }

    /// Answer of the latest round, or `None` before the first commit.
    pub fn latest_answer_opt(env: &Env) -> Option<i128> {
        Self::latest_round_data(env).ok().map(|round| round.answer)
    }

    pub fn latest_transmission_details(env: &Env) -> Result<TransmissionDetails, AggregatorError> {
        Storage::get_latest_transmission(env).ok_or(AggregatorError::NoData)
    }
}
