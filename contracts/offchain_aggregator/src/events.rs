use soroban_sdk::{symbol_short, Address, BytesN, Env, Symbol, Vec};

pub(crate) fn config_set(
    e: &Env,
    previous_block_number: u32,
    config_count: u32,
    signers: &Vec<BytesN<20>>,
    transmitters: &Vec<Address>,
) {
    let topics = (Symbol::new(e, "config_set"),);
    e.events().publish(
        topics,
        (
            previous_block_number,
            config_count,
            signers.clone(),
            transmitters.clone(),
        ),
    );
}

pub(crate) fn new_transmission(
    e: &Env,
    round_id: u64,
    answer: i128,
    transmitter: &Address,
    observations_timestamp: u32,
) {
    let topics = (symbol_short!("new_trans"), round_id);
    e.events()
        .publish(topics, (answer, transmitter.clone(), observations_timestamp));
}

pub(crate) fn ownership_transfer_requested(e: &Env, from: &Address, to: &Address) {
    let topics = (symbol_short!("own_req"), from.clone(), to.clone());
    e.events().publish(topics, ());
}

pub(crate) fn ownership_transferred(e: &Env, from: &Address, to: &Address) {
    let topics = (symbol_short!("own_xfer"), from.clone(), to.clone());
    e.events().publish(topics, ());
}

pub(crate) fn anchor_ratio_set(e: &Env, lower: u32, upper: u32) {
    let topics = (Symbol::new(e, "anchor_set"),);
    e.events().publish(topics, (lower, upper));
}
