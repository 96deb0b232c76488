//! Two-step ownership: the owner proposes a candidate, the candidate accepts.
//!
//! The contract is always either `Stable(owner)` or
//! `PendingTransfer(owner, candidate)`; it is never ownerless.

use crate::events;
use crate::storage::Storage;
use crate::types::AggregatorError;
use soroban_sdk::{log, Address, Env};

pub struct Ownership;

impl Ownership {
    /// Capability check shared by every privileged entry point.
    pub fn require_owner(env: &Env, caller: &Address) -> Result<(), AggregatorError> {
        caller.require_auth();

        let owner = Storage::get_owner(env)?;
        if owner != *caller {
            return Err(AggregatorError::OnlyOwner);
        }
        Ok(())
    }

    pub fn transfer(
        env: &Env,
        caller: &Address,
        candidate: &Address,
    ) -> Result<(), AggregatorError> {
        Self::require_owner(env, caller)?;

        Storage::set_pending_owner(env, candidate);
        events::ownership_transfer_requested(env, caller, candidate);
        log!(env, "ownership transfer requested: {} -> {}", caller, candidate);
        Ok(())
    }

    pub fn accept(env: &Env, caller: &Address) -> Result<(), AggregatorError> {
        caller.require_auth();

        match Storage::get_pending_owner(env) {
            Some(pending) if pending == *caller => {}
            _ => return Err(AggregatorError::NotProposedOwner),
        }

        let previous = Storage::get_owner(env)?;
        Storage::set_owner(env, caller);
        Storage::clear_pending_owner(env);

        events::ownership_transferred(env, &previous, caller);
        log!(env, "ownership transferred: {} -> {}", previous, caller);
        Ok(())
    }
}
