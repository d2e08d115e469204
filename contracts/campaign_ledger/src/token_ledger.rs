//! # Token ledger boundary
//!
//! Every token movement of the contract goes through this module. Transfers
//! use the `try_` client methods so a rejected transfer surfaces as
//! [`Error::TransferFailed`] instead of trapping. Entry points propagate that
//! error, which rolls back the whole invocation.

use soroban_sdk::{token, Address, Env};

use crate::storage;
use crate::Error;

fn client(env: &Env) -> token::Client<'_> {
    token::Client::new(env, &storage::get_token(env))
}

/// Move `amount` from `from` into the contract.
pub fn pull(env: &Env, from: &Address, amount: i128) -> Result<(), Error> {
    match client(env).try_transfer(from, &env.current_contract_address(), &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(Error::TransferFailed),
    }
}

/// Move `amount` held by the contract to `to`.
pub fn push(env: &Env, to: &Address, amount: i128) -> Result<(), Error> {
    match client(env).try_transfer(&env.current_contract_address(), to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(Error::TransferFailed),
    }
}

