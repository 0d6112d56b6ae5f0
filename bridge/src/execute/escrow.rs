//! Native escrow handlers (Lock, Unlock and the unlock reply).
//!
//! Unlock runs in two phases. The execute phase debits the escrow ledger,
//! records a `PendingUnlock` and dispatches the bank transfer as a sub-message.
//! The reply phase either commits (emits `Unlock`) or restores the recorded
//! balance and fails with `TransferFailed`, aborting the whole call.

use cosmwasm_std::{
    BankMsg, Coin, DepsMut, Env, MessageInfo, Reply, Response, SubMsg, SubMsgResult, Uint128,
};

use crate::access::require_oracle;
use crate::error::ContractError;
use crate::events;
use crate::state::{PendingUnlock, CONFIG, ESCROW_BALANCE, PENDING_UNLOCK, UNLOCK_REPLY_ID};

// ============================================================================
// Lock
// ============================================================================

/// Escrow the native funds attached to the call. Anyone may lock; sending no
/// funds locks zero.
pub fn execute_lock(
    deps: DepsMut,
    info: MessageInfo,
    dest_address: String,
    dest_identifier: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    let mut value = Uint128::zero();
    for coin in &info.funds {
        if coin.denom != config.native_denom {
            return Err(ContractError::InvalidFunds {
                denom: config.native_denom,
            });
        }
        value = value.checked_add(coin.amount)?;
    }

    let escrow = ESCROW_BALANCE.load(deps.storage)?.checked_add(value)?;
    ESCROW_BALANCE.save(deps.storage, &escrow)?;

    Ok(Response::new()
        .add_event(events::lock(&info.sender, value, &dest_address, dest_identifier))
        .add_attribute("action", "lock")
        .add_attribute("escrow_balance", escrow))
}

// ============================================================================
// Unlock
// ============================================================================

/// Debit escrow and send `value` of the native denom to `dest_address`.
///
/// The bridge itself is never a valid recipient: the coins would stay in the
/// contract while the escrow ledger shrank.
pub fn execute_unlock(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    dest_address: String,
    value: Uint128,
) -> Result<Response, ContractError> {
    require_oracle(deps.storage, &info.sender)?;

    if value.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "Unlock value must be greater than zero".to_string(),
        });
    }

    let recipient = deps.api.addr_validate(&dest_address)?;
    if recipient == env.contract.address {
        return Err(ContractError::InvalidRecipient {
            address: recipient.into_string(),
        });
    }
    let config = CONFIG.load(deps.storage)?;

    if PENDING_UNLOCK.may_load(deps.storage)?.is_some() {
        return Err(ContractError::UnlockInFlight);
    }

    let escrow_before = ESCROW_BALANCE.load(deps.storage)?;
    let escrow_after = escrow_before
        .checked_sub(value)
        .map_err(|_| ContractError::InsufficientEscrow {
            available: escrow_before,
            requested: value,
        })?;

    ESCROW_BALANCE.save(deps.storage, &escrow_after)?;
    PENDING_UNLOCK.save(
        deps.storage,
        &PendingUnlock {
            recipient: recipient.clone(),
            amount: value,
            escrow_before,
        },
    )?;

    let transfer = BankMsg::Send {
        to_address: recipient.to_string(),
        amount: vec![Coin {
            denom: config.native_denom,
            amount: value,
        }],
    };

    Ok(Response::new()
        .add_submessage(SubMsg::reply_always(transfer, UNLOCK_REPLY_ID))
        .add_attribute("action", "unlock")
        .add_attribute("recipient", recipient)
        .add_attribute("value", value))
}

/// Settle the unlock transfer: commit on success, restore escrow on failure.
pub fn reply_unlock(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    let pending = PENDING_UNLOCK.load(deps.storage)?;
    PENDING_UNLOCK.remove(deps.storage);

    match msg.result {
        SubMsgResult::Ok(_) => Ok(Response::new()
            .add_event(events::unlock(&pending.recipient, pending.amount))
            .add_attribute("action", "unlock_settled")),
        SubMsgResult::Err(reason) => {
            ESCROW_BALANCE.save(deps.storage, &pending.escrow_before)?;
            Err(ContractError::TransferFailed { reason })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::{mock_dependencies, mock_env, mock_info, MOCK_CONTRACT_ADDR};
    use cosmwasm_std::{coins, Addr, SubMsgResponse};

    use crate::access::add_oracle;
    use crate::state::Config;

    fn setup(deps: DepsMut, escrow: u128) {
        CONFIG
            .save(
                deps.storage,
                &Config {
                    admin: Addr::unchecked("admin"),
                    native_denom: "uluna".to_string(),
                },
            )
            .unwrap();
        add_oracle(deps.storage, &Addr::unchecked("oracle")).unwrap();
        ESCROW_BALANCE
            .save(deps.storage, &Uint128::new(escrow))
            .unwrap();
    }

    fn transfer_reply(result: SubMsgResult) -> Reply {
        Reply {
            id: UNLOCK_REPLY_ID,
            result,
        }
    }

    #[test]
    fn test_lock_accumulates_escrow() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut(), 0);

        let info = mock_info("user", &coins(10, "uluna"));
        let res = execute_lock(deps.as_mut(), info, "0xabc".to_string(), 1).unwrap();
        assert_eq!(res.events.len(), 1);
        assert_eq!(res.events[0].ty, events::LOCK_EVENT);

        let info = mock_info("user", &coins(5, "uluna"));
        execute_lock(deps.as_mut(), info, "0xabc".to_string(), 1).unwrap();
        assert_eq!(
            ESCROW_BALANCE.load(&deps.storage).unwrap(),
            Uint128::new(15)
        );
    }

    #[test]
    fn test_lock_rejects_foreign_denom() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut(), 0);

        let info = mock_info("user", &coins(10, "uusd"));
        let err = execute_lock(deps.as_mut(), info, "0xabc".to_string(), 1).unwrap_err();
        assert_eq!(
            err,
            ContractError::InvalidFunds {
                denom: "uluna".to_string()
            }
        );
        assert!(ESCROW_BALANCE.load(&deps.storage).unwrap().is_zero());
    }

    #[test]
    fn test_zero_lock_is_noop() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut(), 3);

        let info = mock_info("user", &[]);
        let res = execute_lock(deps.as_mut(), info, "0xabc".to_string(), 1).unwrap();
        assert_eq!(res.events[0].attributes[1].value, "0");
        assert_eq!(ESCROW_BALANCE.load(&deps.storage).unwrap(), Uint128::new(3));
    }

    #[test]
    fn test_unlock_dispatches_transfer_with_reply() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut(), 10);

        let info = mock_info("oracle", &[]);
        let res = execute_unlock(
            deps.as_mut(),
            mock_env(),
            info,
            "recipient".to_string(),
            Uint128::new(10),
        )
        .unwrap();

        assert_eq!(res.messages.len(), 1);
        assert_eq!(res.messages[0].id, UNLOCK_REPLY_ID);
        // Unlock is only announced once the transfer settles
        assert!(res.events.is_empty());
        assert!(ESCROW_BALANCE.load(&deps.storage).unwrap().is_zero());
        assert!(PENDING_UNLOCK.may_load(&deps.storage).unwrap().is_some());
    }

    #[test]
    fn test_unlock_insufficient_escrow() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut(), 5);

        let info = mock_info("oracle", &[]);
        let err = execute_unlock(
            deps.as_mut(),
            mock_env(),
            info,
            "recipient".to_string(),
            Uint128::new(6),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ContractError::InsufficientEscrow {
                available: Uint128::new(5),
                requested: Uint128::new(6),
            }
        );
        assert_eq!(ESCROW_BALANCE.load(&deps.storage).unwrap(), Uint128::new(5));
        assert!(PENDING_UNLOCK.may_load(&deps.storage).unwrap().is_none());
    }

    #[test]
    fn test_unlock_to_bridge_itself_rejected() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut(), 10);

        let err = execute_unlock(
            deps.as_mut(),
            mock_env(),
            mock_info("oracle", &[]),
            MOCK_CONTRACT_ADDR.to_string(),
            Uint128::new(10),
        )
        .unwrap_err();

        assert_eq!(
            err,
            ContractError::InvalidRecipient {
                address: MOCK_CONTRACT_ADDR.to_string()
            }
        );
        assert_eq!(ESCROW_BALANCE.load(&deps.storage).unwrap(), Uint128::new(10));
        assert!(PENDING_UNLOCK.may_load(&deps.storage).unwrap().is_none());
    }

    #[test]
    fn test_unlock_requires_oracle() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut(), 5);

        let info = mock_info("user", &[]);
        let err = execute_unlock(
            deps.as_mut(),
            mock_env(),
            info,
            "recipient".to_string(),
            Uint128::new(5),
        )
        .unwrap_err();
        assert_eq!(err, ContractError::Unauthorized);
        assert_eq!(ESCROW_BALANCE.load(&deps.storage).unwrap(), Uint128::new(5));
    }

    #[test]
    fn test_reply_success_emits_unlock() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut(), 10);
        execute_unlock(
            deps.as_mut(),
            mock_env(),
            mock_info("oracle", &[]),
            "recipient".to_string(),
            Uint128::new(4),
        )
        .unwrap();

        let res = reply_unlock(
            deps.as_mut(),
            mock_env(),
            transfer_reply(SubMsgResult::Ok(SubMsgResponse {
                events: vec![],
                data: None,
            })),
        )
        .unwrap();

        assert_eq!(res.events.len(), 1);
        assert_eq!(res.events[0].ty, events::UNLOCK_EVENT);
        assert_eq!(ESCROW_BALANCE.load(&deps.storage).unwrap(), Uint128::new(6));
        assert!(PENDING_UNLOCK.may_load(&deps.storage).unwrap().is_none());
    }

    #[test]
    fn test_reply_failure_restores_escrow() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut(), 10);
        execute_unlock(
            deps.as_mut(),
            mock_env(),
            mock_info("oracle", &[]),
            "recipient".to_string(),
            Uint128::new(10),
        )
        .unwrap();
        assert!(ESCROW_BALANCE.load(&deps.storage).unwrap().is_zero());

        let err = reply_unlock(
            deps.as_mut(),
            mock_env(),
            transfer_reply(SubMsgResult::Err("recipient rejected funds".to_string())),
        )
        .unwrap_err();

        assert_eq!(
            err,
            ContractError::TransferFailed {
                reason: "recipient rejected funds".to_string()
            }
        );
        assert_eq!(ESCROW_BALANCE.load(&deps.storage).unwrap(), Uint128::new(10));
        assert!(PENDING_UNLOCK.may_load(&deps.storage).unwrap().is_none());
    }
}
