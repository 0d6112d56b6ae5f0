//! Wrapped token ledgers.
//!
//! Each wrapped token is keyed by its derived address and keeps its own
//! balances and total supply. Only the token's recorded `minter` can mint or
//! burn; holders can move balances between themselves with [`transfer`].
//!
//! Invariant: the sum of all holder balances equals `total_supply`.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, StdResult, Storage, Uint128};
use cw_storage_plus::Map;

use crate::error::ContractError;

/// Decimals of every wrapped token
pub const WRAPPED_TOKEN_DECIMALS: u8 = 18;

/// Wrapped token metadata and supply
#[cw_serde]
pub struct WrappedToken {
    /// Derived token address (0x-prefixed hex)
    pub address: String,
    pub coin_id: u64,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub total_supply: Uint128,
    /// The only address allowed to mint and burn
    pub minter: Addr,
}

/// Key: token address
const WRAPPED_TOKENS: Map<&str, WrappedToken> = Map::new("wrapped_tokens");

/// Key: (token address, holder)
const WRAPPED_BALANCES: Map<(&str, &Addr), Uint128> = Map::new("wrapped_balances");

pub fn exists(storage: &dyn Storage, address: &str) -> bool {
    WRAPPED_TOKENS.has(storage, address)
}

pub fn load(storage: &dyn Storage, address: &str) -> StdResult<WrappedToken> {
    WRAPPED_TOKENS.load(storage, address)
}

pub fn may_load(storage: &dyn Storage, address: &str) -> StdResult<Option<WrappedToken>> {
    WRAPPED_TOKENS.may_load(storage, address)
}

pub fn balance_of(storage: &dyn Storage, address: &str, holder: &Addr) -> StdResult<Uint128> {
    Ok(WRAPPED_BALANCES
        .may_load(storage, (address, holder))?
        .unwrap_or_default())
}

/// Create an empty token whose supply can only be changed by `minter`.
pub fn deploy(
    storage: &mut dyn Storage,
    address: &str,
    coin_id: u64,
    name: &str,
    symbol: &str,
    minter: &Addr,
) -> Result<WrappedToken, ContractError> {
    if exists(storage, address) {
        return Err(ContractError::TokenAddressTaken {
            address: address.to_string(),
        });
    }

    let token = WrappedToken {
        address: address.to_string(),
        coin_id,
        name: name.to_string(),
        symbol: symbol.to_string(),
        decimals: WRAPPED_TOKEN_DECIMALS,
        total_supply: Uint128::zero(),
        minter: minter.clone(),
    };
    WRAPPED_TOKENS.save(storage, address, &token)?;
    Ok(token)
}

/// Credit `to` and grow total supply by `amount`.
pub fn mint(
    storage: &mut dyn Storage,
    address: &str,
    caller: &Addr,
    to: &Addr,
    amount: Uint128,
) -> Result<Uint128, ContractError> {
    let mut token = load(storage, address)?;
    if *caller != token.minter {
        return Err(ContractError::NotMinter);
    }

    let balance = balance_of(storage, address, to)?.checked_add(amount)?;
    token.total_supply = token.total_supply.checked_add(amount)?;

    WRAPPED_BALANCES.save(storage, (address, to), &balance)?;
    WRAPPED_TOKENS.save(storage, address, &token)?;
    Ok(balance)
}

/// Debit `from` and shrink total supply by `amount`.
pub fn burn(
    storage: &mut dyn Storage,
    address: &str,
    caller: &Addr,
    from: &Addr,
    amount: Uint128,
) -> Result<Uint128, ContractError> {
    let mut token = load(storage, address)?;
    if *caller != token.minter {
        return Err(ContractError::NotMinter);
    }

    let balance = debit(storage, address, from, amount)?;
    token.total_supply = token.total_supply.checked_sub(amount)?;
    WRAPPED_TOKENS.save(storage, address, &token)?;
    Ok(balance)
}

/// Move `amount` from one holder to another. Supply is unchanged.
pub fn transfer(
    storage: &mut dyn Storage,
    address: &str,
    from: &Addr,
    to: &Addr,
    amount: Uint128,
) -> Result<(), ContractError> {
    // Token must exist even for a zero transfer
    load(storage, address)?;

    debit(storage, address, from, amount)?;
    let credited = balance_of(storage, address, to)?.checked_add(amount)?;
    WRAPPED_BALANCES.save(storage, (address, to), &credited)?;
    Ok(())
}

fn debit(
    storage: &mut dyn Storage,
    address: &str,
    holder: &Addr,
    amount: Uint128,
) -> Result<Uint128, ContractError> {
    let balance = balance_of(storage, address, holder)?;
    let remaining = balance
        .checked_sub(amount)
        .map_err(|_| ContractError::InsufficientBalance {
            balance,
            required: amount,
        })?;

    if remaining.is_zero() {
        WRAPPED_BALANCES.remove(storage, (address, holder));
    } else {
        WRAPPED_BALANCES.save(storage, (address, holder), &remaining)?;
    }
    Ok(remaining)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::MockStorage;
    use cosmwasm_std::Order;

    const TOKEN: &str = "0x343c43a37d37dff08ae8c4a11544c718abb4fcf8";

    fn minter() -> Addr {
        Addr::unchecked("bridge")
    }

    fn setup() -> MockStorage {
        let mut storage = MockStorage::new();
        deploy(&mut storage, TOKEN, 111, "Bridge Token", "BRG", &minter()).unwrap();
        storage
    }

    fn sum_of_balances(storage: &MockStorage) -> Uint128 {
        WRAPPED_BALANCES
            .prefix(TOKEN)
            .range(storage, None, None, Order::Ascending)
            .map(|item| item.unwrap().1)
            .fold(Uint128::zero(), |acc, balance| acc + balance)
    }

    #[test]
    fn test_deploy_twice_fails() {
        let mut storage = setup();
        let err = deploy(&mut storage, TOKEN, 222, "Other", "OTH", &minter()).unwrap_err();
        assert_eq!(
            err,
            ContractError::TokenAddressTaken {
                address: TOKEN.to_string()
            }
        );
        assert_eq!(load(&storage, TOKEN).unwrap().coin_id, 111);
    }

    #[test]
    fn test_mint_and_burn_conserve_supply() {
        let mut storage = setup();
        let alice = Addr::unchecked("alice");
        let bob = Addr::unchecked("bob");

        mint(&mut storage, TOKEN, &minter(), &alice, Uint128::new(10)).unwrap();
        mint(&mut storage, TOKEN, &minter(), &bob, Uint128::new(7)).unwrap();
        burn(&mut storage, TOKEN, &minter(), &alice, Uint128::new(5)).unwrap();

        let token = load(&storage, TOKEN).unwrap();
        assert_eq!(token.total_supply, Uint128::new(12));
        assert_eq!(sum_of_balances(&storage), token.total_supply);
        assert_eq!(balance_of(&storage, TOKEN, &alice).unwrap(), Uint128::new(5));
    }

    #[test]
    fn test_burn_more_than_balance_fails() {
        let mut storage = setup();
        let alice = Addr::unchecked("alice");
        mint(&mut storage, TOKEN, &minter(), &alice, Uint128::new(5)).unwrap();

        let err = burn(&mut storage, TOKEN, &minter(), &alice, Uint128::new(10)).unwrap_err();
        assert_eq!(
            err,
            ContractError::InsufficientBalance {
                balance: Uint128::new(5),
                required: Uint128::new(10),
            }
        );
        assert_eq!(balance_of(&storage, TOKEN, &alice).unwrap(), Uint128::new(5));
        assert_eq!(load(&storage, TOKEN).unwrap().total_supply, Uint128::new(5));
    }

    #[test]
    fn test_only_minter_can_mint_or_burn() {
        let mut storage = setup();
        let alice = Addr::unchecked("alice");

        assert_eq!(
            mint(&mut storage, TOKEN, &alice, &alice, Uint128::new(1)),
            Err(ContractError::NotMinter)
        );
        mint(&mut storage, TOKEN, &minter(), &alice, Uint128::new(1)).unwrap();
        assert_eq!(
            burn(&mut storage, TOKEN, &alice, &alice, Uint128::new(1)),
            Err(ContractError::NotMinter)
        );
    }

    #[test]
    fn test_transfer_moves_balance() {
        let mut storage = setup();
        let alice = Addr::unchecked("alice");
        let bob = Addr::unchecked("bob");
        mint(&mut storage, TOKEN, &minter(), &alice, Uint128::new(10)).unwrap();

        transfer(&mut storage, TOKEN, &alice, &bob, Uint128::new(4)).unwrap();
        assert_eq!(balance_of(&storage, TOKEN, &alice).unwrap(), Uint128::new(6));
        assert_eq!(balance_of(&storage, TOKEN, &bob).unwrap(), Uint128::new(4));
        assert_eq!(sum_of_balances(&storage), Uint128::new(10));

        let err = transfer(&mut storage, TOKEN, &bob, &alice, Uint128::new(5)).unwrap_err();
        assert!(matches!(err, ContractError::InsufficientBalance { .. }));
    }

    #[test]
    fn test_self_transfer_keeps_balance() {
        let mut storage = setup();
        let alice = Addr::unchecked("alice");
        mint(&mut storage, TOKEN, &minter(), &alice, Uint128::new(3)).unwrap();

        transfer(&mut storage, TOKEN, &alice, &alice, Uint128::new(3)).unwrap();
        assert_eq!(balance_of(&storage, TOKEN, &alice).unwrap(), Uint128::new(3));
    }
}
