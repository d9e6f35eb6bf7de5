//! Catalog module
//!
//! Process-wide reference data: accounts, banking numbers, items, and the
//! access-token binding table. Constructed once at startup and shared
//! read-only across requests; nothing here mutates after construction.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::domain::{Account, AccountNumber, AccountSubtype, AccountType, Balances, Item};

/// Immutable reference data for the simulated provider.
#[derive(Debug, Clone)]
pub struct Catalog {
    accounts: HashMap<String, Account>,
    numbers: HashMap<String, AccountNumber>,
    items: HashMap<String, Item>,
    /// access token -> item id, fixed at construction
    tokens: HashMap<String, String>,
}

impl Catalog {
    /// Build a catalog from explicit reference data.
    pub fn new(
        accounts: Vec<Account>,
        numbers: Vec<AccountNumber>,
        items: Vec<Item>,
        token_bindings: Vec<(String, String)>,
    ) -> Self {
        Self {
            accounts: accounts
                .into_iter()
                .map(|a| (a.account_id.clone(), a))
                .collect(),
            numbers: numbers
                .into_iter()
                .map(|n| (n.account_id.clone(), n))
                .collect(),
            items: items.into_iter().map(|i| (i.item_id.clone(), i)).collect(),
            tokens: token_bindings.into_iter().collect(),
        }
    }

    /// The built-in demo catalog: three accounts across two items, with
    /// two working access tokens. The credit card carries no banking
    /// numbers, so number lookups filter it out.
    pub fn seed() -> Self {
        let accounts = vec![
            Account {
                account_id: "acc_1".to_string(),
                account_type: AccountType::Depository,
                subtype: AccountSubtype::Checking,
                name: "Everyday Checking".to_string(),
                official_name: "Everyday Checking Plus".to_string(),
                mask: "1234".to_string(),
                balances: Balances {
                    available: Decimal::new(5_000_75, 2),
                    current: Decimal::new(5_100_75, 2),
                    limit: None,
                    iso_currency_code: "USD".to_string(),
                    unofficial_currency_code: None,
                },
            },
            Account {
                account_id: "acc_2".to_string(),
                account_type: AccountType::Depository,
                subtype: AccountSubtype::Savings,
                name: "High-Yield Savings".to_string(),
                official_name: "High-Yield Online Savings".to_string(),
                mask: "5678".to_string(),
                balances: Balances {
                    available: Decimal::new(12_500_00, 2),
                    current: Decimal::new(12_500_00, 2),
                    limit: None,
                    iso_currency_code: "USD".to_string(),
                    unofficial_currency_code: None,
                },
            },
            Account {
                account_id: "acc_3".to_string(),
                account_type: AccountType::Credit,
                subtype: AccountSubtype::CreditCard,
                name: "Rewards Card".to_string(),
                official_name: "Rewards Signature Card".to_string(),
                mask: "9012".to_string(),
                balances: Balances {
                    available: Decimal::new(7_500_00, 2),
                    current: Decimal::new(7_500_00, 2),
                    limit: Some(Decimal::new(10_000_00, 2)),
                    iso_currency_code: "USD".to_string(),
                    unofficial_currency_code: None,
                },
            },
        ];

        let numbers = vec![
            AccountNumber {
                account_id: "acc_1".to_string(),
                account: "1111222233334444".to_string(),
                routing: "011401533".to_string(),
                wire_routing: "021000021".to_string(),
            },
            AccountNumber {
                account_id: "acc_2".to_string(),
                account: "5555666677778888".to_string(),
                routing: "011401533".to_string(),
                wire_routing: "021000021".to_string(),
            },
        ];

        let items = vec![
            Item {
                item_id: "item_1".to_string(),
                account_ids: vec!["acc_1".to_string(), "acc_2".to_string()],
            },
            Item {
                item_id: "item_2".to_string(),
                account_ids: vec!["acc_3".to_string()],
            },
        ];

        let token_bindings = vec![
            ("access-token-1".to_string(), "item_1".to_string()),
            ("access-token-2".to_string(), "item_2".to_string()),
        ];

        Self::new(accounts, numbers, items, token_bindings)
    }

    /// Resolve an access token to its item's accounts, in item order.
    ///
    /// Unknown tokens resolve to an empty list, never an error.
    pub fn accounts_for_token(&self, access_token: &str) -> Vec<Account> {
        self.account_ids_for_token(access_token)
            .iter()
            .filter_map(|id| self.accounts.get(id.as_str()).cloned())
            .collect()
    }

    /// Resolve an access token to the banking numbers of its accounts,
    /// skipping accounts without registered numbers.
    pub fn numbers_for_token(&self, access_token: &str) -> Vec<AccountNumber> {
        self.account_ids_for_token(access_token)
            .iter()
            .filter_map(|id| self.numbers.get(id.as_str()).cloned())
            .collect()
    }

    /// Account IDs owned by the item an access token is bound to.
    pub fn account_ids_for_token(&self, access_token: &str) -> &[String] {
        self.tokens
            .get(access_token)
            .and_then(|item_id| self.items.get(item_id))
            .map(|item| item.account_ids.as_slice())
            .unwrap_or(&[])
    }
}
