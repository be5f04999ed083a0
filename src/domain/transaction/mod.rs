//! Transaction domain: payments recorded against invoices.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod params;
pub mod wire;

use crate::error::SerializationError;
use crate::shared::normalize;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

pub use params::{transaction_parameters, TransactionQuery};

/// Money flowing to (`Deposit`) or from (`Withdrawal`) the client account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Deposit,
    Withdrawal,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Deposit => "Deposit",
            Self::Withdrawal => "Withdrawal",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub client_id: Option<i64>,
    pub invoice_id: Option<i64>,
    pub refund_id: Option<i64>,
    /// Gateway-side reference.
    pub transaction_id: Option<String>,
    /// Gateway module name.
    pub payment_method: Option<String>,
    pub description: Option<String>,
    pub date: Option<NaiveDateTime>,
    pub amount: Decimal,
    pub direction: Direction,
    pub fees: Option<Decimal>,
    pub rate: Option<Decimal>,
}

/// `GetTransactions` reply → transactions.
pub fn normalize_transactions(payload: &Value) -> Result<Vec<Transaction>, SerializationError> {
    normalize::normalize_list::<wire::TransactionResponse, Transaction>(
        payload,
        "transactions",
        "transaction",
    )
}
