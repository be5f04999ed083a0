//! Transactions sub-client.

use super::params::transaction_parameters;
use super::{normalize_transactions, Transaction, TransactionQuery};
use crate::client::WhmcsClient;
use crate::error::WhmcsError;

const RETRIEVE_ERROR: &str = "We were unable to retrieve your transactions";

pub struct Transactions<'a> {
    pub(crate) client: &'a WhmcsClient,
}

impl<'a> Transactions<'a> {
    pub async fn get(&self, query: &TransactionQuery) -> Result<Vec<Transaction>, WhmcsError> {
        let params = transaction_parameters(self.client.config(), query);
        let payload = self.client.call(&params, RETRIEVE_ERROR).await?;
        Ok(normalize_transactions(&payload)?)
    }
}
