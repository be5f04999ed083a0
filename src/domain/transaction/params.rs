//! Request parameters for `GetTransactions`.

use crate::config::WhmcsConfig;
use crate::shared::{Action, Parameters};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionQuery {
    pub client_id: Option<i64>,
    pub invoice_id: Option<i64>,
    /// Gateway-side reference.
    pub transaction_id: Option<String>,
}

impl TransactionQuery {
    pub fn for_client(client_id: i64) -> Self {
        Self {
            client_id: Some(client_id),
            ..Default::default()
        }
    }
}

pub fn transaction_parameters(config: &WhmcsConfig, query: &TransactionQuery) -> Parameters {
    let mut params = Parameters::for_action(config, Action::GetTransactions);
    params
        .insert_opt("clientid", query.client_id)
        .insert_opt("invoiceid", query.invoice_id)
        .insert_opt("transid", query.transaction_id.as_deref());
    params
}
