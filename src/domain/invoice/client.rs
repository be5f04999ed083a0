//! Invoices sub-client: invoice listing and payment links.

use super::params::invoice_parameters;
use super::{normalize_invoices, Invoice, InvoiceQuery};
use crate::auth;
use crate::client::WhmcsClient;
use crate::domain::order::OrderQuery;
use crate::domain::transaction::TransactionQuery;
use crate::error::WhmcsError;

const RETRIEVE_ERROR: &str = "We were unable to retrieve your invoices";

pub struct Invoices<'a> {
    pub(crate) client: &'a WhmcsClient,
}

impl<'a> Invoices<'a> {
    /// Fetches a client's invoices together with their orders and payments.
    ///
    /// Issues three requests: `GetInvoices`, `GetOrders` and `GetTransactions`.
    pub async fn get(&self, query: &InvoiceQuery) -> Result<Vec<Invoice>, WhmcsError> {
        let params = invoice_parameters(self.client.config(), query);
        let payload = self.client.call(&params, RETRIEVE_ERROR).await?;

        let orders = self
            .client
            .orders()
            .get(&OrderQuery {
                client_id: query.client_id,
                ..Default::default()
            })
            .await?;
        let transactions = self
            .client
            .transactions()
            .get(&TransactionQuery {
                client_id: query.client_id,
                ..Default::default()
            })
            .await?;

        Ok(normalize_invoices(&payload, &orders, &transactions)?)
    }

    /// AutoAuth link that logs `email` in and opens the invoice, signed now.
    pub fn pay_url(&self, invoice_id: i64, email: &str) -> Result<String, WhmcsError> {
        let timestamp = chrono::Utc::now().timestamp();
        auth::autoauth_url(
            self.client.config(),
            email,
            timestamp,
            &auth::invoice_target(invoice_id),
        )
    }
}
