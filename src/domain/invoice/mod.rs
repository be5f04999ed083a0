//! Invoice domain: invoices cross-referenced with their order and payments.
//!
//! `GetInvoices` returns bare invoices. Each one is joined with the order that
//! generated it and the transactions recorded against it, both fetched
//! separately by the caller.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod params;
pub mod wire;

use crate::domain::order::Order;
use crate::domain::transaction::Transaction;
use crate::error::SerializationError;
use crate::shared::normalize;
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use params::{invoice_parameters, InvoiceQuery, SortOrder};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: i64,
    pub invoice_number: Option<String>,
    pub client_id: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub date_created: Option<NaiveDate>,
    pub date_due: Option<NaiveDate>,
    pub date_paid: Option<NaiveDateTime>,
    pub last_capture_attempt: Option<NaiveDateTime>,
    pub sub_total: Decimal,
    pub credit: Decimal,
    pub tax: Decimal,
    pub tax2: Decimal,
    pub total: Decimal,
    pub tax_rate: Decimal,
    pub tax_rate2: Decimal,
    pub status: Option<String>,
    pub payment_method: Option<String>,
    pub notes: Option<String>,
    /// The order whose `invoice_id` matches this invoice.
    pub order: Order,
    pub transactions: Vec<Transaction>,
}

/// `GetInvoices` reply → invoices, each joined with its order and transactions.
///
/// Every invoice is converted first, so a malformed one fails the batch even
/// when it would be left out. Invoices with no matching order are left out.
/// When several orders match, the first one wins. Transactions keep their
/// input order.
pub fn normalize_invoices(
    payload: &Value,
    orders: &[Order],
    transactions: &[Transaction],
) -> Result<Vec<Invoice>, SerializationError> {
    normalize::normalize_list_with(payload, "invoices", "invoice", |raw| {
        let wire = normalize::decode_element::<wire::InvoiceResponse, Invoice>(raw)?;
        let header = convert::InvoiceHeader::try_from(wire)
            .map_err(|e| normalize::element_error::<Invoice>(raw, e))?;
        let id = header.id;

        let Some(order) = orders.iter().find(|o| o.invoice_id == Some(id)) else {
            tracing::debug!(invoice_id = id, "Skipping invoice without a matching order");
            return Ok(None);
        };
        let paid = transactions
            .iter()
            .filter(|t| t.invoice_id == Some(id))
            .cloned()
            .collect();

        Ok(Some(header.attach(order.clone(), paid)))
    })
}
