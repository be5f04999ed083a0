//! Request parameters for `GetInvoices`.

use crate::config::WhmcsConfig;
use crate::shared::{Action, Parameters};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

/// Filters for `GetInvoices`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvoiceQuery {
    pub client_id: Option<i64>,
    /// `Paid`, `Unpaid`, `Cancelled`, ...
    pub status: Option<String>,
    /// Column to sort by, e.g. `duedate`.
    pub order_by: Option<String>,
    pub order: Option<SortOrder>,
}

impl InvoiceQuery {
    pub fn for_client(client_id: i64) -> Self {
        Self {
            client_id: Some(client_id),
            ..Default::default()
        }
    }
}

pub fn invoice_parameters(config: &WhmcsConfig, query: &InvoiceQuery) -> Parameters {
    let mut params = Parameters::for_action(config, Action::GetInvoices);
    params
        .insert_opt("userid", query.client_id)
        .insert_opt("status", query.status.as_deref())
        .insert_opt("orderby", query.order_by.as_deref())
        .insert_opt("order", query.order.map(|o| o.as_str()));
    params
}
