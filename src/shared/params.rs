//! Flat form payloads sent to the WHMCS API.

use crate::config::{WhmcsConfig, RESPONSE_TYPE};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

// ─── Action ──────────────────────────────────────────────────────────────────

/// Remote operation identifiers, sent as the `action` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    AddClient,
    GetClientsDetails,
    UpdateClient,
    GetProducts,
    GetClientsProducts,
    UpdateClientProduct,
    UpgradeProduct,
    AddOrder,
    GetOrders,
    CancelOrder,
    GetInvoices,
    GetTransactions,
    GetPaymentMethods,
    GetClientsDomains,
    DomainWhois,
    DomainUpdateNameservers,
    AffiliateActivate,
    GetAffiliates,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AddClient => "AddClient",
            Self::GetClientsDetails => "GetClientsDetails",
            Self::UpdateClient => "UpdateClient",
            Self::GetProducts => "GetProducts",
            Self::GetClientsProducts => "GetClientsProducts",
            Self::UpdateClientProduct => "UpdateClientProduct",
            Self::UpgradeProduct => "UpgradeProduct",
            Self::AddOrder => "AddOrder",
            Self::GetOrders => "GetOrders",
            Self::CancelOrder => "CancelOrder",
            Self::GetInvoices => "GetInvoices",
            Self::GetTransactions => "GetTransactions",
            Self::GetPaymentMethods => "GetPaymentMethods",
            Self::GetClientsDomains => "GetClientsDomains",
            Self::DomainWhois => "DomainWhois",
            Self::DomainUpdateNameservers => "DomainUpdateNameservers",
            Self::AffiliateActivate => "AffiliateActivate",
            Self::GetAffiliates => "GetAffiliates",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Parameters ──────────────────────────────────────────────────────────────

/// An ordered, flat `key → value` payload.
///
/// Optional inputs are only inserted when present and non-empty: WHMCS treats
/// an absent key differently from a key with an empty value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Parameters(BTreeMap<String, String>);

impl Parameters {
    /// Credentials, response format and `action`.
    pub fn for_action(config: &WhmcsConfig, action: Action) -> Self {
        let mut params = Self::default();
        params.insert("identifier", &config.identifier);
        params.insert("secret", &config.secret);
        params.insert("accesskey", &config.access_key);
        params.insert("responsetype", RESPONSE_TYPE);
        params.insert("action", action.as_str());
        params
    }

    pub fn insert(&mut self, key: &str, value: impl ToString) -> &mut Self {
        self.0.insert(key.to_string(), value.to_string());
        self
    }

    /// Inserts `value` only when it is `Some` and renders non-empty.
    pub fn insert_opt<V: ToString>(&mut self, key: &str, value: Option<V>) -> &mut Self {
        if let Some(v) = value {
            let rendered = v.to_string();
            if !rendered.is_empty() {
                self.0.insert(key.to_string(), rendered);
            }
        }
        self
    }

    /// Inserts a comma-joined list, skipped when the list is empty.
    pub fn insert_list<V: ToString>(&mut self, key: &str, values: &[V]) -> &mut Self {
        if !values.is_empty() {
            let joined = values
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(",");
            self.0.insert(key.to_string(), joined);
        }
        self
    }

    /// Inserts `prefix1`, `prefix2`, ... for each non-empty value, capped at `max`.
    pub fn insert_numbered(&mut self, prefix: &str, values: &[String], max: usize) -> &mut Self {
        let slots = values.iter().filter(|v| !v.is_empty()).take(max);
        for (i, value) in slots.enumerate() {
            self.0.insert(format!("{}{}", prefix, i + 1), value.clone());
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn action(&self) -> Option<&str> {
        self.get("action")
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
