//! # WHMCS SDK
//!
//! A typed Rust client for the WHMCS billing API.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core**: Parameter builders, domain records and response normalizers
//!    (always available, no I/O)
//! 2. **Auth**: AutoAuth login link signing
//! 3. **HTTP API**: `WhmcsHttp` transport and reply interpretation
//! 4. **High-Level Client**: `WhmcsClient` with nested sub-clients
//!
//! Every WHMCS action is a form POST to `includes/api.php`. The core turns
//! typed inputs into that flat payload and turns WHMCS's loosely-shaped JSON
//! back into records; a reply that cannot be normalized is an error, never a
//! half-filled record.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use whmcs_sdk::prelude::*;
//!
//! let client = WhmcsClient::builder()
//!     .base_url("https://example.com/billing")
//!     .credentials("identifier", "secret", "accesskey")
//!     .build()?;
//!
//! let products = client.products().get(&ProductQuery::default(), "KES").await?;
//! let invoices = client.invoices().get(&InvoiceQuery::for_client(17)).await?;
//! ```
//!
//! Without the `http` feature the core can be driven by any transport:
//!
//! ```rust,ignore
//! let params = product_parameters(&config, &ProductQuery::default());
//! let payload = interpret(my_transport(&params)?, "We were unable to retrieve products")?;
//! let products = normalize_products(&payload, "USD")?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Form parameters, amount/date parsing, container normalization.
pub mod shared;

/// Domain modules (vertical slices): records, wire types, conversions, builders.
pub mod domain;

/// Credentials and installation root.
pub mod config;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: Auth ────────────────────────────────────────────────────────────

/// AutoAuth: signed client-area login links.
pub mod auth;

// ── Layer 3: HTTP API ────────────────────────────────────────────────────────

/// Reply interpretation, plus the reqwest transport with the `http` feature.
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `WhmcsClient`: the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared
    pub use crate::shared::{Action, Parameters};

    // Configuration
    pub use crate::config::WhmcsConfig;

    // Domain types: clients
    pub use crate::domain::client::{Client, ClientDetails, ClientQuery};

    // Domain types: catalogue and purchased products
    pub use crate::domain::product::{Pricing, Product, ProductQuery};
    pub use crate::domain::service::{
        ClientProduct, ClientProductQuery, ProductUpgrade, ServiceUpdate, UpgradeRequest,
        UpgradeType,
    };

    // Domain types: orders, invoices, transactions
    pub use crate::domain::invoice::{Invoice, InvoiceQuery, SortOrder};
    pub use crate::domain::order::{
        BulkOrder, DomainOrder, DomainType, Order, OrderItem, OrderOptions, OrderPlacement,
        OrderQuery, ProductOrder,
    };
    pub use crate::domain::transaction::{Direction, Transaction, TransactionQuery};

    // Domain types: domains, payment methods, affiliates
    pub use crate::domain::affiliate::Affiliate;
    pub use crate::domain::payment::PaymentMethod;
    pub use crate::domain::registration::{DomainQuery, NameserverUpdate, RegisteredDomain};

    // Errors
    pub use crate::error::{FieldError, HttpError, SerializationError, WhmcsError, WhmcsResult};

    // Network
    pub use crate::network::DEFAULT_BASE_URL;

    // Auth
    pub use crate::auth::{autoauth_hash, autoauth_url};

    // HTTP
    pub use crate::http::{interpret, RawResponse, ResponseBody};

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        AffiliatesClient, ClientsClient, DomainsClient, InvoicesClient, OrdersClient,
        PaymentMethodsClient, ProductsClient, ServicesClient, TransactionsClient, WhmcsClient,
        WhmcsClientBuilder,
    };
}
