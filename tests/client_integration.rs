//! End-to-end tests for `WhmcsClient` against a mock WHMCS endpoint.
//!
//! Each test starts a `wiremock` server that answers `includes/api.php`
//! according to the `action` field of the form body.

use rust_decimal::Decimal;
use serde_json::{json, Value};
use std::str::FromStr;
use std::time::Duration;
use whmcs_sdk::error::CONNECTION_ERROR_MESSAGE;
use whmcs_sdk::prelude::*;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_PATH: &str = "/includes/api.php";

fn client_for(server: &MockServer) -> WhmcsClient {
    WhmcsClient::builder()
        .base_url(&server.uri())
        .credentials("test_identifier", "test_secret", "test_access")
        .build()
        .expect("client should build")
}

async fn mock_action(server: &MockServer, action: &str, reply: Value) {
    Mock::given(method("POST"))
        .and(path(API_PATH))
        .and(body_string_contains(format!("action={}", action)))
        .respond_with(ResponseTemplate::new(200).set_body_json(reply))
        .expect(1)
        .mount(server)
        .await;
}

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

// ─── Requests ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn sends_credentials_and_form_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(API_PATH))
        .and(body_string_contains("identifier=test_identifier"))
        .and(body_string_contains("secret=test_secret"))
        .and(body_string_contains("accesskey=test_access"))
        .and(body_string_contains("responsetype=json"))
        .and(body_string_contains("action=AddClient"))
        .and(body_string_contains("email=jane%40example.com"))
        .and(body_string_contains("firstname=Jane"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"result": "success", "clientid": 17})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let details = ClientDetails {
        first_name: Some("Jane".into()),
        email: Some("jane@example.com".into()),
        ..Default::default()
    };
    let id = client_for(&server).clients().create(&details).await.unwrap();
    assert_eq!(id, 17);
}

// ─── Normalized replies ──────────────────────────────────────────────────────

#[tokio::test]
async fn products_are_priced_in_requested_currency() {
    let server = MockServer::start().await;
    mock_action(
        &server,
        "GetProducts",
        json!({
            "result": "success",
            "totalresults": 1,
            "products": {"product": [{
                "pid": 92,
                "gid": 4,
                "type": "other",
                "name": "Lifetime Account",
                "module": "",
                "paytype": "onetime",
                "pricing": {
                    "KES": {"prefix": "KES ", "monthly": "9900.00", "annually": "-1.00"},
                    "USD": {"prefix": "$", "monthly": "99.00", "annually": "-1.00"}
                }
            }]}
        }),
    )
    .await;

    let products = client_for(&server)
        .products()
        .get(&ProductQuery::default(), "kes")
        .await
        .unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].id, 92);
    assert_eq!(products[0].pricing.monthly, Some(dec("9900.00")));
    assert_eq!(products[0].pricing_table.len(), 2);
}

#[tokio::test]
async fn empty_list_replies_normalize_to_nothing() {
    let server = MockServer::start().await;
    mock_action(
        &server,
        "GetClientsDomains",
        json!({"result": "success", "totalresults": 0, "domains": ""}),
    )
    .await;

    let domains = client_for(&server)
        .domains()
        .get(&DomainQuery::for_client(17))
        .await
        .unwrap();
    assert!(domains.is_empty());
}

#[tokio::test]
async fn invoices_are_joined_with_orders_and_transactions() {
    let server = MockServer::start().await;
    mock_action(
        &server,
        "GetInvoices",
        json!({
            "result": "success",
            "invoices": {"invoice": [
                {"id": 402, "userid": 17, "date": "2021-03-14", "duedate": "2021-03-21",
                 "subtotal": "99.00", "credit": "0.00", "tax": "0.00", "tax2": "0.00",
                 "total": "99.00", "taxrate": "0.00", "taxrate2": "0.00", "status": "Paid"},
                {"id": 403, "userid": 17, "date": "2021-04-14", "duedate": "2021-04-21",
                 "subtotal": "5.00", "credit": "0.00", "tax": "0.00", "tax2": "0.00",
                 "total": "5.00", "taxrate": "0.00", "taxrate2": "0.00", "status": "Unpaid"}
            ]}
        }),
    )
    .await;
    mock_action(
        &server,
        "GetOrders",
        json!({
            "result": "success",
            "orders": {"order": [{
                "id": 80, "userid": 17, "amount": "99.00", "invoiceid": 402,
                "status": "Active", "lineitems": {"lineitem": [
                    {"type": "product", "relid": 311, "product": "Lifetime Account",
                     "billingcycle": "One Time", "amount": "$99.00 USD", "status": "Active"}
                ]}
            }]}
        }),
    )
    .await;
    mock_action(
        &server,
        "GetTransactions",
        json!({
            "result": "success",
            "transactions": {"transaction": [
                {"id": 55, "userid": 17, "invoiceid": 402, "gateway": "mpesa",
                 "amountin": "99.00", "amountout": "0.00", "transid": "QCH7ABC123"}
            ]}
        }),
    )
    .await;

    let invoices = client_for(&server)
        .invoices()
        .get(&InvoiceQuery::for_client(17))
        .await
        .unwrap();

    // 403 has no order and is left out.
    assert_eq!(invoices.len(), 1);
    let invoice = &invoices[0];
    assert_eq!(invoice.id, 402);
    assert_eq!(invoice.total, dec("99.00"));
    assert_eq!(invoice.order.id, 80);
    assert_eq!(invoice.order.items[0].amount, dec("99.00"));
    assert_eq!(invoice.transactions.len(), 1);
    assert_eq!(invoice.transactions[0].direction, Direction::Deposit);
}

#[tokio::test]
async fn service_order_returns_placement() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(API_PATH))
        .and(body_string_contains("action=AddOrder"))
        .and(body_string_contains("pid=92"))
        .and(body_string_contains("promocode=LAUNCH"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": "success",
            "orderid": 81,
            "serviceids": "312",
            "addonids": "",
            "domainids": "",
            "invoiceid": 404
        })))
        .expect(1)
        .mount(&server)
        .await;

    let order = ProductOrder {
        client_id: 17,
        product_id: 92,
        payment_method: "mpesa".into(),
        billing_cycle: None,
        options: OrderOptions {
            promo_code: Some("LAUNCH".into()),
            ..Default::default()
        },
    };
    let placement = client_for(&server).services().order(&order).await.unwrap();
    assert_eq!(placement.order_id, 81);
    assert_eq!(placement.invoice_id, Some(404));
    assert_eq!(placement.service_ids, vec![312]);
    assert!(placement.domain_ids.is_empty());
}

#[tokio::test]
async fn whois_reports_availability() {
    let server = MockServer::start().await;
    mock_action(
        &server,
        "DomainWhois",
        json!({"result": "success", "status": "available", "whois": ""}),
    )
    .await;

    let available = client_for(&server)
        .domains()
        .is_available("example.co.ke")
        .await
        .unwrap();
    assert!(available);
}

#[tokio::test]
async fn cancel_order_succeeds_on_bare_success() {
    let server = MockServer::start().await;
    mock_action(&server, "CancelOrder", json!({"result": "success"})).await;
    client_for(&server).orders().cancel(81).await.unwrap();
}

// ─── Failures ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn remote_error_message_is_surfaced() {
    let server = MockServer::start().await;
    mock_action(
        &server,
        "GetClientsDetails",
        json!({"result": "error", "message": "Client Not Found"}),
    )
    .await;

    let err = client_for(&server)
        .clients()
        .get(&ClientQuery::by_id(999))
        .await
        .unwrap_err();
    assert_eq!(err, WhmcsError::Api("Client Not Found".into()));
}

#[tokio::test]
async fn non_json_reply_uses_default_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(API_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .payment_methods()
        .get()
        .await
        .unwrap_err();
    assert_eq!(
        err,
        WhmcsError::Api("We were unable to retrieve payment methods".into())
    );
}

#[tokio::test]
async fn malformed_element_is_a_serialization_error() {
    let server = MockServer::start().await;
    mock_action(
        &server,
        "GetAffiliates",
        json!({
            "result": "success",
            "affiliates": {"affiliate": [{"id": 3, "balance": "n/a", "withdrawn": "0.00"}]}
        }),
    )
    .await;

    let err = client_for(&server).affiliates().get(None).await.unwrap_err();
    match err {
        WhmcsError::Serialization(e) => {
            assert_eq!(e.target, "Affiliate");
            assert_eq!(e.raw["id"], json!(3));
        }
        other => panic!("expected serialization error, got {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_host_is_a_connection_error() {
    let client = WhmcsClient::builder()
        .base_url("http://127.0.0.1:1")
        .timeout(Duration::from_secs(2))
        .build()
        .unwrap();

    let err = client.payment_methods().get().await.unwrap_err();
    assert_eq!(err, WhmcsError::Connection(CONNECTION_ERROR_MESSAGE.into()));
    assert_eq!(err.message(), "Could not reach whmcs server.");
}

// ─── AutoAuth ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn pay_url_points_at_invoice() {
    let client = WhmcsClient::builder()
        .base_url("https://example.com/billing")
        .credentials("id", "secret", "access")
        .autoauth_key("autoauth-key")
        .build()
        .unwrap();

    let url = client.invoices().pay_url(402, "jane@example.com").unwrap();
    assert!(url.starts_with("https://example.com/billing/dologin.php?email=jane%40example.com&timestamp="));
    assert!(url.ends_with("&goto=viewinvoice.php%3Fid%3D402"));

    let hash = url
        .split('&')
        .find_map(|kv| kv.strip_prefix("hash="))
        .unwrap();
    assert_eq!(hash.len(), 40);
}
