//! Conversion: InvoiceResponse → InvoiceHeader, then header + order/transactions → Invoice.

use super::wire::InvoiceResponse;
use super::Invoice;
use crate::domain::order::Order;
use crate::domain::transaction::Transaction;
use crate::error::FieldError;
use crate::shared::{parse_amount, parse_date, parse_datetime, required};
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

/// Every invoice field WHMCS sends, validated; order and payments come later.
pub(super) struct InvoiceHeader {
    pub(super) id: i64,
    invoice_number: Option<String>,
    client_id: Option<i64>,
    first_name: Option<String>,
    last_name: Option<String>,
    date_created: Option<NaiveDate>,
    date_due: Option<NaiveDate>,
    date_paid: Option<NaiveDateTime>,
    last_capture_attempt: Option<NaiveDateTime>,
    sub_total: Decimal,
    credit: Decimal,
    tax: Decimal,
    tax2: Decimal,
    total: Decimal,
    tax_rate: Decimal,
    tax_rate2: Decimal,
    status: Option<String>,
    payment_method: Option<String>,
    notes: Option<String>,
}

impl TryFrom<InvoiceResponse> for InvoiceHeader {
    type Error = FieldError;

    fn try_from(source: InvoiceResponse) -> Result<Self, Self::Error> {
        Ok(InvoiceHeader {
            id: required("id", source.id)?,
            invoice_number: source.invoicenum,
            client_id: source.userid,
            first_name: source.firstname,
            last_name: source.lastname,
            date_created: parse_date(source.date.as_deref()),
            date_due: parse_date(source.duedate.as_deref()),
            date_paid: parse_datetime(source.datepaid.as_deref()),
            last_capture_attempt: parse_datetime(source.last_capture_attempt.as_deref()),
            sub_total: parse_amount("subtotal", source.subtotal.as_deref())?,
            credit: parse_amount("credit", source.credit.as_deref())?,
            tax: parse_amount("tax", source.tax.as_deref())?,
            tax2: parse_amount("tax2", source.tax2.as_deref())?,
            total: parse_amount("total", source.total.as_deref())?,
            tax_rate: parse_amount("taxrate", source.taxrate.as_deref())?,
            tax_rate2: parse_amount("taxrate2", source.taxrate2.as_deref())?,
            status: source.status,
            payment_method: source.paymentmethod,
            notes: source.notes,
        })
    }
}

impl InvoiceHeader {
    pub(super) fn attach(self, order: Order, transactions: Vec<Transaction>) -> Invoice {
        Invoice {
            id: self.id,
            invoice_number: self.invoice_number,
            client_id: self.client_id,
            first_name: self.first_name,
            last_name: self.last_name,
            date_created: self.date_created,
            date_due: self.date_due,
            date_paid: self.date_paid,
            last_capture_attempt: self.last_capture_attempt,
            sub_total: self.sub_total,
            credit: self.credit,
            tax: self.tax,
            tax2: self.tax2,
            total: self.total,
            tax_rate: self.tax_rate,
            tax_rate2: self.tax_rate2,
            status: self.status,
            payment_method: self.payment_method,
            notes: self.notes,
            order,
            transactions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::normalize_invoices;
    use crate::domain::order::normalize_orders;
    use crate::domain::transaction::normalize_transactions;
    use crate::domain::order::Order;
    use crate::domain::transaction::Transaction;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use serde_json::{json, Value};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn invoice(id: i64) -> Value {
        json!({
            "id": id,
            "userid": 17,
            "firstname": "Jane",
            "lastname": "Wanjiru",
            "companyname": "",
            "invoicenum": "",
            "date": "2021-03-14",
            "duedate": "2021-03-21",
            "datepaid": "2021-03-15 10:00:00",
            "last_capture_attempt": "0000-00-00 00:00:00",
            "subtotal": "99.00",
            "credit": "0.00",
            "tax": "0.00",
            "tax2": "0.00",
            "total": "99.00",
            "taxrate": "0.00",
            "taxrate2": "0.00",
            "status": "Paid",
            "paymentmethod": "mpesa",
            "notes": "",
            "currencycode": "USD",
            "currencyprefix": "$",
            "currencysuffix": " USD"
        })
    }

    fn order(id: i64, invoice_id: i64) -> Order {
        let payload = json!({"orders": {"order": [{
            "id": id,
            "userid": 17,
            "amount": "99.00",
            "invoiceid": invoice_id,
            "lineitems": []
        }]}});
        normalize_orders(&payload).unwrap().remove(0)
    }

    fn transaction(id: i64, invoice_id: i64) -> Transaction {
        let payload = json!({"transactions": {"transaction": [{
            "id": id,
            "invoiceid": invoice_id,
            "amountin": "99.00",
            "amountout": "0.00"
        }]}});
        normalize_transactions(&payload).unwrap().remove(0)
    }

    fn reply(invoices: Vec<Value>) -> Value {
        json!({"result": "success", "invoices": {"invoice": invoices}})
    }

    #[test]
    fn test_invoice_joins_order_and_transactions() {
        let orders = vec![order(80, 402), order(81, 403)];
        let transactions = vec![transaction(55, 402), transaction(56, 403), transaction(57, 402)];
        let invoices = normalize_invoices(&reply(vec![invoice(402)]), &orders, &transactions).unwrap();

        assert_eq!(invoices.len(), 1);
        let inv = &invoices[0];
        assert_eq!(inv.id, 402);
        assert_eq!(inv.client_id, Some(17));
        assert_eq!(inv.first_name.as_deref(), Some("Jane"));
        assert_eq!(inv.last_name.as_deref(), Some("Wanjiru"));
        assert_eq!(inv.invoice_number.as_deref(), Some(""));
        assert_eq!(inv.date_created, NaiveDate::from_ymd_opt(2021, 3, 14));
        assert_eq!(inv.date_due, NaiveDate::from_ymd_opt(2021, 3, 21));
        assert!(inv.date_paid.is_some());
        assert_eq!(inv.last_capture_attempt, None);
        assert_eq!(inv.sub_total, dec("99.00"));
        assert_eq!(inv.credit, Decimal::ZERO);
        assert_eq!(inv.total, dec("99.00"));
        assert_eq!(inv.tax_rate, Decimal::ZERO);
        assert_eq!(inv.status.as_deref(), Some("Paid"));
        assert_eq!(inv.payment_method.as_deref(), Some("mpesa"));
        assert_eq!(inv.order.id, 80);
        let tx_ids: Vec<i64> = inv.transactions.iter().map(|t| t.id).collect();
        assert_eq!(tx_ids, vec![55, 57]);
    }

    #[test]
    fn test_invoice_without_order_is_excluded() {
        let orders = vec![order(80, 402)];
        let invoices =
            normalize_invoices(&reply(vec![invoice(402), invoice(999)]), &orders, &[]).unwrap();
        assert_eq!(invoices.len(), 1);
        assert_eq!(invoices[0].id, 402);
        assert!(invoices[0].transactions.is_empty());
    }

    #[test]
    fn test_first_matching_order_wins() {
        let orders = vec![order(80, 402), order(90, 402)];
        let invoices = normalize_invoices(&reply(vec![invoice(402)]), &orders, &[]).unwrap();
        assert_eq!(invoices[0].order.id, 80);
    }

    #[test]
    fn test_empty_containers() {
        for payload in [
            json!({"result": "success", "invoices": []}),
            json!({"result": "success", "invoices": ""}),
            json!({"result": "success"}),
        ] {
            assert!(normalize_invoices(&payload, &[order(80, 402)], &[]).unwrap().is_empty());
        }
    }

    #[test]
    fn test_malformed_total_fails_with_raw_invoice() {
        let mut bad = invoice(402);
        bad["total"] = json!("n/a");
        let err = normalize_invoices(&reply(vec![bad.clone()]), &[order(80, 402)], &[]).unwrap_err();
        assert_eq!(err.raw, bad);
        assert_eq!(err.target, "Invoice");
        assert!(err.description.contains("total"));
    }

    #[test]
    fn test_malformed_invoice_without_order_still_fails() {
        let mut orphan = invoice(999);
        orphan["total"] = json!("n/a");
        let payload = reply(vec![invoice(402), orphan.clone()]);
        let err = normalize_invoices(&payload, &[order(80, 402)], &[]).unwrap_err();
        assert_eq!(err.raw, orphan);
        assert_eq!(err.target, "Invoice");
        assert!(err.description.contains("total"));

        let bare = json!({"invoices": {"invoice": [{"id": 999, "total": "n/a", "subtotal": "x"}]}});
        assert!(normalize_invoices(&bare, &[], &[]).is_err());
    }

    #[test]
    fn test_missing_id_fails() {
        let mut bad = invoice(402);
        bad.as_object_mut().unwrap().remove("id");
        let err = normalize_invoices(&reply(vec![bad]), &[], &[]).unwrap_err();
        assert!(err.description.contains("missing field `id`"));
    }
}
