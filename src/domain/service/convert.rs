//! Conversions: service wire types → ClientProduct / ProductUpgrade.

use super::wire::{ClientProductResponse, UpgradeResponse};
use super::{ClientProduct, ProductUpgrade};
use crate::error::FieldError;
use crate::shared::{parse_amount, parse_date, required};

impl TryFrom<ClientProductResponse> for ClientProduct {
    type Error = FieldError;

    fn try_from(source: ClientProductResponse) -> Result<Self, Self::Error> {
        Ok(ClientProduct {
            id: required("id", source.id)?,
            client_id: required("clientid", source.clientid)?,
            order_id: required("orderid", source.orderid)?,
            product_id: required("pid", source.pid)?,
            registration_date: parse_date(source.regdate.as_deref()),
            first_payment_amount: parse_amount(
                "firstpaymentamount",
                source.firstpaymentamount.as_deref(),
            )?,
            recurring_amount: parse_amount("recurringamount", source.recurringamount.as_deref())?,
            next_due_date: parse_date(source.nextduedate.as_deref()),
            name: source.name,
            translated_name: source.translated_name,
            group_name: source.groupname,
            translated_group_name: source.translated_groupname,
            domain: source.domain,
            suspension_reason: source.suspensionreason,
            payment_method: source.paymentmethod,
            payment_method_name: source.paymentmethodname,
            billing_cycle: source.billingcycle,
            status: source.status,
            notes: source.notes,
        })
    }
}

impl TryFrom<UpgradeResponse> for ProductUpgrade {
    type Error = FieldError;

    fn try_from(source: UpgradeResponse) -> Result<Self, Self::Error> {
        Ok(ProductUpgrade {
            id: source.id,
            old_product_id: source.oldproductid,
            old_product_name: source.oldproductname,
            new_product_id: source.newproductid,
            new_product_name: source.newproductname,
            new_product_billing_cycle: source.newproductbillingcycle,
            days_until_renewal: source.daysuntilrenewal,
            price: parse_amount("price", source.price.as_deref())?,
            order_id: source.orderid,
            order_number: source.order_number,
            invoice_id: source.invoiceid,
        })
    }
}
