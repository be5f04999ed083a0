//! Conversions: order wire types → Order / OrderItem / OrderPlacement.

use super::wire::{AddOrderResponse, OrderItemResponse, OrderResponse};
use super::{Order, OrderItem, OrderPlacement};
use crate::error::FieldError;
use crate::shared::{parse_amount, parse_datetime, parse_id_list, required};

impl TryFrom<OrderItemResponse> for OrderItem {
    type Error = FieldError;

    fn try_from(source: OrderItemResponse) -> Result<Self, Self::Error> {
        Ok(OrderItem {
            item_type: source.item_type,
            rel_id: source.relid,
            product: source.product,
            product_type: source.producttype,
            domain: source.domain,
            billing_cycle: source.billingcycle,
            amount: parse_amount("amount", source.amount.as_deref())?,
            status: source.status,
        })
    }
}

impl TryFrom<OrderResponse> for Order {
    type Error = FieldError;

    fn try_from(source: OrderResponse) -> Result<Self, Self::Error> {
        let items = source
            .lineitems
            .into_iter()
            .map(OrderItem::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Order {
            id: required("id", source.id)?,
            order_number: source.ordernum,
            client_id: required("userid", source.userid)?,
            date: parse_datetime(source.date.as_deref()),
            nameservers: source.nameservers,
            transfer_secret: source.transfersecret,
            renewals: source.renewals,
            promo_code: source.promocode,
            promo_type: source.promotype,
            promo_value: source.promovalue,
            amount: parse_amount("amount", source.amount.as_deref())?,
            invoice_id: source.invoiceid,
            payment_status: source.paymentstatus,
            payment_method: source.paymentmethod,
            payment_method_name: source.paymentmethodname,
            fraud_module: source.fraudmodule,
            fraud_output: source.fraudoutput,
            fraud_data: source.frauddata,
            status: source.status,
            notes: source.notes,
            items,
        })
    }
}

impl TryFrom<AddOrderResponse> for OrderPlacement {
    type Error = FieldError;

    fn try_from(source: AddOrderResponse) -> Result<Self, Self::Error> {
        Ok(OrderPlacement {
            order_id: required("orderid", source.orderid)?,
            invoice_id: source.invoiceid,
            service_ids: parse_id_list("serviceids", source.serviceids.as_deref())?,
            addon_ids: parse_id_list("addonids", source.addonids.as_deref())?,
            domain_ids: parse_id_list("domainids", source.domainids.as_deref())?,
        })
    }
}
