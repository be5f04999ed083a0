//! Orders sub-client: place, cancel and list orders.

use super::params::{
    bulk_order_parameters, cancel_order_parameters, domain_order_parameters, order_parameters,
    product_order_parameters,
};
use super::{
    normalize_order_placement, normalize_orders, BulkOrder, DomainOrder, Order, OrderPlacement,
    OrderQuery, ProductOrder,
};
use crate::client::WhmcsClient;
use crate::error::WhmcsError;
use crate::shared::Parameters;

const ORDER_ERROR: &str = "We were unable to place your order";
const CANCEL_ERROR: &str = "We were unable to cancel your order";
const RETRIEVE_ERROR: &str = "We were unable to retrieve your orders";

pub struct Orders<'a> {
    pub(crate) client: &'a WhmcsClient,
}

impl<'a> Orders<'a> {
    async fn place(&self, params: &Parameters) -> Result<OrderPlacement, WhmcsError> {
        let payload = self.client.call(params, ORDER_ERROR).await?;
        Ok(normalize_order_placement(&payload)?)
    }

    pub async fn place_product(&self, order: &ProductOrder) -> Result<OrderPlacement, WhmcsError> {
        self.place(&product_order_parameters(self.client.config(), order))
            .await
    }

    pub async fn place_bulk(&self, order: &BulkOrder) -> Result<OrderPlacement, WhmcsError> {
        self.place(&bulk_order_parameters(self.client.config(), order))
            .await
    }

    pub async fn place_domain(&self, order: &DomainOrder) -> Result<OrderPlacement, WhmcsError> {
        self.place(&domain_order_parameters(self.client.config(), order))
            .await
    }

    /// Cancels a pending order. The reply carries nothing beyond `result`.
    pub async fn cancel(&self, order_id: i64) -> Result<(), WhmcsError> {
        let params = cancel_order_parameters(self.client.config(), order_id);
        self.client.call(&params, CANCEL_ERROR).await?;
        Ok(())
    }

    pub async fn get(&self, query: &OrderQuery) -> Result<Vec<Order>, WhmcsError> {
        let params = order_parameters(self.client.config(), query);
        let payload = self.client.call(&params, RETRIEVE_ERROR).await?;
        Ok(normalize_orders(&payload)?)
    }
}
