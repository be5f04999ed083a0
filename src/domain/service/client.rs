//! Services sub-client: a client's purchased products.

use super::params::{client_product_parameters, service_update_parameters, upgrade_parameters};
use super::{
    normalize_client_products, normalize_service_id, normalize_upgrade, ClientProduct,
    ClientProductQuery, ProductUpgrade, ServiceUpdate, UpgradeRequest,
};
use crate::client::WhmcsClient;
use crate::domain::order::{OrderPlacement, ProductOrder};
use crate::error::WhmcsError;

const RETRIEVE_ERROR: &str = "We were unable to retrieve your products";
const UPDATE_ERROR: &str = "We were unable to update your product";
const UPGRADE_ERROR: &str = "We were unable to upgrade your product";

pub struct Services<'a> {
    pub(crate) client: &'a WhmcsClient,
}

impl<'a> Services<'a> {
    pub async fn get(&self, query: &ClientProductQuery) -> Result<Vec<ClientProduct>, WhmcsError> {
        let params = client_product_parameters(self.client.config(), query);
        let payload = self.client.call(&params, RETRIEVE_ERROR).await?;
        Ok(normalize_client_products(&payload)?)
    }

    /// Orders a new product for a client. Same as `orders().place_product`.
    pub async fn order(&self, order: &ProductOrder) -> Result<OrderPlacement, WhmcsError> {
        self.client.orders().place_product(order).await
    }

    /// Updates a service and returns its id.
    pub async fn update(&self, update: &ServiceUpdate) -> Result<i64, WhmcsError> {
        let params = service_update_parameters(self.client.config(), update);
        let payload = self.client.call(&params, UPDATE_ERROR).await?;
        Ok(normalize_service_id(&payload)?)
    }

    pub async fn upgrade(&self, request: &UpgradeRequest) -> Result<ProductUpgrade, WhmcsError> {
        let params = upgrade_parameters(self.client.config(), request);
        let payload = self.client.call(&params, UPGRADE_ERROR).await?;
        Ok(normalize_upgrade(&payload)?)
    }
}
