//! Products sub-client: catalogue queries.

use super::params::product_parameters;
use super::{normalize_products, Product, ProductQuery};
use crate::client::WhmcsClient;
use crate::error::WhmcsError;

const RETRIEVE_ERROR: &str = "We were unable to retrieve products";

pub struct Products<'a> {
    pub(crate) client: &'a WhmcsClient,
}

impl<'a> Products<'a> {
    /// Fetches products, priced in `currency` (falling back to USD).
    pub async fn get(&self, query: &ProductQuery, currency: &str) -> Result<Vec<Product>, WhmcsError> {
        let params = product_parameters(self.client.config(), query);
        let payload = self.client.call(&params, RETRIEVE_ERROR).await?;
        Ok(normalize_products(&payload, currency)?)
    }
}
