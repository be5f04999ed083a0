//! Payment methods sub-client.

use super::{normalize_payment_methods, payment_method_parameters, PaymentMethod};
use crate::client::WhmcsClient;
use crate::error::WhmcsError;

const RETRIEVE_ERROR: &str = "We were unable to retrieve payment methods";

pub struct PaymentMethods<'a> {
    pub(crate) client: &'a WhmcsClient,
}

impl<'a> PaymentMethods<'a> {
    pub async fn get(&self) -> Result<Vec<PaymentMethod>, WhmcsError> {
        let params = payment_method_parameters(self.client.config());
        let payload = self.client.call(&params, RETRIEVE_ERROR).await?;
        Ok(normalize_payment_methods(&payload)?)
    }
}
