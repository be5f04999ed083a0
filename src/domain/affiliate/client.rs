//! Affiliates sub-client.

use super::{affiliate_activate_parameters, affiliate_parameters, normalize_affiliates, Affiliate};
use crate::client::WhmcsClient;
use crate::error::WhmcsError;

const ENROLL_ERROR: &str = "We were unable to enrol you as an affiliate";
const RETRIEVE_ERROR: &str = "We were unable to retrieve affiliate details";

pub struct Affiliates<'a> {
    pub(crate) client: &'a WhmcsClient,
}

impl<'a> Affiliates<'a> {
    /// Enrols a client in the affiliate program.
    pub async fn enroll(&self, client_id: i64) -> Result<(), WhmcsError> {
        let params = affiliate_activate_parameters(self.client.config(), client_id);
        self.client.call(&params, ENROLL_ERROR).await?;
        Ok(())
    }

    pub async fn get(&self, client_id: Option<i64>) -> Result<Vec<Affiliate>, WhmcsError> {
        let params = affiliate_parameters(self.client.config(), client_id);
        let payload = self.client.call(&params, RETRIEVE_ERROR).await?;
        Ok(normalize_affiliates(&payload)?)
    }
}
