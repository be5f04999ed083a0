//! Clients sub-client: create, fetch and update client accounts.

use super::params::{client_parameters, create_client_parameters, update_client_parameters};
use super::{normalize_client, normalize_client_id, Client, ClientDetails, ClientQuery};
use crate::client::WhmcsClient;
use crate::error::WhmcsError;

const CREATE_ERROR: &str = "We were unable to create your billing account";
const RETRIEVE_ERROR: &str = "We were unable to retrieve your billing account";
const UPDATE_ERROR: &str = "We were unable to update your billing account";

pub struct Clients<'a> {
    pub(crate) client: &'a WhmcsClient,
}

impl<'a> Clients<'a> {
    /// Creates a client and returns its id.
    pub async fn create(&self, details: &ClientDetails) -> Result<i64, WhmcsError> {
        let params = create_client_parameters(self.client.config(), details);
        let payload = self.client.call(&params, CREATE_ERROR).await?;
        Ok(normalize_client_id(&payload)?)
    }

    pub async fn get(&self, query: &ClientQuery) -> Result<Client, WhmcsError> {
        let params = client_parameters(self.client.config(), query);
        let payload = self.client.call(&params, RETRIEVE_ERROR).await?;
        Ok(normalize_client(&payload)?)
    }

    /// Updates a client and returns its id as echoed by WHMCS.
    pub async fn update(&self, client_id: i64, details: &ClientDetails) -> Result<i64, WhmcsError> {
        let params = update_client_parameters(self.client.config(), client_id, details);
        let payload = self.client.call(&params, UPDATE_ERROR).await?;
        Ok(normalize_client_id(&payload)?)
    }
}
