//! Conversion: ClientResponse → Client.

use super::wire::ClientResponse;
use super::Client;
use crate::error::FieldError;
use crate::shared::required;

impl TryFrom<ClientResponse> for Client {
    type Error = FieldError;

    fn try_from(source: ClientResponse) -> Result<Self, Self::Error> {
        Ok(Client {
            id: required("id", source.id.or(source.userid))?,
            uuid: source.uuid,
            first_name: source.firstname,
            last_name: source.lastname,
            email: source.email,
            phone_country_code: source.phonecc,
            phone_number: source.telephone_number.or(source.phonenumber),
            company: source.companyname,
            address: source.address1,
            postcode: source.postcode,
            city: source.city,
            state: source.state,
            country: source.country,
            currency_id: source.currency,
            currency_code: source.currency_code,
            status: source.status,
        })
    }
}
