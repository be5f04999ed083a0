//! Conversions: AffiliateResponse → Affiliate.

use super::wire::AffiliateResponse;
use super::Affiliate;
use crate::error::FieldError;
use crate::shared::{parse_amount, parse_date, required};

impl TryFrom<AffiliateResponse> for Affiliate {
    type Error = FieldError;

    fn try_from(source: AffiliateResponse) -> Result<Self, Self::Error> {
        Ok(Affiliate {
            id: required("id", source.id)?,
            client_id: source.clientid,
            date_enrolled: parse_date(source.date.as_deref()),
            visitors: source.visitors,
            balance: parse_amount("balance", source.balance.as_deref())?,
            withdrawn: parse_amount("withdrawn", source.withdrawn.as_deref())?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::*;
    use serde_json::json;
    use std::str::FromStr;

    fn config() -> WhmcsConfig {
        WhmcsConfig::new("https://example.com", "identifier", "secret", "access")
    }

    #[test]
    fn test_affiliate_fields() {
        let payload = json!({
            "result": "success",
            "totalresults": 1,
            "affiliates": {"affiliate": [{
                "id": 3,
                "clientid": 17,
                "visitors": "12",
                "paytype": "",
                "payamount": "0.00",
                "onetime": 0,
                "balance": "25.00",
                "withdrawn": "5.00",
                "date": "2021-03-14"
            }]}
        });
        let affiliates = normalize_affiliates(&payload).unwrap();
        let a = &affiliates[0];
        assert_eq!(a.id, 3);
        assert_eq!(a.client_id, Some(17));
        assert_eq!(a.visitors, Some(12));
        assert_eq!(a.balance, Decimal::from_str("25.00").unwrap());
        assert_eq!(a.withdrawn, Decimal::from_str("5.00").unwrap());
        assert_eq!(a.date_enrolled, NaiveDate::from_ymd_opt(2021, 3, 14));
    }

    #[test]
    fn test_no_affiliates() {
        let payload = json!({"result": "success", "totalresults": 0, "affiliates": []});
        assert!(normalize_affiliates(&payload).unwrap().is_empty());
    }

    #[test]
    fn test_parameters() {
        let params = affiliate_activate_parameters(&config(), 17);
        assert_eq!(params.action(), Some("AffiliateActivate"));
        assert_eq!(params.get("userid"), Some("17"));

        assert!(!affiliate_parameters(&config(), None).contains_key("userid"));
        assert_eq!(affiliate_parameters(&config(), Some(17)).get("userid"), Some("17"));
    }
}
