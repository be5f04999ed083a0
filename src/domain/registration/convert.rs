//! Conversions: DomainResponse → RegisteredDomain.

use super::wire::DomainResponse;
use super::RegisteredDomain;
use crate::error::FieldError;
use crate::shared::{parse_amount, parse_date, required};

impl TryFrom<DomainResponse> for RegisteredDomain {
    type Error = FieldError;

    fn try_from(source: DomainResponse) -> Result<Self, Self::Error> {
        Ok(RegisteredDomain {
            id: required("id", source.id)?,
            domain_name: source.domainname,
            registration_period: source.regperiod,
            first_payment_amount: parse_amount(
                "firstpaymentamount",
                source.firstpaymentamount.as_deref(),
            )?,
            recurring_amount: parse_amount("recurringamount", source.recurringamount.as_deref())?,
            payment_method_name: source.paymentmethodname,
            next_due_date: parse_date(source.nextduedate.as_deref()),
            status: source.status,
        })
    }
}
