//! Conversions: TransactionResponse → Transaction.

use super::wire::TransactionResponse;
use super::{Direction, Transaction};
use crate::error::FieldError;
use crate::shared::{parse_amount_or_zero, parse_datetime, parse_opt_amount, required};

impl TryFrom<TransactionResponse> for Transaction {
    type Error = FieldError;

    fn try_from(source: TransactionResponse) -> Result<Self, Self::Error> {
        let amount_in = parse_amount_or_zero("amountin", source.amountin.as_deref())?;
        let amount_out = parse_amount_or_zero("amountout", source.amountout.as_deref())?;
        let (amount, direction) = if amount_in.is_zero() {
            (amount_out, Direction::Withdrawal)
        } else {
            (amount_in, Direction::Deposit)
        };

        Ok(Transaction {
            id: required("id", source.id)?,
            client_id: source.userid,
            invoice_id: source.invoiceid,
            refund_id: source.refundid,
            transaction_id: source.transid,
            payment_method: source.gateway,
            description: source.description,
            date: parse_datetime(source.date.as_deref()),
            amount,
            direction,
            fees: parse_opt_amount("fees", source.fees.as_deref())?,
            rate: parse_opt_amount("rate", source.rate.as_deref())?,
        })
    }
}
