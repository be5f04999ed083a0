//! Conversion: ProductResponse → Product.

use super::wire::{PricingResponse, ProductResponse};
use super::{Pricing, Product};
use crate::error::FieldError;
use crate::shared::{parse_opt_amount, required};
use std::collections::BTreeMap;

impl TryFrom<PricingResponse> for Pricing {
    type Error = FieldError;

    fn try_from(source: PricingResponse) -> Result<Self, Self::Error> {
        Ok(Pricing {
            prefix: source.prefix,
            monthly: parse_opt_amount("monthly", source.monthly.as_deref())?,
            quarterly: parse_opt_amount("quarterly", source.quarterly.as_deref())?,
            semiannually: parse_opt_amount("semiannually", source.semiannually.as_deref())?,
            annually: parse_opt_amount("annually", source.annually.as_deref())?,
            biennially: parse_opt_amount("biennially", source.biennially.as_deref())?,
            triennially: parse_opt_amount("triennially", source.triennially.as_deref())?,
        })
    }
}

impl TryFrom<ProductResponse> for Product {
    type Error = FieldError;

    fn try_from(source: ProductResponse) -> Result<Self, Self::Error> {
        let pricing_table = source
            .pricing
            .into_iter()
            .map(|(currency, pricing)| Pricing::try_from(pricing).map(|p| (currency, p)))
            .collect::<Result<BTreeMap<_, _>, FieldError>>()?;

        Ok(Product {
            id: required("pid", source.pid)?,
            group_id: source.gid,
            module: source.module,
            product_type: source.product_type,
            name: source.name,
            description: source.description,
            billing_cycle: source.paytype,
            // Selected per currency by `normalize_products`.
            pricing: Pricing::default(),
            pricing_table,
        })
    }
}
