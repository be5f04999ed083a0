//! Request parameters for `GetProducts`.

use crate::config::WhmcsConfig;
use crate::shared::{Action, Parameters};

/// Filters for `GetProducts`. The default fetches every product.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductQuery {
    pub group_id: Option<i64>,
    pub module: Option<String>,
    pub product_ids: Vec<i64>,
}

pub fn product_parameters(config: &WhmcsConfig, query: &ProductQuery) -> Parameters {
    let mut params = Parameters::for_action(config, Action::GetProducts);
    params
        .insert_opt("gid", query.group_id)
        .insert_opt("module", query.module.as_deref())
        .insert_list("pid", &query.product_ids);
    params
}
