use std::str::FromStr as _;

use crate::{
    data::models::{
        amount_model::AmountModel, billing_mode_model::BillingModeModel,
        order_number_model::OrderNumberModel,
    },
    entities::{order_id, Order},
    errors::{LedgerError, Result},
};

pub(crate) trait OrdersCsvDatasource {
    fn from_string(&self, s: &str) -> Result<Vec<Order>>;
}

pub(crate) struct OrdersCsvDatasourceImpl;

impl OrdersCsvDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl OrdersCsvDatasource for OrdersCsvDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Vec<Order>> {
        csv::Reader::from_reader(s.as_bytes())
            .records()
            .map(|r| {
                r.map_err(LedgerError::from).and_then(|r| {
                    // Extract from CSV record.
                    let raw_id = r.get(0).unwrap_or("");
                    let raw_order_number = r.get(1).unwrap_or("");
                    let raw_client = r.get(2).unwrap_or("");
                    let raw_quoted_amount = r.get(3).unwrap_or("0");
                    let raw_billing_mode = match r.get(4) {
                        Some(s) if !s.is_empty() => Some(s),
                        _ => None,
                    };
                    let raw_director = r.get(5).unwrap_or("");
                    let raw_executive = r.get(6).unwrap_or("");
                    let raw_observations = match r.get(7) {
                        Some(s) if !s.is_empty() => Some(s),
                        _ => None,
                    };

                    // Parse.
                    if raw_id.is_empty() {
                        return Err(LedgerError::InvalidCsvContent {
                            details: "order row with empty id".to_string(),
                        });
                    }
                    let order_number: String = OrderNumberModel::from_str(raw_order_number)?.into();
                    let quoted_amount: AmountModel = AmountModel::from_str(raw_quoted_amount)?;
                    let billing_mode = raw_billing_mode
                        .map(BillingModeModel::from_str)
                        .transpose()?
                        .map(Into::into);

                    // Build.
                    Ok(Order {
                        id: order_id(raw_id),
                        order_number,
                        client: raw_client.into(),
                        quoted_amount: quoted_amount.into(),
                        billing_mode,
                        director: raw_director.into(),
                        executive: raw_executive.into(),
                        observations: raw_observations.map(Into::into),
                    })
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::BillingMode;

    const CSV: &str = "\
id,order_number,client,quoted_amount,billing_mode,director,executive,observations
o1,2024-001,Acme,\"1,000\",global,Diana,Elena,
o2,2024-002,Initech,500,,Diana,Frank,urgent
";

    #[test]
    fn parses_orders_with_optional_columns() {
        let orders = OrdersCsvDatasourceImpl::new().from_string(CSV).unwrap();

        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].order_number, "2024-001");
        assert_eq!(orders[0].quoted_amount, 1000.0);
        assert_eq!(orders[0].billing_mode, Some(BillingMode::Global));
        assert_eq!(orders[0].observations, None);
        assert_eq!(orders[1].billing_mode, None);
        assert_eq!(orders[1].observations.as_deref(), Some("urgent"));
    }

    #[test]
    fn rejects_malformed_cells() {
        let bad_mode = "id,order_number,client,quoted_amount,billing_mode,director,executive,observations\no1,2024-001,Acme,1000,batch,D,E,";
        assert!(matches!(
            OrdersCsvDatasourceImpl::new().from_string(bad_mode),
            Err(LedgerError::InvalidBillingMode { .. })
        ));

        let bad_number = "id,order_number,client,quoted_amount,billing_mode,director,executive,observations\no1,20 24,Acme,1000,,D,E,";
        assert!(matches!(
            OrdersCsvDatasourceImpl::new().from_string(bad_number),
            Err(LedgerError::InvalidOrderNumber { .. })
        ));
    }
}
