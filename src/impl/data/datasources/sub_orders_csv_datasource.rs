use std::str::FromStr as _;

use crate::{
    data::models::{amount_model::AmountModel, task_status_model::TaskStatusModel},
    entities::{order_id, sub_order_id, SubOrder, TaskStatus},
    errors::{LedgerError, Result},
};

pub(crate) trait SubOrdersCsvDatasource {
    fn from_string(&self, s: &str) -> Result<Vec<SubOrder>>;
}

pub(crate) struct SubOrdersCsvDatasourceImpl;

impl SubOrdersCsvDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl SubOrdersCsvDatasource for SubOrdersCsvDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Vec<SubOrder>> {
        csv::Reader::from_reader(s.as_bytes())
            .records()
            .map(|r| {
                r.map_err(LedgerError::from).and_then(|r| {
                    // Extract from CSV record.
                    let raw_id = r.get(0).unwrap_or("");
                    let raw_order_id = r.get(1).unwrap_or("");
                    let raw_sequence = r.get(2).unwrap_or("");
                    let raw_unit = r.get(3).unwrap_or("");
                    let raw_budgeted_amount = match r.get(4) {
                        Some(s) if !s.is_empty() => Some(s),
                        _ => None,
                    };
                    let raw_working_amount = match r.get(5) {
                        Some(s) if !s.is_empty() => s,
                        _ => "0",
                    };
                    let raw_status = match r.get(6) {
                        Some(s) if !s.is_empty() => Some(s),
                        _ => None,
                    };

                    // Parse.
                    if raw_id.is_empty() || raw_order_id.is_empty() {
                        return Err(LedgerError::InvalidCsvContent {
                            details: "sub-order row with empty id or order id".to_string(),
                        });
                    }
                    let sequence: u32 = raw_sequence.parse().map_err(|_| {
                        LedgerError::InvalidCsvContent {
                            details: format!("invalid sequence number '{raw_sequence}'"),
                        }
                    })?;
                    let budgeted_amount = raw_budgeted_amount
                        .map(AmountModel::from_str)
                        .transpose()?
                        .map(Into::into);
                    let working_amount: AmountModel = AmountModel::from_str(raw_working_amount)?;
                    let status = match raw_status {
                        Some(s) => TaskStatusModel::from_str(s)?.into(),
                        None => TaskStatus::Pending,
                    };

                    // Build.
                    Ok(SubOrder {
                        id: sub_order_id(raw_id),
                        order_id: order_id(raw_order_id),
                        sequence,
                        unit: raw_unit.into(),
                        budgeted_amount,
                        working_amount: working_amount.into(),
                        status,
                    })
                })
            })
            .collect()
    }
}
