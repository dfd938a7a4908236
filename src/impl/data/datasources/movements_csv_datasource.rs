use std::str::FromStr as _;

use crate::{
    data::models::{
        amount_model::AmountModel, iso_date_model::ISODateModel,
        movement_scope_model::movement_scope,
    },
    entities::{movement_id, FinancialMovement},
    errors::{LedgerError, Result},
};

pub(crate) trait MovementsCsvDatasource {
    fn from_string(&self, s: &str) -> Result<Vec<FinancialMovement>>;
}

pub(crate) struct MovementsCsvDatasourceImpl;

impl MovementsCsvDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl MovementsCsvDatasource for MovementsCsvDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Vec<FinancialMovement>> {
        csv::Reader::from_reader(s.as_bytes())
            .records()
            .map(|r| {
                r.map_err(LedgerError::from).and_then(|r| {
                    // Extract from CSV record.
                    let raw_id = r.get(0).unwrap_or("");
                    let raw_order_id = match r.get(1) {
                        Some(s) if !s.is_empty() => Some(s.to_string()),
                        _ => None,
                    };
                    let raw_sub_order_id = match r.get(2) {
                        Some(s) if !s.is_empty() => Some(s.to_string()),
                        _ => None,
                    };
                    let raw_invoice_number = match r.get(3) {
                        Some(s) if !s.is_empty() => Some(s),
                        _ => None,
                    };
                    let raw_invoice_date = match r.get(4) {
                        Some(s) if !s.is_empty() => Some(s),
                        _ => None,
                    };
                    let raw_invoice_amount = match r.get(5) {
                        Some(s) if !s.is_empty() => Some(s),
                        _ => None,
                    };
                    let raw_payment_date = match r.get(6) {
                        Some(s) if !s.is_empty() => Some(s),
                        _ => None,
                    };
                    let raw_paid_amount = match r.get(7) {
                        Some(s) if !s.is_empty() => Some(s),
                        _ => None,
                    };

                    // Parse.
                    if raw_id.is_empty() {
                        return Err(LedgerError::InvalidCsvContent {
                            details: "movement row with empty id".to_string(),
                        });
                    }
                    let scope = movement_scope(raw_id, raw_sub_order_id, raw_order_id)?;
                    let invoice_date = raw_invoice_date
                        .map(ISODateModel::from_str)
                        .transpose()?
                        .map(Into::into);
                    let invoice_amount = raw_invoice_amount
                        .map(AmountModel::from_str)
                        .transpose()?
                        .map(Into::into);
                    let payment_date = raw_payment_date
                        .map(ISODateModel::from_str)
                        .transpose()?
                        .map(Into::into);
                    let paid_amount = raw_paid_amount
                        .map(AmountModel::from_str)
                        .transpose()?
                        .map(Into::into);

                    // Build.
                    Ok(FinancialMovement {
                        id: movement_id(raw_id),
                        scope,
                        invoice_number: raw_invoice_number.map(Into::into),
                        invoice_date,
                        invoice_amount,
                        payment_date,
                        paid_amount,
                    })
                })
            })
            .collect()
    }
}
