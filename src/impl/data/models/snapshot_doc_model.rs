use std::str::FromStr as _;

use crate::{
    data::models::{
        billing_mode_model::BillingModeModel, iso_date_model::ISODateModel,
        movement_scope_model::movement_scope, order_number_model::OrderNumberModel,
        task_status_model::TaskStatusModel,
    },
    entities::{
        movement_id, order_id, sub_order_id, FinancialMovement, LedgerSnapshot, Order, SubOrder,
        TaskStatus,
    },
    errors::LedgerError,
};

// Shape of a document-store export: the three collections in one document,
// field names as the store spells them.
#[derive(Debug, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SnapshotDocModel {
    #[serde(default)]
    pub orders: Vec<OrderModel>,
    #[serde(default)]
    pub sub_orders: Vec<SubOrderModel>,
    #[serde(default)]
    pub movements: Vec<MovementModel>,
}

#[derive(Debug, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderModel {
    pub id: String,
    pub order_number: String,
    pub client: String,
    pub quoted_amount: f64,
    #[serde(default)]
    pub billing_mode: Option<String>,
    #[serde(default)]
    pub director: String,
    #[serde(default)]
    pub executive: String,
    #[serde(default)]
    pub observations: Option<String>,
}

#[derive(Debug, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SubOrderModel {
    pub id: String,
    pub order_id: String,
    pub sequence: u32,
    pub unit: String,
    #[serde(default)]
    pub budgeted_amount: Option<f64>,
    #[serde(default)]
    pub working_amount: f64,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MovementModel {
    pub id: String,
    #[serde(default)]
    pub order_id: Option<String>,
    #[serde(default)]
    pub sub_order_id: Option<String>,
    #[serde(default)]
    pub invoice_number: Option<String>,
    #[serde(default)]
    pub invoice_date: Option<ISODateModel>,
    #[serde(default)]
    pub invoice_amount: Option<f64>,
    #[serde(default)]
    pub payment_date: Option<ISODateModel>,
    #[serde(default)]
    pub paid_amount: Option<f64>,
}

// --

impl TryFrom<OrderModel> for Order {
    type Error = LedgerError;
    fn try_from(model: OrderModel) -> Result<Self, Self::Error> {
        let order_number: String = OrderNumberModel::from_str(&model.order_number)?.into();
        let billing_mode = model
            .billing_mode
            .filter(|s| !s.is_empty())
            .map(|s| BillingModeModel::from_str(&s))
            .transpose()?
            .map(Into::into);
        Ok(Order {
            id: order_id(model.id),
            order_number,
            client: model.client,
            quoted_amount: model.quoted_amount,
            billing_mode,
            director: model.director,
            executive: model.executive,
            observations: model.observations.filter(|s| !s.is_empty()),
        })
    }
}

impl TryFrom<SubOrderModel> for SubOrder {
    type Error = LedgerError;
    fn try_from(model: SubOrderModel) -> Result<Self, Self::Error> {
        let status: TaskStatus = match model.status.filter(|s| !s.is_empty()) {
            Some(s) => TaskStatusModel::from_str(&s)?.into(),
            None => TaskStatus::Pending,
        };
        Ok(SubOrder {
            id: sub_order_id(model.id),
            order_id: order_id(model.order_id),
            sequence: model.sequence,
            unit: model.unit,
            budgeted_amount: model.budgeted_amount,
            working_amount: model.working_amount,
            status,
        })
    }
}

impl TryFrom<MovementModel> for FinancialMovement {
    type Error = LedgerError;
    fn try_from(model: MovementModel) -> Result<Self, Self::Error> {
        let scope = movement_scope(&model.id, model.sub_order_id, model.order_id)?;
        Ok(FinancialMovement {
            id: movement_id(model.id),
            scope,
            invoice_number: model.invoice_number.filter(|s| !s.is_empty()),
            invoice_date: model.invoice_date.map(Into::into),
            invoice_amount: model.invoice_amount,
            payment_date: model.payment_date.map(Into::into),
            paid_amount: model.paid_amount,
        })
    }
}

impl TryFrom<SnapshotDocModel> for LedgerSnapshot {
    type Error = LedgerError;
    fn try_from(model: SnapshotDocModel) -> Result<Self, Self::Error> {
        Ok(LedgerSnapshot {
            orders: model
                .orders
                .into_iter()
                .map(TryInto::try_into)
                .collect::<Result<_, _>>()?,
            sub_orders: model
                .sub_orders
                .into_iter()
                .map(TryInto::try_into)
                .collect::<Result<_, _>>()?,
            movements: model
                .movements
                .into_iter()
                .map(TryInto::try_into)
                .collect::<Result<_, _>>()?,
        })
    }
}
