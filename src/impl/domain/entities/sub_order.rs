use super::order::OrderId;

#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct SubOrderId(pub(crate) String);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Pending,
    Invoiced,
    Collected,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubOrder {
    pub id: SubOrderId,
    pub order_id: OrderId,
    pub sequence: u32,
    pub unit: String,
    // Allocation ceiling set by the commercial director. None for legacy
    // records created before budgets were captured.
    pub budgeted_amount: Option<f64>,
    // The unit's declared cost. May exceed or fall short of budget.
    pub working_amount: f64,
    // Last derived status, stored as a cache. Authoritative values come out
    // of the derivation, not this field.
    pub status: TaskStatus,
}

// Shorthand constructors.

pub fn sub_order_id(id: impl Into<String>) -> SubOrderId {
    SubOrderId(id.into())
}

// --

impl TaskStatus {
    // Position in the lifecycle. Statuses only move forward in normal
    // operation.
    pub fn rank(&self) -> u8 {
        match self {
            TaskStatus::Pending => 0,
            TaskStatus::Invoiced => 1,
            TaskStatus::Collected => 2,
        }
    }
}

impl std::fmt::Display for SubOrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
