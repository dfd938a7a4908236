use crate::entities::{BillingMode, TaskStatus};

impl TaskStatus {
    pub(crate) fn label(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Invoiced => "invoiced",
            TaskStatus::Collected => "collected",
        }
    }

    pub(crate) fn tag(&self) -> char {
        match self {
            TaskStatus::Pending => 'P',
            TaskStatus::Invoiced => 'I',
            TaskStatus::Collected => 'C',
        }
    }
}

impl BillingMode {
    pub(crate) fn label(&self) -> &'static str {
        match self {
            BillingMode::PerTask => "per-task billing",
            BillingMode::Global => "global billing",
        }
    }
}
