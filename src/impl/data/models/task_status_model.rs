use std::str::FromStr;

use crate::{entities::TaskStatus, errors::LedgerError};

#[derive(Debug)]
pub(crate) struct TaskStatusModel(TaskStatus);

impl FromStr for TaskStatusModel {
    type Err = LedgerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(TaskStatusModel(TaskStatus::Pending)),
            "invoiced" => Ok(TaskStatusModel(TaskStatus::Invoiced)),
            "collected" => Ok(TaskStatusModel(TaskStatus::Collected)),
            other => Err(LedgerError::InvalidTaskStatus {
                value: other.to_string(),
            }),
        }
    }
}

impl Into<TaskStatus> for TaskStatusModel {
    fn into(self) -> TaskStatus {
        self.0
    }
}
