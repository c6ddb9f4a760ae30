use crate::{Car, DeviceKind};

/// Result of a demo driver run.
///
/// A driver invoked without its collaborator returns `Skipped` after
/// reporting the diagnostic; it never fails for that reason.
#[derive(Debug)]
pub enum DriverOutcome<T> {
    Completed(T),
    Skipped { reason: String },
}

impl<T> DriverOutcome<T> {
    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped { .. })
    }

    pub fn completed(self) -> Option<T> {
        match self {
            Self::Completed(value) => Some(value),
            Self::Skipped { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceReport {
    pub kind: DeviceKind,
    pub cpu: String,
    pub memory: String,
    pub display: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdapterReport {
    pub adapter_type: String,
    pub calls: Vec<String>,
}

/// Cars produced by the prototype driver, in production order.
#[derive(Debug)]
pub struct PrototypeRun {
    pub cars: Vec<Box<dyn Car>>,
}
