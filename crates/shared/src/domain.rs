use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmployeeId(pub i64);

/// Server-defined employee record. Immutable once received; the client only
/// filters, slices, and displays it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub employee_name: String,
    pub age: u32,
    pub salary: f64,
    pub job_title: String,
}
