use serde::{Deserialize, Serialize};

use crate::domain::Employee;

/// Wire envelope returned by the employees endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeesResponse {
    pub employees: Vec<Employee>,
}
