use shared::domain::Employee;

/// Records at or below this age are dropped from the roster.
pub const AGE_THRESHOLD_YEARS: u32 = 30;

/// Keeps only employees strictly older than the threshold, preserving the
/// server's ordering.
pub fn over_age_threshold(employees: Vec<Employee>) -> Vec<Employee> {
    employees
        .into_iter()
        .filter(|employee| employee.age > AGE_THRESHOLD_YEARS)
        .collect()
}
