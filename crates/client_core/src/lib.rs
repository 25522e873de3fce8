use reqwest::Client;
use shared::{domain::Employee, protocol::EmployeesResponse};
use tracing::info;
use url::Url;

pub mod error;
pub mod pagination;
pub mod roster;

pub use error::FetchError;
pub use pagination::{Pager, ITEMS_PER_PAGE};
pub use roster::AGE_THRESHOLD_YEARS;

/// Employees endpoint queried when no override is supplied.
pub const DEFAULT_API_URL: &str = "https://employeesapp.azurewebsites.net/api/GetEmployees";

pub struct RosterClient {
    http: Client,
    api_url: Url,
}

impl RosterClient {
    pub fn new(api_url: Url) -> Self {
        Self {
            http: Client::new(),
            api_url,
        }
    }

    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    /// One plain GET against the employees endpoint: no query parameters,
    /// no extra headers, no authentication, no configured timeout.
    pub async fn fetch_employees(&self) -> Result<Vec<Employee>, FetchError> {
        let response = self
            .http
            .get(self.api_url.clone())
            .send()
            .await
            .map_err(|source| FetchError::Request { source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { status });
        }

        let body: EmployeesResponse = response
            .json()
            .await
            .map_err(|source| FetchError::Decode { source })?;

        info!(
            employees = body.employees.len(),
            "roster: fetched employee list"
        );
        Ok(body.employees)
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
