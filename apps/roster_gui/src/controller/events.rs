//! UI/backend events and error modeling for the roster GUI controller.

use client_core::FetchError;
use shared::domain::Employee;

pub enum UiEvent {
    Info(String),
    Error(UiError),
    RosterLoaded {
        request_id: u64,
        employees: Vec<Employee>,
    },
    RosterLoadFailed {
        request_id: u64,
        error: UiError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Transport,
    Http,
    Decode,
    Startup,
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    message: String,
}

impl UiError {
    pub fn from_fetch(err: &FetchError) -> Self {
        let category = match err {
            FetchError::Request { .. } => UiErrorCategory::Transport,
            FetchError::Status { .. } => UiErrorCategory::Http,
            FetchError::Decode { .. } => UiErrorCategory::Decode,
        };
        Self {
            category,
            message: friendly_fetch_message(err),
        }
    }

    pub fn startup(message: impl Into<String>) -> Self {
        Self {
            category: UiErrorCategory::Startup,
            message: message.into(),
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn label(&self) -> &'static str {
        match self.category {
            UiErrorCategory::Transport => "Network",
            UiErrorCategory::Http => "Server",
            UiErrorCategory::Decode => "Response",
            UiErrorCategory::Startup => "Startup",
        }
    }
}

pub fn friendly_fetch_message(err: &FetchError) -> String {
    match err {
        FetchError::Request { .. } => {
            "Employee server unreachable; check the endpoint URL and network.".to_string()
        }
        FetchError::Status { status } => format!("Employee endpoint returned HTTP {status}."),
        FetchError::Decode { .. } => {
            "Employee response did not contain the expected employee list.".to_string()
        }
    }
}
