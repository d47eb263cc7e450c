//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Default base URL of the lottery number service
pub const DEFAULT_BASE_URL: &str = "https://lottery-fastapi-backend.onrender.com";

/// Path of the number generation endpoint, appended to the base URL
pub const NUMBERS_PATH: &str = "/api/lottery-numbers";

/// Environment variable overriding the configured base URL
pub const BASE_URL_ENV: &str = "EUROMILLIONS_API_URL";

/// Default log file, relative to the working directory
pub const DEFAULT_LOG_FILE: &str = "euromillions.log";

/// Message shown for any non-2xx response
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch lottery numbers.";

pub const BUTTON_IDLE_LABEL: &str = "Generate New Numbers";
pub const BUTTON_BUSY_LABEL: &str = "Fetching...";

pub const TITLE: &str = "EuroMillions Number Generator";
pub const SUBTITLE: &str = "Powered by a Python API";

/// Application name
pub const APP_NAME: &str = "EuroMillions TUI";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
