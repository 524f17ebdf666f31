use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Arguments
/// * `backend_url` - Optional internal backend base URL to validate
/// * `log_file_path` - Optional log file path to validate
///
/// # Returns
/// * `Ok(())` - Configuration is valid
/// * `Err(AppError)` - Configuration validation failed
///
/// # Validation Rules
/// - Backend URL, when set, cannot be empty and must be a valid URL or domain name
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
pub fn validate_config(
    backend_url: &Option<String>,
    log_file_path: &Option<String>,
) -> Result<(), AppError> {
    // Validate backend URL when one is configured. The backend is optional;
    // without one every fetch goes straight to the public API.
    if let Some(url) = backend_url {
        if url.is_empty() {
            return Err(AppError::config_error(
                "Backend URL cannot be empty; remove it to use the public API only",
            ));
        }

        if !url.starts_with("http://") && !url.starts_with("https://") {
            // If it doesn't start with protocol, it should at least look like a domain
            if !url.contains('.') && !url.starts_with("localhost") {
                return Err(AppError::config_error(
                    "Backend URL must be a valid URL or domain name",
                ));
            }
        }
    }

    // Validate log file path if provided
    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        // Check if parent directory exists or can be created
        if let Some(parent) = Path::new(log_path).parent()
            && !parent.exists()
        {
            // Try to create the directory to validate the path
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}
