//! Password input for CLI commands
//!
//! Passwords come from a named environment variable when one is given,
//! otherwise from a hidden terminal prompt.

use crate::crypto::SecureString;
use crate::error::{SealError, SealResult};

/// Read the password for a command
///
/// With `confirm`, an interactive prompt asks twice and requires a match.
/// Strength is not checked.
pub fn read_password(env_var: Option<&str>, confirm: bool) -> SealResult<SecureString> {
    if let Some(name) = env_var {
        return password_from_env(name);
    }

    if !confirm {
        return prompt_password("Password: ");
    }

    loop {
        let first = prompt_password("Password: ")?;
        let second = prompt_password("Confirm password: ")?;

        if first == second {
            return Ok(first);
        }

        eprintln!("Passwords do not match. Please try again.");
    }
}

/// Read a password from the named environment variable
pub fn password_from_env(name: &str) -> SealResult<SecureString> {
    std::env::var(name).map(SecureString::from).map_err(|_| {
        SealError::Config(format!(
            "Password environment variable '{}' is not set or not valid UTF-8",
            name
        ))
    })
}

/// Prompt for a password (hidden input)
fn prompt_password(prompt: &str) -> SealResult<SecureString> {
    rpassword::prompt_password(prompt)
        .map(SecureString::from)
        .map_err(|e| SealError::Io(format!("Failed to read password: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_from_env() {
        std::env::set_var("FRAGSEAL_TEST_PASSWORD_SET", "hunter2");
        let password = read_password(Some("FRAGSEAL_TEST_PASSWORD_SET"), true).unwrap();
        std::env::remove_var("FRAGSEAL_TEST_PASSWORD_SET");

        assert_eq!(password.as_str(), "hunter2");
    }

    #[test]
    fn test_empty_env_password_allowed() {
        std::env::set_var("FRAGSEAL_TEST_PASSWORD_EMPTY", "");
        let password = password_from_env("FRAGSEAL_TEST_PASSWORD_EMPTY").unwrap();
        std::env::remove_var("FRAGSEAL_TEST_PASSWORD_EMPTY");

        assert!(password.is_empty());
    }

    #[test]
    fn test_missing_env_password() {
        let err = password_from_env("FRAGSEAL_TEST_PASSWORD_MISSING").unwrap_err();
        assert!(matches!(err, SealError::Config(_)));
        assert!(err.to_string().contains("FRAGSEAL_TEST_PASSWORD_MISSING"));
    }
}
