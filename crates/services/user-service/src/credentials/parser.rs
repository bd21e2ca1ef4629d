//! Export-style secrets file parsing.
//!
//! Accepted line shape: `[export ]KEY=VALUE`, where `VALUE` may be wrapped in
//! double or single quotes. Later occurrences of a key win.

use super::{Credential, CredentialError, MONGO_PASSWORD_KEY, MONGO_USER_KEY};

/// Extract the database credential from secrets file contents.
pub fn parse_secrets(text: &str) -> Result<Credential, CredentialError> {
    let mut username: Option<String> = None;
    let mut password: Option<String> = None;

    for line in text.lines() {
        let Some((key, value)) = parse_line(line) else {
            continue;
        };

        match key {
            MONGO_USER_KEY => username = Some(value.to_string()),
            MONGO_PASSWORD_KEY => password = Some(value.to_string()),
            _ => {}
        }
    }

    let username = username.ok_or(CredentialError::Incomplete(MONGO_USER_KEY))?;
    let password = password.ok_or(CredentialError::Incomplete(MONGO_PASSWORD_KEY))?;

    Credential::new(username, password)
}

/// Split one line into key and unquoted value.
fn parse_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let line = line
        .strip_prefix("export")
        .filter(|rest| rest.starts_with(char::is_whitespace))
        .map(str::trim_start)
        .unwrap_or(line);

    let (key, value) = line.split_once('=')?;
    Some((key.trim(), unquote(value.trim())))
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}
