use colored::Colorize;

/// Result of a single key check, consumed once for the report line and the
/// process exit code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    NoCredential,
    Valid,
    InvalidOrFailed(u16),
    NetworkError(String),
}

impl Outcome {
    pub fn report(&self) -> String {
        match self {
            Outcome::NoCredential => "No API key found.".to_string(),
            Outcome::Valid => "API key valid; accessible models retrieved."
                .green()
                .to_string(),
            Outcome::InvalidOrFailed(code) => {
                format!("API request failed with status {code}.")
                    .yellow()
                    .to_string()
            }
            Outcome::NetworkError(details) => {
                format!("Error contacting API: {details}").red().to_string()
            }
        }
    }

    // Only a transport failure is a nonzero exit; a rejected key still got an
    // answer from the API.
    pub fn exit_code(&self) -> u8 {
        match self {
            Outcome::NetworkError(_) => 1,
            _ => 0,
        }
    }
}
