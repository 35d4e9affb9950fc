// Centralized environment variable keys to avoid repeated string literals.

pub const ENV_OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const ENV_KEY_CHK_MOCK_FILE: &str = "KEY_CHK_MOCK_FILE";
