use crate::env_keys::ENV_OPENAI_API_KEY;
use once_cell::sync::Lazy;

/// The API key from the environment. An empty value counts as absent.
pub static CREDENTIAL: Lazy<Option<String>> = Lazy::new(|| {
    std::env::var(ENV_OPENAI_API_KEY)
        .ok()
        .filter(|key| !key.is_empty())
});

pub fn get() -> Option<String> {
    CREDENTIAL.clone()
}
