use crate::env_keys::ENV_KEY_CHK_MOCK_FILE;
use serde::Deserialize;
use std::time::Duration;

const MODELS_URI: &str = "https://api.openai.com/v1/models";
const TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Deserialize)]
struct MockResponse {
    status: Option<u16>,
    error: Option<String>,
}

/// Probe the models endpoint with the given key and return the HTTP status.
/// Transport failures (timeout, DNS, TLS, refused connection) come back as
/// `Err`; any received response, whatever its status, is `Ok`.
pub async fn probe(key: &str) -> surf::Result<u16> {
    if let Ok(path) = std::env::var(ENV_KEY_CHK_MOCK_FILE) {
        let data = std::fs::read_to_string(path)?;
        return mock_result(&data);
    }

    let client: surf::Client = surf::Config::new().set_timeout(Some(TIMEOUT)).try_into()?;
    let res = client.send(request(key)).await?;
    Ok(res.status().into())
}

fn request(key: &str) -> surf::Request {
    surf::get(MODELS_URI)
        .header("Authorization", format!("Bearer {key}"))
        .build()
}

fn mock_result(data: &str) -> surf::Result<u16> {
    let mock: MockResponse = serde_json::from_str(data)?;
    if let Some(msg) = mock.error {
        return Err(surf::Error::from_str(
            surf::StatusCode::RequestTimeout,
            msg,
        ));
    }
    Ok(mock.status.unwrap_or(200))
}
