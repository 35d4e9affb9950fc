use clap::Parser;
use outcome::Outcome;
use std::process::ExitCode;

mod api;
mod credential;
mod env_keys;
mod outcome;

/// Check whether an OpenAI API key is configured and accepted by the API.
#[derive(Parser)]
#[command(version, about)]
struct Opt {}

async fn check() -> Outcome {
    let Some(key) = credential::get() else {
        return Outcome::NoCredential;
    };
    match api::probe(&key).await {
        Ok(200) => Outcome::Valid,
        Ok(status) => Outcome::InvalidOrFailed(status),
        Err(e) => Outcome::NetworkError(e.to_string()),
    }
}

#[async_std::main]
async fn main() -> ExitCode {
    let _opt = Opt::parse();
    let outcome = check().await;
    println!("{}", outcome.report());
    ExitCode::from(outcome.exit_code())
}
