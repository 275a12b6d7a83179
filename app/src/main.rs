use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::sync::Arc;

use delivery_app::app::{LoginScreen, ScreenCallbacks};
use delivery_app::config::ApiConfig;
use delivery_app::core::{ApiResult, AuthService};
use delivery_app::services::api::ApiClient;
use delivery_app::utils::validation::{validate_email, validate_password};
use delivery_app::{AppError, Result};
use shared::{LoginResponse, SignUpRequest};

const USAGE: &str = "usage: delivery-app [login | signup <name>]";

/// Prints what a GUI would show.
struct ConsoleCallbacks;

impl ScreenCallbacks for ConsoleCallbacks {
    fn on_login_success(&mut self, response: LoginResponse) {
        println!("Logged in as {} <{}>", response.user.name, response.user.email);
    }

    fn show_toast(&mut self, message: String) {
        println!("{message}");
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let _log_guard = delivery_app::debug::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let outcome = match args.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
        [] | ["login"] => run_login().await,
        ["signup", name] => run_sign_up(name).await,
        _ => {
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Exiting after unexpected error");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run_login() -> Result<()> {
    let api = ApiClient::new(ApiConfig::from_env()?)?;
    tracing::info!(base_url = %api.config().base_url, "Using delivery API");
    let mut screen = LoginScreen::new(Arc::new(api), ConsoleCallbacks);

    screen.form.set_email(prompt("Email: ").await?);
    screen.form.set_password(prompt("Password: ").await?);

    if let Some(err) = screen.form.email_error() {
        println!("{err}");
    }
    if let Some(err) = screen.form.password_error() {
        println!("{err}");
    }
    if screen.click_login().is_none() {
        println!("Enter a valid email and a password of at least 6 characters.");
        return Ok(());
    }

    screen.settle().await
}

async fn run_sign_up(name: &str) -> Result<()> {
    let api = ApiClient::new(ApiConfig::from_env()?)?;
    tracing::info!(base_url = %api.config().base_url, "Using delivery API");

    let email = prompt("Email: ").await?;
    let password = prompt("Password: ").await?;
    for check in [validate_email(&email), validate_password(&password)] {
        if let Some(err) = check.error {
            println!("{err}");
            return Ok(());
        }
    }

    let request = SignUpRequest {
        name: name.to_string(),
        email,
        password,
    };
    match api.sign_up(request).await {
        Ok(ApiResult::Success(response)) => {
            println!("Account created for {} <{}>", response.user.name, response.user.email);
            Ok(())
        }
        Ok(ApiResult::Failure(error)) => {
            println!("{}", error.message);
            Ok(())
        }
        Err(e) if e.is_transport() => {
            println!("Unable to reach the server: {e}");
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// Print `label` and read one line from stdin on the blocking pool.
async fn prompt(label: &'static str) -> Result<String> {
    let line = tokio::task::spawn_blocking(move || -> io::Result<String> {
        print!("{label}");
        io::stdout().flush()?;
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line)
    })
    .await
    .map_err(|e| AppError::State(format!("prompt task failed: {e}")))??;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
