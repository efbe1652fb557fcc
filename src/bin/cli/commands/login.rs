use anyhow::Result;

use annoncard_lib::session::SessionGate;

use crate::OutputFormat;

/// Run the login check. Returns whether access was granted.
pub fn run(username: &str, password: &str, format: &OutputFormat) -> Result<bool> {
    let mut gate = SessionGate::new();
    let granted = gate.attempt_login(username, password);

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "granted": granted,
                "user": gate.user(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            if granted {
                println!("Welcome to AnnonCard, {}!", username);
            }
        }
    }

    Ok(granted)
}
