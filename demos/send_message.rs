use std::io;

use smsgate::{Credentials, GatewayClient, GatewayConfig, Message, ProcessingState};

fn required_var(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let user = required_var("SMSGATE_USER")?;
    let password = required_var("SMSGATE_PASSWORD")?;
    let phone = required_var("SMSGATE_PHONE")?;
    let text = std::env::var("SMSGATE_MESSAGE")
        .unwrap_or_else(|_| "Hello from the smsgate demo.".to_owned());

    let mut config = GatewayConfig::new(Credentials::new(user, password)?);
    if let Ok(base_url) = std::env::var("SMSGATE_BASE_URL") {
        config = config.with_base_url(base_url);
    }
    let client = GatewayClient::new(config)?;

    let message = Message {
        with_delivery_report: Some(true),
        ..Message::new(text, vec![phone])
    };
    let mut state = client.send(&message).await?;
    println!("enqueued {} ({})", state.id, state.state);

    for _ in 0..10 {
        if state.state != ProcessingState::PENDING && state.state != ProcessingState::PROCESSED {
            break;
        }
        tokio::time::sleep(std::time::Duration::from_secs(3)).await;
        state = client.get_state(&state.id).await?;
        println!("state: {}", state.state);
    }

    for recipient in &state.recipients {
        println!(
            "{}: {} {}",
            recipient.phone_number,
            recipient.state,
            recipient.error.as_deref().unwrap_or("")
        );
    }

    Ok(())
}
