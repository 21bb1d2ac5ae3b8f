use std::io;

use smsgate::{Credentials, GatewayClient, GatewayConfig, Webhook, WebhookEvent};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let user = std::env::var("SMSGATE_USER").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSGATE_USER environment variable is required",
        )
    })?;
    let password = std::env::var("SMSGATE_PASSWORD").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSGATE_PASSWORD environment variable is required",
        )
    })?;
    let url = std::env::var("SMSGATE_WEBHOOK_URL").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSGATE_WEBHOOK_URL environment variable is required",
        )
    })?;

    let client = GatewayClient::new(GatewayConfig::new(Credentials::new(user, password)?))?;

    let registered = client
        .register_webhook(&Webhook::new(url, WebhookEvent::SMS_RECEIVED))
        .await?;
    println!("registered webhook {}", registered.id);

    for webhook in client.list_webhooks().await? {
        println!("{} {} {}", webhook.id, webhook.event, webhook.url);
    }

    if std::env::var_os("SMSGATE_KEEP_WEBHOOK").is_none() {
        client.delete_webhook(&registered.id).await?;
        println!("deleted webhook {}", registered.id);
    }

    Ok(())
}
