use std::io;
use std::time::Duration;

use smsgate::{CaClient, CaConfig, CsrStatus, CsrType, PostCsrRequest};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::var("SMSGATE_CSR_PATH").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSGATE_CSR_PATH environment variable is required",
        )
    })?;
    let content = std::fs::read_to_string(path)?;

    let client = CaClient::new(CaConfig::default().with_timeout(Duration::from_secs(30)))?;
    let request = PostCsrRequest {
        csr_type: Some(CsrType::PRIVATE_SERVER),
        ..PostCsrRequest::new(content)
    };
    if !request.has_pem_header() {
        eprintln!("warning: content does not look like a PEM certificate request");
    }

    let mut response = client.post_csr(&request).await?;
    println!(
        "request {}: {}",
        response.request_id,
        response.status.description()
    );

    while response.status == CsrStatus::PENDING {
        tokio::time::sleep(Duration::from_secs(10)).await;
        response = client.get_csr_status(&response.request_id).await?;
        println!("status: {}", response.status.description());
    }

    if let Some(certificate) = response.certificate {
        println!("{certificate}");
    }

    Ok(())
}
