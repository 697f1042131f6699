//! Issuers command - print the supported issuer listing.

use cardstmt_core::health;

pub async fn run() -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(&health())?);
    Ok(())
}
