//! WHOIS registration lookup — a raw `TcpStream` client, not a whois
//! crate. Optional; gated on `CollectorContext::whois_enabled`.

use std::time::Duration;

use async_trait::async_trait;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::timeout;

use super::{Collector, CollectorContext};
use crate::domain::Variant;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const WRITE_TIMEOUT: Duration = Duration::from_secs(5);
const READ_TIMEOUT: Duration = Duration::from_secs(10);

pub struct Whois;

#[async_trait]
impl Collector for Whois {
    fn id(&self) -> &'static str {
        "whois"
    }
    fn order(&self) -> i32 {
        40
    }
    fn headers(&self) -> Vec<&'static str> {
        vec!["Registrar", "Registrant", "Created"]
    }

    #[tracing::instrument(level = "debug", skip(self, variant, ctx), fields(collector = self.id(), domain = %variant.fqdn()))]
    async fn exec(&self, mut variant: Variant, ctx: &CollectorContext) -> Variant {
        if !ctx.whois_enabled {
            return variant;
        }
        if let Ok(data) = lookup(&variant.fqdn(), &variant.suffix).await {
            for line in data.lines() {
                let lower = line.to_lowercase();
                if let Some(rest) = lower.strip_prefix("registrar:") {
                    variant.set_meta("Registrar", rest.trim().to_string());
                } else if let Some(rest) = lower.strip_prefix("registrant:") {
                    variant.set_meta("Registrant", rest.trim().to_string());
                } else if let Some(rest) = lower.strip_prefix("creation date:") {
                    variant.set_meta("Created", rest.trim().to_string());
                } else if let Some(rest) = lower.strip_prefix("created:") {
                    variant.set_meta("Created", rest.trim().to_string());
                }
            }
        }
        variant
    }
}

async fn lookup(domain: &str, tld: &str) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
    let server = whois_server(tld);
    let mut stream = timeout(CONNECT_TIMEOUT, TcpStream::connect(&server)).await??;

    let query = format!("{domain}\r\n");
    timeout(WRITE_TIMEOUT, stream.write_all(query.as_bytes())).await??;

    let mut response = Vec::new();
    timeout(READ_TIMEOUT, stream.read_to_end(&mut response)).await??;
    Ok(String::from_utf8_lossy(&response).to_string())
}

fn whois_server(tld: &str) -> String {
    match tld {
        "com" | "net" => "whois.verisign-grs.com:43",
        "org" => "whois.pir.org:43",
        "info" => "whois.afilias.net:43",
        "io" => "whois.nic.io:43",
        "co" => "whois.nic.co:43",
        "me" => "whois.nic.me:43",
        "uk" | "co.uk" => "whois.nic.uk:43",
        "de" => "whois.denic.de:43",
        "fr" => "whois.afnic.fr:43",
        _ => "whois.iana.org:43",
    }
    .to_string()
}
