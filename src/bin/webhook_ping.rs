// webhook_ping.rs – sends one payload straight to the configured n8n webhook
// and prints the reply. Handy for checking N8N_WEBHOOK_URL before starting
// the relay.
//
// Usage:
//   webhook-ping                     # sends {"chatInput": "ping"}
//   webhook-ping "hello there"       # sends {"chatInput": "hello there"}
//   webhook-ping '{"event": "x"}'    # a JSON object argument is sent unchanged

use anyhow::Result;
use n8n_relay::config::Config;
use n8n_relay::forwarder::{Forwarder, HttpForwarder};
use serde_json::{Value, json};

/// Turns the optional CLI argument into the outbound payload
fn build_payload(arg: Option<String>) -> Value {
    match arg {
        None => json!({"chatInput": "ping"}),
        Some(raw) => match serde_json::from_str::<Value>(&raw) {
            Ok(value @ Value::Object(_)) => value,
            _ => json!({"chatInput": raw}),
        },
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    println!("🚀 n8n webhook ping");
    println!("{}", "=".repeat(50));

    let config = Config::from_env()?;
    let forwarder = HttpForwarder::new(&config.webhook_url)?;
    let payload = build_payload(std::env::args().nth(1));

    println!("Webhook: {}", forwarder.url());
    println!("Payload: {}", payload);

    match forwarder.forward(&payload).await {
        Ok(reply) => {
            println!("✅ Webhook replied");
            println!("{}", "─".repeat(60));
            println!("{}", serde_json::to_string_pretty(&reply)?);
            println!("{}", "─".repeat(60));
            Ok(())
        }
        Err(error) => {
            println!("❌ Webhook call failed: {}", error);
            if config.webhook_url.contains("/webhook-test/") {
                println!("💡 Hint: n8n test webhooks only listen while the workflow editor is waiting for a test event");
            }
            Err(error.into())
        }
    }
}
