//! Issue and validate a code end to end with a mock provider and the file cache.
//!
//! Reads `smscode.toml` (optional) and `SMSCODE__*` environment variables.
//! Run with: cargo run -p sc_infra --example smscode_demo

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use sc_core::services::{CacheVerificationStore, VerificationServiceConfig};
use sc_infra::cache::FileCache;
use sc_infra::sms::{MockSmsProvider, ProviderRegistry};
use sc_shared::{LogFormat, LoggingConfig, PlatformsConfig, SmscodeConfig};

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::new(logging.filter_directive());
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(logging.source_location)
        .with_line_number(logging.source_location);

    match logging.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Compact => builder.compact().init(),
        LogFormat::Pretty => builder.pretty().init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut settings = SmscodeConfig::load(Some(Path::new("smscode.toml")))
        .context("failed to load smscode configuration")?;
    init_tracing(&settings.log);
    if settings.platforms.is_empty() {
        settings = settings.with_platforms(PlatformsConfig::from_templates([("aliyun", "TPL_001")]));
    }

    let config = VerificationServiceConfig::from_settings(&settings)?;
    let mut registry = ProviderRegistry::new();
    let mut outboxes = Vec::new();
    for provider in &config.providers {
        let mock = MockSmsProvider::new(provider.name.clone());
        outboxes.push(mock.clone());
        registry.register(Arc::new(mock));
    }

    let store = CacheVerificationStore::init(
        Arc::new(registry),
        Arc::new(FileCache::from_config(&settings)),
        config,
    )
    .await;

    let mobile = "13800138000";
    let sent = store.create(mobile).await;
    let code = sent.clone().into_result()?;
    println!("sent code to {} via {} provider(s)", mobile, outboxes.len());

    let delivered = outboxes
        .iter()
        .find_map(|outbox| outbox.last_message_to(mobile))
        .context("no provider recorded the message")?;
    println!("delivered with template {:?}", delivered.template_id);

    println!("wrong code accepted: {}", store.validate(mobile, "000000x").await);
    println!("right code accepted: {}", store.validate(mobile, &code).await);
    println!("reuse accepted:      {}", store.validate(mobile, &code).await);

    let resend = store.create(mobile).await;
    println!("resend within cooldown: {}", resend.error_message());

    let token = store.make_mobile_token(mobile).await?;
    println!(
        "token {} resolves to {:?}",
        &token[..12],
        store.get_mobile_by_token(&token).await?
    );

    Ok(())
}
