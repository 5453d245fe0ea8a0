use std::io::Read;

use alarmhook::{initiate, AlarmBatch, Notifier, NotifierConfig};

/// Reads one trigger batch as JSON from stdin and forwards matching alarms.
/// Any fatal error exits non-zero so the invoking mechanism sees the failure.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    initiate();

    let cfg = NotifierConfig::from_env();

    let mut raw = String::new();
    std::io::stdin().read_to_string(&mut raw)?;
    let batch: AlarmBatch = serde_json::from_str(&raw)?;

    Notifier::from_config(&cfg).handle(&batch).await?;
    Ok(())
}
