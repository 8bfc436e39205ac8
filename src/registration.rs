use serde::Serialize;

use crate::services::storage_service::NodeConfig;

#[derive(Serialize)]
struct EdgeMeta<'a> {
    #[serde(rename = "type")]
    typ: &'a str,
    name: &'a str,
    chain_type: &'a str,
    expose_url: &'a str,
}

/// One-shot registration with the remote coordinator. Best effort: an
/// unreachable coordinator must never stop the node from serving local
/// traffic, so the outcome is only logged.
pub(crate) async fn register_with_coordinator(config: NodeConfig) {
    let Some(remote_url) = config.remote_url.as_deref().filter(|u| !u.is_empty()) else {
        tracing::debug!("no remote URL configured, skipping registration");
        return;
    };

    let meta = EdgeMeta {
        typ: "store",
        name: &config.node_name,
        chain_type: &config.chain_type,
        expose_url: &config.expose_url,
    };

    let endpoint = format!("{}/api/register", remote_url.trim_end_matches('/'));
    match reqwest::Client::new().post(&endpoint).json(&meta).send().await {
        Ok(resp) if resp.status().is_success() => {
            tracing::info!("registered with coordinator at {}", remote_url);
        }
        Ok(resp) => {
            tracing::warn!(
                "coordinator at {} rejected registration: {}",
                remote_url,
                resp.status()
            );
        }
        Err(e) => {
            tracing::warn!("failed to register with coordinator: {}", e);
        }
    }
}
