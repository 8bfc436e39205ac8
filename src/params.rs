use clap::Parser;

#[derive(Parser)]
pub struct Args {
    /// Listen address for the HTTP API.
    #[clap(long, env = "HTTP_ADDR", default_value = "0.0.0.0:8082")]
    pub(crate) http_addr: String,
    /// Chain network label, echoed in health/info reporting only.
    #[clap(long, env = "CHAIN_TYPE", default_value = "bnb-testnet")]
    pub(crate) chain_type: String,
    /// Externally reachable URL advertised to the coordinator.
    #[clap(long, env = "EXPOSE_URL", default_value = "")]
    pub(crate) expose_url: String,
    /// Coordinator base URL; registration is skipped when unset.
    #[clap(long, env = "REMOTE_URL")]
    pub(crate) remote_url: Option<String>,
    /// Node name reported in /api/info.
    #[clap(long, env = "NODE_NAME", default_value = "unibase-storage-node")]
    pub(crate) node_name: String,
}
