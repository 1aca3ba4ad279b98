use crate::di::RecordServices;
use anyhow::bail;
use std::sync::Arc;
use stubzone_domain::Config;
use stubzone_infrastructure::dns::DnsServer;
use tracing::{info, warn};

const DEFAULT_DNS_PORT: u16 = 53;
const INSECURE_DNS_PORT: u16 = 5353;
const PRIVILEGED_PORT_LIMIT: u16 = 1024;

pub async fn serve(mut config: Config, insecure: bool) -> anyhow::Result<()> {
    if insecure && config.server.port == DEFAULT_DNS_PORT {
        config.server.port = INSECURE_DNS_PORT;
        warn!(port = INSECURE_DNS_PORT, "Running in insecure mode");
    }

    if config.server.port < PRIVILEGED_PORT_LIMIT && !is_root() {
        bail!(
            "must run as root to bind to port {}. Try using --insecure or sudo",
            config.server.port
        );
    }

    let server = DnsServer::new(
        config.server.bind_address.clone(),
        config.server.port,
        &config.storage.path,
    )?
    .with_port_fallback(config.server.port_fallback);

    let records = RecordServices::new(server.store()).list.execute().await;
    info!(
        bind_address = %config.server.bind_address,
        port = config.server.port,
        storage = %config.storage.path,
        records = records.len(),
        "DNS server configured"
    );

    Arc::new(server).run_until_terminated().await?;

    info!("Server shutdown complete");
    Ok(())
}

fn is_root() -> bool {
    unsafe { libc::geteuid() == 0 }
}
