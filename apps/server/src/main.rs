use anyhow::Context;
use primer::domain::config::ServiceConfig;
use primer::kernel::config::load_config;
use primer_logger::Logger;
use primer_server::Server;

#[primer_runtime::main(server)]
async fn main() -> anyhow::Result<()> {
    let _log = Logger::builder().name(env!("CARGO_PKG_NAME")).init()?;

    let cfg: ServiceConfig =
        load_config(Some("statistics")).context("Critical: Configuration is malformed")?;

    Server::builder().config(cfg).build()?.run().await
}
