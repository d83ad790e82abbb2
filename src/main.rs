fn main() -> anyhow::Result<()> {
    simple_logger::SimpleLogger::new()
        .with_colors(true)
        .with_threads(true)
        .with_local_timestamps()
        .init()?;

    log::info!("Starting adcraft {}", env!("CARGO_PKG_VERSION"));
    let channels = adcraft_bridge::BridgeChannels::default();
    adcraft_backend::run(channels.backend_rx, channels.backend_tx);
    adcraft_frontend::run(channels.frontend_rx, channels.frontend_tx)
}
