fn main() -> anyhow::Result<()> {
    simple_logger::SimpleLogger::new()
        .with_colors(true)
        .with_threads(true)
        .with_local_timestamps()
        .init()
        .expect("failed to build logger instance");

    log::info!("Starting confdesk");

    let channels = confdesk_bridge::BridgeChannels::default();
    confdesk_backend::run(channels.backend_rx, channels.backend_tx);
    confdesk_frontend::run(channels.frontend_rx, channels.frontend_tx)?;

    Ok(())
}
