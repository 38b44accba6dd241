use confdesk_bridge::MessageFromBackend;
use confdesk_bridge::notification::NotificationKind;

/// Handles an incoming configuration request (see
/// [`confdesk_bridge::MessageToBackend::ConfigurationRequest`]).
pub async fn handle_config_request(context: super::AppContextHandle) {
    let config = {
        let state = context.state.read().await;
        state.config.clone()
    };
    context
        .send(MessageFromBackend::ConfigurationResponse(config))
        .await;
}

/// Handles a request to change the management server address (see
/// [`confdesk_bridge::MessageToBackend::UpdateServerAddressRequest`]).
///
/// The new address is applied to the in-memory state first, then persisted.
/// The frontend always receives a fresh configuration snapshot on success, so
/// its settings entity never drifts from what is on disk.
pub async fn handle_update_server_address(context: super::AppContextHandle, address: String) {
    let mut config = {
        let state = context.state.read().await;
        state.config.clone()
    };
    config.server_config.address = address;

    {
        let mut state = context.state.write().await;
        state.config = config.clone();
    }

    log::info!(
        "Updated management server address to {}",
        config.server_config.address
    );
    match crate::config::save_config(&config).await {
        Ok(()) => {
            context
                .send(MessageFromBackend::ConfigurationResponse(config))
                .await;
            context
                .send_notification(NotificationKind::Success, "Настройки сервера сохранены")
                .await;
        }
        Err(e) => {
            context
                .send_notification(
                    NotificationKind::Fail,
                    format!("Не удалось сохранить настройки: {e}"),
                )
                .await;
        }
    }
}
