use confdesk_bridge::MessageFromBackend;
use confdesk_bridge::config_type::ConfigType;
use gpui::{AppContext, Application, Global, WindowOptions};
use gpui_component::Root;
use tokio::sync::mpsc;

use crate::entities::{
    document_entity::DocumentEntity, notifications_entity::NotificationsEntity,
    settings_entity::SettingsEntity,
};

pub mod components;
pub mod entities;
pub mod formatting;
mod views;

/// Frontend-side handle for issuing commands to the backend.
#[derive(Clone)]
pub struct BackendBridge {
    pub to_backend: mpsc::Sender<confdesk_bridge::MessageToBackend>,
}

impl BackendBridge {
    pub async fn request_config(&self) {
        self.to_backend
            .send(confdesk_bridge::MessageToBackend::ConfigurationRequest)
            .await
            .expect("failed to request config");
    }

    pub async fn update_server_address(&self, address: String) {
        self.to_backend
            .send(confdesk_bridge::MessageToBackend::UpdateServerAddressRequest(address))
            .await
            .expect("failed to request server address update");
    }

    pub async fn fetch_content(&self, config_type: ConfigType) {
        self.to_backend
            .send(confdesk_bridge::MessageToBackend::FetchContentRequest { config_type })
            .await
            .expect("failed to request configuration content");
    }

    pub async fn save_content(&self, config_type: ConfigType, content: String) {
        self.to_backend
            .send(confdesk_bridge::MessageToBackend::SaveContentRequest {
                config_type,
                content,
            })
            .await
            .expect("failed to request content save");
    }
}

impl Global for BackendBridge {}

pub fn run(
    mut rx: mpsc::Receiver<confdesk_bridge::MessageFromBackend>,
    tx: mpsc::Sender<confdesk_bridge::MessageToBackend>,
) -> anyhow::Result<()> {
    let app = Application::new().with_assets(gpui_component_assets::Assets);

    app.run(move |cx| {
        gpui_component::init(cx);

        let settings = cx.new(|_| SettingsEntity::default());
        let notifications = cx.new(|_| NotificationsEntity::default());
        let document = cx.new(|_| DocumentEntity::default());

        let data = entities::DataEntities {
            settings,
            notifications,
            document,
        };
        let listener_data = data.clone();

        let bridge = BackendBridge {
            to_backend: tx.clone(),
        };
        cx.set_global(bridge.clone());

        cx.spawn(async move |cx| {
            cx.open_window(WindowOptions::default(), |window, cx| {
                cx.spawn(async move |cx| {
                    while let Some(message) = rx.recv().await {
                        println!("Got a message from backend: {message:?}");
                        match message {
                            MessageFromBackend::ConfigurationResponse(config) => {
                                SettingsEntity::update(&listener_data.settings, config, cx)
                            }
                            MessageFromBackend::NotificationMessage(notification) => {
                                let _ = listener_data.notifications.update(cx, |model, cx| {
                                    model.push(notification.kind, notification.message);
                                    cx.notify();
                                });
                            }
                            MessageFromBackend::ContentResponse {
                                config_type,
                                content,
                            } => {
                                let _ = listener_data.document.update(cx, |model, cx| {
                                    model.config_type = config_type;
                                    model.content = content;
                                    cx.notify();
                                });
                            }
                        }
                    }
                })
                .detach();

                cx.spawn(async move |_| {
                    bridge.request_config().await;
                    bridge.fetch_content(ConfigType::default()).await;
                })
                .detach();

                let view = cx.new(|cx| crate::views::FrontendUi::new(&data, window, cx));
                cx.new(|cx| Root::new(view, window, cx))
            })?;

            Ok::<_, anyhow::Error>(())
        })
        .detach();
    });

    Ok(())
}
