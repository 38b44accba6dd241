//! Communication bridge between frontend and backend.
//!
//! This crate defines the types and protocols used to connect a graphical
//! frontend with an asynchronous backend responsible for talking to the
//! cluster management server and for persisting application settings.
//!
//! The design is deliberately lightweight and unidirectional:
//! - The frontend sends commands (e.g., save edited content, fetch a
//!   configuration document, request config).
//! - The backend pushes events (e.g., fetched content, notifications,
//!   configuration snapshots).
//!
//! Communication happens over bounded [`tokio::sync::mpsc`] channels wrapped
//! in [`BridgeChannels`], providing back-pressure, async compatibility, and
//! clean separation of concerns.

pub mod config;
pub mod config_type;
pub mod notification;

use tokio::sync::mpsc::{self, Receiver, Sender};

/// Messages emitted by the backend to inform the frontend of state updates.
///
/// These are typically sent in response to frontend requests or to push
/// asynchronous events (e.g., operation outcomes as notifications).
#[derive(Debug, Clone)]
pub enum MessageFromBackend {
    /// Generic message for all notifications in the application.
    NotificationMessage(notification::NotificationMessage),
    /// Response to the configuration request from the frontend.
    ConfigurationResponse(config::Config),
    /// Current content of a configuration document on the management server.
    ContentResponse {
        /// Which document the content belongs to.
        config_type: config_type::ConfigType,
        /// Raw document text, exactly as the server returned it.
        content: String,
    },
}

/// Commands issued by the frontend to control or query the backend.
///
/// These messages drive the core functionality of the application.
#[derive(Debug, Clone)]
pub enum MessageToBackend {
    /// Request for the application configuration.
    ConfigurationRequest,
    /// Request to change and persist the management server address.
    UpdateServerAddressRequest(String),
    /// Request to fetch the current content of a configuration document.
    FetchContentRequest { config_type: config_type::ConfigType },
    /// Request to submit edited content of a configuration document.
    SaveContentRequest {
        config_type: config_type::ConfigType,
        content: String,
    },
}

/// Paired `tokio::mpsc` channels for bidirectional communication between
/// frontend and backend.
pub struct BridgeChannels {
    /// Receiver used by the frontend to get messages from the backend.
    pub frontend_rx: Receiver<MessageFromBackend>,
    /// Sender used by the frontend to send commands to the backend.
    pub frontend_tx: Sender<MessageToBackend>,

    /// Receiver used by the backend to get commands from the frontend.
    pub backend_rx: Receiver<MessageToBackend>,
    /// Sender used by the backend to send events/responses to the frontend.
    pub backend_tx: Sender<MessageFromBackend>,
}

impl BridgeChannels {
    /// Creates a new pair of bridged channels with the given buffer capacity.
    pub fn new(buffer: usize) -> Self {
        let (to_backend_tx, to_backend_rx) = mpsc::channel(buffer);
        let (to_frontend_tx, to_frontend_rx) = mpsc::channel(buffer);
        Self {
            frontend_tx: to_backend_tx,
            frontend_rx: to_frontend_rx,
            backend_rx: to_backend_rx,
            backend_tx: to_frontend_tx,
        }
    }
}

impl Default for BridgeChannels {
    fn default() -> Self {
        Self::new(64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn channels_are_paired_correctly() {
        let mut channels = BridgeChannels::new(4);

        channels
            .frontend_tx
            .send(MessageToBackend::ConfigurationRequest)
            .await
            .unwrap();
        let command = channels.backend_rx.recv().await.unwrap();
        assert!(matches!(command, MessageToBackend::ConfigurationRequest));

        channels
            .backend_tx
            .send(MessageFromBackend::ContentResponse {
                config_type: config_type::ConfigType::Providers,
                content: "clouds: {}".to_string(),
            })
            .await
            .unwrap();
        let event = channels.frontend_rx.recv().await.unwrap();
        match event {
            MessageFromBackend::ContentResponse {
                config_type,
                content,
            } => {
                assert_eq!(config_type, config_type::ConfigType::Providers);
                assert_eq!(content, "clouds: {}");
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }
}
