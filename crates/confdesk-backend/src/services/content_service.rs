//! Save and fetch handlers for configuration documents on the management
//! server.
//!
//! Each request is a single attempt against the server; outcomes are pushed
//! to the frontend as notifications carrying the server's own response text.

use confdesk_bridge::config_type::ConfigType;
use confdesk_bridge::notification::NotificationKind;

const SAVE_ROUTE: &str = "save-configuration";
const FETCH_ROUTE: &str = "get-configuration";

/// Errors produced by a single content request against the management server.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ContentError {
    /// The server answered with a non-success status. The raw response body
    /// is kept verbatim so the user sees exactly what the server said.
    #[error("{body}")]
    Rejected { body: String },
    /// The request never produced a usable response (connect, DNS, protocol
    /// errors, or a body that could not be read).
    #[error("{0}")]
    Transport(reqwest::Error),
}

/// Builds the absolute route URL for the configured server address.
fn route_url(address: &str, route: &str) -> String {
    format!("{}/{}", address.trim_end_matches('/'), route)
}

/// Banner text for a successful save, embedding the server's response body.
fn saved_message(response_body: &str) -> String {
    format!("Содержимое успешно сохранено ({response_body})")
}

/// Banner text for a failed save, embedding the raw error text.
fn save_failed_message(error: &ContentError) -> String {
    format!("Не удалось сохранить содержимое: {error}")
}

/// Banner text for a failed fetch, embedding the raw error text.
fn fetch_failed_message(error: &ContentError) -> String {
    format!("Не удалось загрузить конфигурацию: {error}")
}

/// Submits edited document content to the management server.
///
/// Posts the `config_type` and `content` form fields to the save route and
/// returns the response body on success.
async fn submit_content(
    client: &reqwest::Client,
    address: &str,
    config_type: ConfigType,
    content: &str,
) -> Result<String, ContentError> {
    let response = client
        .post(route_url(address, SAVE_ROUTE))
        .form(&[
            ("config_type", config_type.form_value()),
            ("content", content),
        ])
        .send()
        .await
        .map_err(|e| ContentError::Transport(e.without_url()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ContentError::Transport(e.without_url()))?;

    if status.is_success() {
        Ok(body)
    } else {
        Err(ContentError::Rejected { body })
    }
}

/// Fetches the current document content from the management server.
async fn fetch_content(
    client: &reqwest::Client,
    address: &str,
    config_type: ConfigType,
) -> Result<String, ContentError> {
    let response = client
        .get(route_url(address, FETCH_ROUTE))
        .query(&[("config_type", config_type.form_value())])
        .send()
        .await
        .map_err(|e| ContentError::Transport(e.without_url()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ContentError::Transport(e.without_url()))?;

    if status.is_success() {
        Ok(body)
    } else {
        Err(ContentError::Rejected { body })
    }
}

/// Handles an incoming content save request (see
/// [`confdesk_bridge::MessageToBackend::SaveContentRequest`]).
pub async fn handle_save_content_request(
    context: super::AppContextHandle,
    config_type: ConfigType,
    content: String,
) {
    let (address, request_client) = {
        let state = context.state.read().await;
        (
            state.config.server_config.address.clone(),
            state.request_client.clone(),
        )
    };

    log::info!(
        "Saving {config_type:?} content ({} bytes) to {address}",
        content.len()
    );
    tokio::spawn(async move {
        match submit_content(&request_client, &address, config_type, &content).await {
            Ok(body) => {
                context
                    .send_notification(NotificationKind::Success, saved_message(&body))
                    .await;
            }
            Err(e) => {
                context
                    .send_notification(NotificationKind::Fail, save_failed_message(&e))
                    .await;
            }
        }
    });
}

/// Handles an incoming content fetch request (see
/// [`confdesk_bridge::MessageToBackend::FetchContentRequest`]).
pub async fn handle_fetch_content_request(
    context: super::AppContextHandle,
    config_type: ConfigType,
) {
    let (address, request_client) = {
        let state = context.state.read().await;
        (
            state.config.server_config.address.clone(),
            state.request_client.clone(),
        )
    };

    log::info!("Fetching {config_type:?} content from {address}");
    tokio::spawn(async move {
        match fetch_content(&request_client, &address, config_type).await {
            Ok(content) => {
                context
                    .send(confdesk_bridge::MessageFromBackend::ContentResponse {
                        config_type,
                        content,
                    })
                    .await;
            }
            Err(e) => {
                context
                    .send_notification(NotificationKind::Fail, fetch_failed_message(&e))
                    .await;
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_string_contains, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn route_url_handles_trailing_slashes() {
        assert_eq!(
            route_url("http://127.0.0.1:5000", SAVE_ROUTE),
            "http://127.0.0.1:5000/save-configuration"
        );
        assert_eq!(
            route_url("http://127.0.0.1:5000/", FETCH_ROUTE),
            "http://127.0.0.1:5000/get-configuration"
        );
    }

    #[test]
    fn messages_embed_server_text_verbatim() {
        assert_eq!(
            saved_message("written 2 sections"),
            "Содержимое успешно сохранено (written 2 sections)"
        );

        let rejected = ContentError::Rejected {
            body: "schema validation failed".to_string(),
        };
        assert_eq!(
            save_failed_message(&rejected),
            "Не удалось сохранить содержимое: schema validation failed"
        );
        assert_eq!(
            fetch_failed_message(&rejected),
            "Не удалось загрузить конфигурацию: schema validation failed"
        );
    }

    #[tokio::test]
    async fn submit_returns_body_on_success() {
        let server = MockServer::start().await;

        let _guard = Mock::given(method("POST"))
            .and(path("/save-configuration"))
            .and(body_string_contains("config_type=providers"))
            .and(body_string_contains("content=clouds"))
            .respond_with(ResponseTemplate::new(200).set_body_string("written 1 section"))
            .expect(1)
            .mount_as_scoped(&server)
            .await;

        let client = reqwest::Client::new();
        let result =
            submit_content(&client, &server.uri(), ConfigType::Providers, "clouds").await;

        let body = result.expect("2xx response should be a success");
        assert_eq!(body, "written 1 section");
    }

    #[tokio::test]
    async fn submit_keeps_rejection_body_verbatim() {
        let server = MockServer::start().await;

        let _guard = Mock::given(method("POST"))
            .and(path("/save-configuration"))
            .respond_with(
                ResponseTemplate::new(500).set_body_string("unable to write configuration"),
            )
            .mount_as_scoped(&server)
            .await;

        let client = reqwest::Client::new();
        let result = submit_content(&client, &server.uri(), ConfigType::Logins, "x: 1").await;

        match result {
            Err(ContentError::Rejected { body }) => {
                assert_eq!(body, "unable to write configuration");
            }
            other => panic!("expected a rejection, got: {other:?}"),
        }
    }

    #[tokio::test]
    async fn submit_reports_transport_errors() {
        // Nothing listens here; the connect itself must fail.
        let client = reqwest::Client::new();
        let result = submit_content(&client, "http://127.0.0.1:1", ConfigType::Providers, "")
            .await;

        assert!(matches!(result, Err(ContentError::Transport(_))));
    }

    #[tokio::test]
    async fn fetch_passes_config_type_and_returns_body() {
        let server = MockServer::start().await;

        let _guard = Mock::given(method("GET"))
            .and(path("/get-configuration"))
            .and(query_param("config_type", "instances"))
            .respond_with(ResponseTemplate::new(200).set_body_string("type-a:\n  flavor: large"))
            .expect(1)
            .mount_as_scoped(&server)
            .await;

        let client = reqwest::Client::new();
        let result = fetch_content(&client, &server.uri(), ConfigType::Instances).await;

        assert_eq!(result.expect("2xx fetch"), "type-a:\n  flavor: large");
    }

    #[tokio::test]
    async fn fetch_rejection_keeps_body_verbatim() {
        let server = MockServer::start().await;

        let _guard = Mock::given(method("GET"))
            .and(path("/get-configuration"))
            .respond_with(ResponseTemplate::new(404).set_body_string("no such configuration"))
            .mount_as_scoped(&server)
            .await;

        let client = reqwest::Client::new();
        let result = fetch_content(&client, &server.uri(), ConfigType::Providers).await;

        match result {
            Err(ContentError::Rejected { body }) => assert_eq!(body, "no such configuration"),
            other => panic!("expected a rejection, got: {other:?}"),
        }
    }
}
