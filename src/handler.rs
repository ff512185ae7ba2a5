use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use axum_macros::debug_handler;

use std::sync::Arc;

use crate::service::{EmailGateway, EmailGatewayError};

use crate::dto::SendEmailRequest;

pub fn router(gateway: Arc<EmailGateway>) -> Router {
    Router::new()
        .route("/email", post(send_email))
        .route("/", get(health_check))
        .with_state(gateway)
}

#[debug_handler]
pub async fn send_email(
    State(gateway): State<Arc<EmailGateway>>,
    payload: Result<Json<SendEmailRequest>, JsonRejection>,
) -> Response {
    let payload = match payload {
        Ok(Json(payload)) => payload,
        Err(rejection) => {
            tracing::warn!("Rejected malformed request body: {rejection}");
            return (StatusCode::BAD_REQUEST, Json("Invalid user input")).into_response();
        }
    };

    match gateway.send_email(payload).await {
        Ok(r) => (StatusCode::OK, Json(r)).into_response(),
        Err(e) => {
            tracing::error!("Failed to send email: {e}");
            match e {
                EmailGatewayError::MissingField(_) => {
                    (StatusCode::UNPROCESSABLE_ENTITY, Json("Missing required field"))
                        .into_response()
                }
                EmailGatewayError::AddressFormat(_) => {
                    (StatusCode::BAD_REQUEST, Json("Invalid address format")).into_response()
                }
                EmailGatewayError::MessageBuild(_) => {
                    (StatusCode::INTERNAL_SERVER_ERROR, Json("Failed to build email"))
                        .into_response()
                }
                EmailGatewayError::Delivery(_) => {
                    (StatusCode::BAD_GATEWAY, Json("Failed to deliver email")).into_response()
                }
            }
        }
    }
}

#[debug_handler]
pub async fn health_check() -> Response {
    (StatusCode::OK, "Hello from email gateway!").into_response()
}

#[cfg(test)]
mod tests {
    use axum_test::TestServer;
    use serde_json::json;
    use testresult::TestResult;

    use axum::{Router, http::StatusCode};

    use std::sync::Arc;

    use crate::sender::{MockEmailSender, SendError};
    use crate::service::EmailGateway;

    fn app(sender: MockEmailSender) -> Router {
        super::router(Arc::new(EmailGateway::new(Arc::new(sender))))
    }

    #[tokio::test]
    async fn valid_request_returns_200_email_sent() -> TestResult {
        let mut sender = MockEmailSender::new();
        sender.expect_send().times(1).returning(|_| Ok(()));

        let response = TestServer::new(app(sender))?
            .post("/email")
            .json(&json!({
                "from": "a@x.com",
                "to": "b@x.com",
                "subject": "Hi",
                "body": "Hello there",
            }))
            .await;

        response.assert_status(StatusCode::OK);
        response.assert_json(&json!({ "message": "Email sent" }));

        Ok(())
    }

    #[tokio::test]
    async fn malformed_json_returns_400_without_sending() -> TestResult {
        let mut sender = MockEmailSender::new();
        sender.expect_send().times(0);

        let response = TestServer::new(app(sender))?
            .post("/email")
            .text("definitely not json")
            .content_type("application/json")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!("Invalid user input"));

        Ok(())
    }

    #[tokio::test]
    async fn missing_subject_field_returns_422_without_sending() -> TestResult {
        let mut sender = MockEmailSender::new();
        sender.expect_send().times(0);

        let response = TestServer::new(app(sender))?
            .post("/email")
            .json(&json!({
                "from": "a@x.com",
                "to": "b@x.com",
                "body": "Hello there",
            }))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        response.assert_json(&json!("Missing required field"));

        Ok(())
    }

    #[tokio::test]
    async fn delivery_failure_returns_502() -> TestResult {
        let mut sender = MockEmailSender::new();
        sender
            .expect_send()
            .times(1)
            .returning(|_| Err(SendError::Transport("connection refused".to_string())));

        let response = TestServer::new(app(sender))?
            .post("/email")
            .json(&json!({
                "from": "a@x.com",
                "to": "b@x.com",
                "subject": "Hi",
                "body": "Hello there",
            }))
            .await;

        response.assert_status(StatusCode::BAD_GATEWAY);
        response.assert_json(&json!("Failed to deliver email"));

        Ok(())
    }

    #[tokio::test]
    async fn health_check_greets() -> TestResult {
        let sender = MockEmailSender::new();

        let response = TestServer::new(app(sender))?.get("/").await;

        response.assert_status(StatusCode::OK);
        response.assert_text("Hello from email gateway!");

        Ok(())
    }
}
