use mockito::{Matcher, Server};
use serde_json::json;

use cloudflare_security::{
	models::{
		ApiResponse, ClientConfig, Credentials, FaultKind, SecretString, SecretValue,
		SecurityLevel,
	},
	services::{
		security::SecuritySettingService,
		transport::{HttpTransport, ReqwestTransport, TransportError, TransportRequest},
	},
};

const ZONE: &str = "023e105f4ecef8ad9ca31a8372d0c353";
const ZONE_PATH: &str = "/zones/023e105f4ecef8ad9ca31a8372d0c353/settings/security_level";

fn token_config(base_url: &str) -> ClientConfig {
	ClientConfig::new(Credentials::ApiToken {
		token: SecretValue::Plain(SecretString::from("test-token")),
	})
	.with_base_url(base_url)
}

fn create_service(base_url: &str) -> SecuritySettingService<ReqwestTransport> {
	SecuritySettingService::from_config(&token_config(base_url)).unwrap()
}

#[tokio::test]
async fn test_get_security_info_over_http() {
	let mut server = Server::new_async().await;
	let mock = server
		.mock("GET", ZONE_PATH)
		.match_header("authorization", "Bearer test-token")
		.with_status(200)
		.with_header("content-type", "application/json")
		.with_body(
			json!({
				"success": true,
				"errors": [],
				"messages": [],
				"result": {
					"id": "security_level",
					"value": "medium",
					"editable": true,
					"modified_on": "2014-01-01T05:20:00.12345Z"
				}
			})
			.to_string(),
		)
		.create_async()
		.await;

	let service = create_service(&server.url());
	let info = service.get_security_info(ZONE).await.into_result().unwrap();

	mock.assert_async().await;
	assert_eq!(info.value, SecurityLevel::Medium);
	assert_eq!(info.editable, Some(true));
}

#[tokio::test]
async fn test_update_security_level_over_http() {
	let mut server = Server::new_async().await;
	let mock = server
		.mock("PATCH", ZONE_PATH)
		.match_header("authorization", "Bearer test-token")
		.match_header("content-type", "application/json")
		.match_body(Matcher::Json(json!({ "value": "under_attack" })))
		.with_status(200)
		.with_header("content-type", "application/json")
		.with_body(r#"{"success":true,"errors":[],"messages":[],"result":{"id":"security_level","value":"under_attack","modified_on":null}}"#)
		.create_async()
		.await;

	let service = create_service(&server.url());
	let response = service
		.update_security_level(ZONE, SecurityLevel::UnderAttack)
		.await;

	mock.assert_async().await;
	assert_eq!(
		response.result().map(|info| info.value),
		Some(SecurityLevel::UnderAttack)
	);
}

#[tokio::test]
async fn test_api_key_credentials_over_http() {
	let mut server = Server::new_async().await;
	let mock = server
		.mock("GET", ZONE_PATH)
		.match_header("x-auth-email", "ops@example.com")
		.match_header("x-auth-key", "global-key")
		.match_header("authorization", Matcher::Missing)
		.with_status(200)
		.with_body(r#"{"value":"low"}"#)
		.create_async()
		.await;

	let config = ClientConfig::new(Credentials::ApiKey {
		email: "ops@example.com".to_string(),
		key: SecretValue::Plain(SecretString::from("global-key")),
	})
	.with_base_url(server.url());
	let service = SecuritySettingService::from_config(&config).unwrap();

	let response = service.get_security_info(ZONE).await;

	mock.assert_async().await;
	assert_eq!(
		response.result().map(|info| info.value),
		Some(SecurityLevel::Low)
	);
}

#[tokio::test]
async fn test_rejection_over_http() {
	let mut server = Server::new_async().await;
	let mock = server
		.mock("PATCH", ZONE_PATH)
		.with_status(403)
		.with_header("content-type", "application/json")
		.with_body(
			r#"{"success":false,"errors":[{"code":9109,"message":"Unauthorized to access requested resource"}],"messages":[],"result":null}"#,
		)
		.create_async()
		.await;

	let service = create_service(&server.url());
	let response = service
		.update_security_level(ZONE, SecurityLevel::High)
		.await;

	mock.assert_async().await;
	match response {
		ApiResponse::Failure(failure) => {
			assert_eq!(failure.status, Some(403));
			assert_eq!(failure.errors[0].code, Some(9109));
		}
		other => panic!("expected failure, got {:?}", other),
	}
}

#[tokio::test]
async fn test_non_json_error_body_is_fault() {
	let mut server = Server::new_async().await;
	let mock = server
		.mock("GET", ZONE_PATH)
		.with_status(502)
		.with_header("content-type", "text/html")
		.with_body("<html>Bad gateway</html>")
		.create_async()
		.await;

	let service = create_service(&server.url());
	let response = service.get_security_info(ZONE).await;

	mock.assert_async().await;
	match response {
		ApiResponse::Fault(fault) => {
			assert_eq!(fault.kind, FaultKind::MalformedBody);
			assert!(fault.message.contains("502"));
		}
		other => panic!("expected fault, got {:?}", other),
	}
}

#[tokio::test]
async fn test_unreachable_server_is_fault() {
	let service = create_service("http://127.0.0.1:1");
	let response = service.get_security_info(ZONE).await;

	match response {
		ApiResponse::Fault(fault) => {
			assert_eq!(fault.kind, FaultKind::Transport);
			let mut lines = fault.message.lines();
			assert_eq!(
				lines.next(),
				Some(format!("Failed to send GET request to http://127.0.0.1:1{}", ZONE_PATH).as_str())
			);
			assert!(lines.all(|line| line.starts_with("  Caused by: ")));
		}
		other => panic!("expected fault, got {:?}", other),
	}
}

const BUSY_BODY: &str =
	r#"{"success":false,"errors":[{"code":1,"message":"busy"}],"messages":[],"result":null}"#;

#[tokio::test]
async fn test_default_config_does_not_retry() {
	let mut server = Server::new_async().await;
	let mock = server
		.mock("PATCH", ZONE_PATH)
		.with_status(503)
		.with_header("content-type", "application/json")
		.with_body(BUSY_BODY)
		.expect(1)
		.create_async()
		.await;

	let service = create_service(&server.url());
	let response = service
		.update_security_level(ZONE, SecurityLevel::UnderAttack)
		.await;

	mock.assert_async().await;
	match response {
		ApiResponse::Failure(failure) => {
			assert_eq!(failure.status, Some(503));
			assert_eq!(failure.errors[0].message, "busy");
		}
		other => panic!("expected failure, got {:?}", other),
	}
}

#[tokio::test]
async fn test_transient_errors_are_retried_up_to_max_retries() {
	let mut server = Server::new_async().await;
	let mock = server
		.mock("PATCH", ZONE_PATH)
		.with_status(503)
		.with_header("content-type", "application/json")
		.with_body(BUSY_BODY)
		.expect(3)
		.create_async()
		.await;

	let mut config = token_config(&server.url());
	config.max_retries = 2;
	let service = SecuritySettingService::from_config(&config).unwrap();
	let response = service
		.update_security_level(ZONE, SecurityLevel::UnderAttack)
		.await;

	mock.assert_async().await;
	match response {
		ApiResponse::Failure(failure) => {
			assert_eq!(failure.status, Some(503));
			assert_eq!(failure.errors[0].code, Some(1));
		}
		other => panic!("expected failure, got {:?}", other),
	}
}

////////////////////////////////////////////////////////////
// ReqwestTransport tests
////////////////////////////////////////////////////////////

#[tokio::test]
async fn test_transport_returns_wire_body_untouched() {
	let mut server = Server::new_async().await;
	let mock = server
		.mock("GET", "/zones/abc/settings/security_level")
		.with_status(200)
		.with_body(r#"{"modified_on":null,"value":"high"}"#)
		.create_async()
		.await;

	let transport = ReqwestTransport::new(&token_config(&format!("{}/", server.url()))).unwrap();
	let response = transport
		.request(TransportRequest::get("/zones/abc/settings/security_level"))
		.await
		.unwrap();

	mock.assert_async().await;
	assert_eq!(response.status, 200);
	assert_eq!(response.data, json!({ "modified_on": null, "value": "high" }));
}

#[tokio::test]
async fn test_transport_success_without_json_body() {
	let mut server = Server::new_async().await;
	let mock = server
		.mock("GET", "/zones/abc/settings/security_level")
		.with_status(200)
		.with_body("ok")
		.create_async()
		.await;

	let transport = ReqwestTransport::new(&token_config(&server.url())).unwrap();
	let error = transport
		.request(TransportRequest::get("/zones/abc/settings/security_level"))
		.await
		.unwrap_err();

	mock.assert_async().await;
	assert_eq!(error.status(), Some(200));
	assert!(error.response_data().is_none());
}

#[tokio::test]
async fn test_transport_error_status_keeps_body() {
	let mut server = Server::new_async().await;
	let mock = server
		.mock("PATCH", "/zones/abc/settings/security_level")
		.with_status(400)
		.with_body(r#"{"errors":[{"code":1007,"message":"bad"}]}"#)
		.create_async()
		.await;

	let transport = ReqwestTransport::new(&token_config(&server.url())).unwrap();
	let error = transport
		.request(TransportRequest::patch(
			"/zones/abc/settings/security_level",
			json!({ "value": "nope" }),
		))
		.await
		.unwrap_err();

	mock.assert_async().await;
	match error {
		TransportError::ResponseError { status, data, .. } => {
			assert_eq!(status, 400);
			assert_eq!(data.unwrap()["errors"][0]["code"], json!(1007));
		}
		other => panic!("expected response error, got {:?}", other),
	}
}
