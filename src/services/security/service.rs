//! Zone security level adapter.
//!
//! Reads and writes the `security_level` zone setting. Each operation issues a
//! single request, converts keys between the wire and application conventions, and
//! resolves to an [`ApiResponse`] whatever the outcome.

use serde_json::json;
use tracing::{debug, instrument, warn};

use crate::{
	models::{ApiResponse, ClientConfig, CloudflareSecurityInfo, FaultKind, SecurityLevel},
	services::transport::{
		HttpTransport, ReqwestTransport, TransportError, TransportRequest, TransportResponse,
	},
	utils::{format_error_chain, to_camel_case, to_hungarian_case},
};

/// Zone setting name used in the settings path
pub const SECURITY_LEVEL_SETTING: &str = "security_level";

/// Builds `/zones/{zone_id}/settings/security_level`, percent-encoding the zone id
pub fn security_level_path(zone_id: &str) -> String {
	format!(
		"/zones/{}/settings/{}",
		urlencoding::encode(zone_id),
		SECURITY_LEVEL_SETTING
	)
}

/// Adapter exposing the zone security level setting
pub struct SecuritySettingService<T: HttpTransport> {
	transport: T,
}

impl SecuritySettingService<ReqwestTransport> {
	/// Creates a service backed by a [`ReqwestTransport`] built from `config`
	pub fn from_config(config: &ClientConfig) -> Result<Self, TransportError> {
		Ok(Self::new(ReqwestTransport::new(config)?))
	}
}

impl<T: HttpTransport> SecuritySettingService<T> {
	pub fn new(transport: T) -> Self {
		Self { transport }
	}

	/// Reads the current security level of a zone.
	///
	/// The zone id is not validated locally; the remote service decides whether
	/// it exists.
	///
	/// # Arguments
	/// * `zone_id` - Identifier of the zone
	///
	/// # Returns
	/// * `ApiResponse<CloudflareSecurityInfo>` - Setting, rejection, or fault
	#[instrument(skip(self), fields(setting = SECURITY_LEVEL_SETTING))]
	pub async fn get_security_info(&self, zone_id: &str) -> ApiResponse<CloudflareSecurityInfo> {
		let request = TransportRequest::get(security_level_path(zone_id));
		self.exchange(request).await
	}

	/// Changes the security level of a zone.
	///
	/// Each call issues a new write; nothing is deduplicated or retried here.
	///
	/// # Arguments
	/// * `zone_id` - Identifier of the zone
	/// * `level` - Level to apply
	///
	/// # Returns
	/// * `ApiResponse<CloudflareSecurityInfo>` - Updated setting, rejection, or fault
	#[instrument(skip(self), fields(setting = SECURITY_LEVEL_SETTING))]
	pub async fn update_security_level(
		&self,
		zone_id: &str,
		level: SecurityLevel,
	) -> ApiResponse<CloudflareSecurityInfo> {
		let body = to_hungarian_case(&json!({ "value": level }));
		let request = TransportRequest::patch(security_level_path(zone_id), body);
		self.exchange(request).await
	}

	async fn exchange(&self, request: TransportRequest) -> ApiResponse<CloudflareSecurityInfo> {
		match self.transport.request(request).await {
			Ok(TransportResponse { status, data }) => {
				debug!(status, "security level request succeeded");
				ApiResponse::from_body(Some(status), to_camel_case(&data))
			}
			Err(error) => failure_response(error),
		}
	}
}

/// Re-expresses a transport error as an envelope.
///
/// Errors carrying a structured body become [`ApiResponse::Failure`]; everything
/// else becomes an [`ApiResponse::Fault`].
fn failure_response<R>(error: TransportError) -> ApiResponse<R> {
	let status = error.status();

	if let Some(data) = error.response_data().filter(|data| !data.is_null()) {
		warn!(?status, "security level request rejected: {}", error);
		return ApiResponse::rejected(status, to_camel_case(data));
	}

	let message = format_error_chain(&error);
	warn!(?status, "security level request failed without a response body: {}", message);

	let kind = if matches!(error, TransportError::ResponseError { .. }) {
		FaultKind::MalformedBody
	} else {
		FaultKind::Transport
	};
	ApiResponse::fault(kind, message)
}
