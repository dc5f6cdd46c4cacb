use super::types::{GatewayError, HealthResponse, InvocationError};
use crate::forwarder::{InboundEvent, OutboundResponse, RequestForwarder};
use axum::{
    body::{Body, Bytes},
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Json, Response},
};
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{Instrument, error, info, info_span};
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub forwarder: Arc<RequestForwarder>,
}

impl AppState {
    pub fn new(forwarder: RequestForwarder) -> Self {
        Self {
            forwarder: Arc::new(forwarder),
        }
    }
}

/// Direct invocation: the request body is the event itself.
pub async fn invoke(
    State(state): State<AppState>,
    Json(event): Json<InboundEvent>,
) -> Result<Json<OutboundResponse>, (StatusCode, Json<InvocationError>)> {
    let request_id = Uuid::new_v4();
    let span = info_span!("invocation", %request_id);

    match state.forwarder.handle(event).instrument(span).await {
        Ok(response) => {
            info!("Invocation {} succeeded", request_id);
            Ok(Json(response))
        }
        Err(e) => {
            error!("Invocation {} failed: {}", request_id, e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(InvocationError {
                    error_message: e.to_string(),
                    error_type: e.kind().to_string(),
                }),
            ))
        }
    }
}

/// Proxy integration: wraps the raw HTTP request into an event and renders
/// the forwarder's response as the HTTP response.
pub async fn proxy(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let request_id = Uuid::new_v4();
    let span = info_span!("invocation", %request_id);

    let body = match String::from_utf8(body.to_vec()) {
        Ok(body) => body,
        Err(e) => {
            error!("Invocation {} failed: body is not UTF-8: {}", request_id, e);
            return gateway_failure();
        }
    };
    let event = event_from_request(&method, &uri, &headers, body);

    match state.forwarder.handle(event).instrument(span).await {
        Ok(response) => {
            info!("Invocation {} succeeded", request_id);
            render(response)
        }
        Err(e) => {
            error!("Invocation {} failed: {}", request_id, e);
            gateway_failure()
        }
    }
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        endpoint_name: state.forwarder.endpoint_name().to_string(),
    })
}

fn event_from_request(
    method: &Method,
    uri: &Uri,
    headers: &HeaderMap,
    body: String,
) -> InboundEvent {
    let headers: Map<String, Value> = headers
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_string(), Value::String(v.to_string())))
        })
        .collect();

    let mut event = InboundEvent {
        body: (!body.is_empty()).then_some(Value::String(body)),
        http_method: Some(Value::String(method.to_string())),
        path: Some(Value::String(uri.path().to_string())),
        headers: Some(Value::Object(headers)),
        ..Default::default()
    };
    if let Some(query) = uri.query() {
        event
            .extra
            .insert("rawQueryString".to_string(), Value::String(query.to_string()));
    }
    event
}

fn render(response: OutboundResponse) -> Response {
    let Ok(status) = StatusCode::from_u16(response.status_code) else {
        error!("Forwarder returned invalid status {}", response.status_code);
        return gateway_failure();
    };

    let mut builder = axum::http::Response::builder().status(status);
    for (name, value) in &response.headers {
        builder = builder.header(name, value);
    }

    builder.body(Body::from(response.body)).unwrap_or_else(|e| {
        error!("Failed to render forwarder response: {}", e);
        gateway_failure()
    })
}

fn gateway_failure() -> Response {
    (
        StatusCode::BAD_GATEWAY,
        Json(GatewayError {
            message: "Internal server error".to_string(),
        }),
    )
        .into_response()
}
