//! Spin HTTP component entry point.

use spin_sdk::http::{Method as SpinMethod, Request, Response};
use spin_sdk::http_component;

use physio_core::{Method, RequestContext, SpinVariables};
use physio_mail::{MailConfig, ResendProvider, SpinTransport};
use physio_observability::StructuredLogger;

use crate::{process, ApiResponse};

#[http_component]
async fn handle_contact(req: Request) -> anyhow::Result<Response> {
    let ctx = RequestContext::from_path_with_query(method_of(&req), req.path())
        .with_upstream_request_id(req.header("x-request-id").and_then(|v| v.as_str()));

    let logger = StructuredLogger::new(ctx.request_id.clone())
        .with_workload("contact-api")
        .with_route("/api/contact")
        .with_config(&SpinVariables);

    logger
        .debug_builder("Contact request received")
        .field("method", ctx.method.as_str())
        .field_i64("body_bytes", req.body().len() as i64)
        .emit();

    let response = process(
        &ctx.method,
        req.body(),
        &logger,
        || MailConfig::from_source(&SpinVariables),
        |config| ResendProvider::new(SpinTransport, config),
    )
    .await
    .with_header("x-request-id", &ctx.request_id.to_string());

    Ok(into_spin(response))
}

fn method_of(req: &Request) -> Method {
    match req.method() {
        SpinMethod::Get => Method::Get,
        SpinMethod::Head => Method::Head,
        SpinMethod::Post => Method::Post,
        SpinMethod::Put => Method::Put,
        SpinMethod::Delete => Method::Delete,
        SpinMethod::Patch => Method::Patch,
        SpinMethod::Options => Method::Options,
        _ => Method::Other,
    }
}

fn into_spin(response: ApiResponse) -> Response {
    let mut builder = Response::builder();
    builder.status(response.status.as_u16());
    for (key, value) in &response.headers {
        builder.header(key.as_str(), value.as_str());
    }
    builder.body(response.body).build()
}
