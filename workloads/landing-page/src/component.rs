//! Spin HTTP component entry point.

use chrono::Datelike;
use spin_sdk::http::{Fields, IncomingRequest, Method as SpinMethod, OutgoingResponse, ResponseOutparam};
use spin_sdk::http_component;

use physio_content::PageContent;
use physio_core::{Method, RequestContext, SpinVariables};
use physio_observability::StructuredLogger;
use physio_streaming::StreamingSink;

use crate::page::stream_page;
use crate::response::{BodyMode, ResponsePlan};
use crate::state::PageState;

#[http_component]
async fn handle_landing(req: IncomingRequest, response_out: ResponseOutparam) {
    let path = req.path_with_query().unwrap_or_else(|| "/".to_string());
    let ctx = RequestContext::from_path_with_query(method_of(req.method()), &path)
        .with_upstream_request_id(upstream_request_id(&req).as_deref());

    let logger = StructuredLogger::new(ctx.request_id.clone())
        .with_workload("landing-page")
        .with_route("/")
        .with_config(&SpinVariables);

    let content = PageContent::standard();
    let state = PageState::from_query(&ctx, content);
    let plan = ResponsePlan::for_request(&ctx, &state);

    if plan.status == 405 {
        logger
            .warn_builder("Method not allowed")
            .field("method", ctx.method.as_str())
            .emit();
    }

    let Some(response) = build_response(&plan, &logger) else {
        return;
    };

    if plan.body == BodyMode::Empty {
        response_out.set(response);
        return;
    }

    let body = response.take_body();
    response_out.set(response);
    let mut sink = StreamingSink::new(body, ctx.timing.clone());

    let year = chrono::Utc::now().year();
    match stream_page(&mut sink, content, &state, year).await {
        Ok(()) => {
            let mut builder = logger
                .info_builder("Page streamed")
                .field_i64("sections", sink.sections_sent().len() as i64)
                .field_bool("seeded_state", !state.is_initial());
            if let Some(ttfb) = sink.timing().time_to_shell() {
                builder = builder.duration_ms("time_to_shell_ms", ttfb);
            }
            if let Some(total) = sink.timing().total() {
                builder = builder.duration_ms("total_ms", total);
            }
            builder.emit();
        }
        Err(e) => {
            logger
                .error_builder("Streaming failed")
                .field("error", e.to_string())
                .field("phase", format!("{:?}", sink.phase()))
                .emit();
        }
    }
}

fn build_response(plan: &ResponsePlan, logger: &StructuredLogger) -> Option<OutgoingResponse> {
    let fields = match Fields::from_list(&plan.header_bytes()) {
        Ok(fields) => fields,
        Err(e) => {
            logger
                .error_builder("Invalid response headers")
                .field("error", format!("{:?}", e))
                .emit();
            return None;
        }
    };
    let response = OutgoingResponse::new(fields);
    if response.set_status_code(plan.status).is_err() {
        logger
            .error_builder("Invalid status code")
            .field_i64("status", i64::from(plan.status))
            .emit();
        return None;
    }
    Some(response)
}

/// Request id set by a proxy in front of Spin, if any.
fn upstream_request_id(req: &IncomingRequest) -> Option<String> {
    req.headers()
        .get(&"x-request-id".to_string())
        .into_iter()
        .find_map(|value| String::from_utf8(value).ok())
}

fn method_of(method: SpinMethod) -> Method {
    match method {
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
