use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::{http::StatusCode, web, HttpRequest, HttpResponse, Responder};
use log::{error, info, warn};
use serde_json::json;
use tera::Context;
use uuid::Uuid;

use crate::error::SubmitError;
use crate::prompt::Role;
use crate::web::models::{AskRequest, AskResponse, ErrorResponse, Outcome, PageView};
use crate::AppState;

/// Runs one exchange: local preconditions first, then a single gateway call.
pub async fn run_exchange(
    state: &AppState,
    exchange_id: Uuid,
    text: &str,
    role: Role,
) -> Result<String, SubmitError> {
    if !state.credential_configured {
        warn!("Exchange {} rejected: API credential not configured", exchange_id);
        return Err(SubmitError::Configuration);
    }
    if text.trim().is_empty() {
        info!("Exchange {} rejected: empty input", exchange_id);
        return Err(SubmitError::Validation);
    }

    info!("Exchange {} started", exchange_id);
    match state.gateway.answer(text, role).await {
        Ok(answer) => Ok(answer),
        Err(e) => {
            error!("Exchange {} failed: {}", exchange_id, e);
            Err(e.into())
        }
    }
}

fn render_page(data: &AppState, view: &PageView) -> HttpResponse {
    let mut context = Context::new();
    context.insert("roles", &view.roles);
    context.insert("text", &view.text);
    context.insert("outcome", &view.outcome);

    match data.tera.render("index.html", &context) {
        Ok(html) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(html),
        Err(e) => {
            error!("Template error: {}", e);
            HttpResponse::InternalServerError().body("Template error")
        }
    }
}

// Index page handler
pub async fn index(data: web::Data<AppState>) -> impl Responder {
    render_page(&data, &PageView::default())
}

// Form submission; the result replaces whatever the page showed before
pub async fn ask(data: web::Data<AppState>, form: web::Form<AskRequest>) -> impl Responder {
    let form = form.into_inner();
    let role = Role::resolve(form.role_id());
    let result = run_exchange(&data, Uuid::new_v4(), &form.text, role).await;

    let view = PageView::new(role, form.text).with_outcome(Outcome::from(result));
    render_page(&data, &view)
}

// Health check endpoint
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

// JSON variant of the form submission
pub async fn api_answer(data: web::Data<AppState>, req: web::Json<AskRequest>) -> impl Responder {
    let exchange_id = Uuid::new_v4();
    let role = Role::resolve(req.role_id());

    match run_exchange(&data, exchange_id, &req.text, role).await {
        Ok(answer) => HttpResponse::Ok().json(AskResponse {
            answer,
            role,
            exchange_id,
        }),
        Err(e) => {
            let status = match e {
                SubmitError::Configuration => StatusCode::SERVICE_UNAVAILABLE,
                SubmitError::Validation => StatusCode::UNPROCESSABLE_ENTITY,
                SubmitError::Gateway(_) => StatusCode::BAD_GATEWAY,
            };
            HttpResponse::build(status).json(ErrorResponse {
                error: e.to_string(),
                kind: e.kind(),
            })
        }
    }
}

// Unreadable JSON bodies get the same error shape as the other API failures
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    warn!("Rejected JSON body: {}", err);
    let response = HttpResponse::BadRequest().json(ErrorResponse {
        error: err.to_string(),
        kind: "request",
    });
    InternalError::from_response(err, response).into()
}
