//! The HTTP surface: one method-agnostic endpoint gated by a shared
//! secret, running the resolve-page, generate, post chain.

use actix_web::middleware::Logger;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, Responder, web};
use serde::Deserialize;
use std::sync::Arc;

use crate::config::Config;
use crate::generator::SentenceGenerator;
use crate::publisher::Publisher;

/// Everything a request needs, wired up once at startup.
pub struct AppState {
    pub config: Config,
    pub generator: SentenceGenerator,
    pub publisher: Arc<dyn Publisher>,
}

#[derive(Deserialize)]
struct AuthParams {
    secret: Option<String>,
}

/// Check the `secret` query parameter against the configured value.
/// Missing parameter or an unparseable query string both fail closed.
fn authorized(query: &str, expected: &str) -> bool {
    match web::Query::<AuthParams>::from_query(query) {
        Ok(params) => params.secret.as_deref() == Some(expected),
        Err(_) => false,
    }
}

/// The webhook. Any method, any path; auth first, then a strictly
/// sequential chain of external calls. Every step has a failure path
/// back to the response, so nothing hangs or panics the worker.
pub async fn webhook(req: HttpRequest, state: web::Data<AppState>) -> impl Responder {
    if !authorized(req.query_string(), &state.config.expected_secret) {
        return HttpResponse::Unauthorized().body("Unauthorized!");
    }

    let config = &state.config;
    let page = match state
        .publisher
        .resolve_page(config.page_id, &config.page_auth_token, &config.page_name)
        .await
    {
        Ok(page) => page,
        Err(e) => return HttpResponse::BadGateway().body(e.to_string()),
    };

    let post = match state.generator.generate().await {
        Ok(post) => post,
        Err(e) => return HttpResponse::BadGateway().body(e.to_string()),
    };

    match state.publisher.post(&page, &post).await {
        Ok(receipt) => {
            log::info!("posted. id: {}", receipt.id);
            HttpResponse::Ok().body(format!("posted! id: {}", receipt.id))
        }
        Err(e) => HttpResponse::BadGateway().body(e.to_string()),
    }
}

/// Bind and serve until shutdown.
pub async fn run(state: AppState) -> Result<(), std::io::Error> {
    let bind_addr = state.config.bind_addr.clone();
    let state = web::Data::new(state);
    log::info!("listening on {}", bind_addr);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::new("%r %s %Ts"))
            .app_data(state.clone())
            .default_service(web::route().to(webhook))
    })
    .bind(bind_addr)?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_secret_is_authorized() {
        assert!(authorized("secret=hunter2", "hunter2"));
    }

    #[test]
    fn wrong_secret_is_rejected() {
        assert!(!authorized("secret=wrong", "hunter2"));
    }

    #[test]
    fn missing_parameter_is_rejected() {
        assert!(!authorized("", "hunter2"));
        assert!(!authorized("other=value", "hunter2"));
    }

    #[test]
    fn malformed_query_is_rejected() {
        assert!(!authorized("secret=%zz", "hunter2"));
    }

    #[test]
    fn secret_comparison_is_exact() {
        assert!(!authorized("secret=hunter", "hunter2"));
        assert!(!authorized("secret=hunter22", "hunter2"));
        assert!(!authorized("secret=Hunter2", "hunter2"));
    }

    #[test]
    fn extra_parameters_do_not_matter() {
        assert!(authorized("foo=bar&secret=hunter2&baz=qux", "hunter2"));
    }

    #[test]
    fn url_encoded_secret_is_decoded() {
        assert!(authorized("secret=a%20b", "a b"));
    }
}
