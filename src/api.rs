use actix_web::{error, web, HttpRequest, HttpResponse, Result};
use serde::{Deserialize, Serialize};
use tokio::time::timeout;

use crate::config::Config;
use crate::encoder::{MatrixEncoder, QrCodeEncoder};
use crate::error::ErrorMessage;
use crate::qr::QrImageRenderer;
use crate::validation::{validate, CorrectionLevel, OutputType};

pub const DEFAULT_SIZE: i32 = 250;
pub const DEFAULT_TYPE: &str = "png";
pub const DEFAULT_CORRECTION: &str = "L";

#[derive(Serialize)]
struct ServerInfo {
    message: String,
    status: String,
    version: String,
    supported_types: Vec<String>,
    correction_levels: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct QrCodeQuery {
    contents: Option<String>,
    #[serde(default = "default_size")]
    size: i32,
    #[serde(rename = "type", default = "default_type")]
    output_type: String,
    #[serde(default = "default_correction")]
    correction: String,
}

fn default_size() -> i32 {
    DEFAULT_SIZE
}

fn default_type() -> String {
    DEFAULT_TYPE.to_string()
}

fn default_correction() -> String {
    DEFAULT_CORRECTION.to_string()
}

/// Register every route of the service.
pub fn configure(cfg: &mut web::ServiceConfig) {
    configure_with::<QrCodeEncoder>(cfg);
}

/// Same routes, with QR codes rendered by the given encoder type.
pub fn configure_with<E>(cfg: &mut web::ServiceConfig)
where
    E: MatrixEncoder + Default + Send + 'static,
{
    cfg.app_data(query_config())
        .route("/", web::get().to(index))
        .service(
            web::scope("/api")
                .route("/health", web::get().to(health))
                .route("/qrcode", web::get().to(qrcode::<E>)),
        );
}

/// Malformed query strings get the same JSON error shape as validation failures.
fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req: &HttpRequest| {
        log::warn!("Rejected query string: {}", err);
        let body = ErrorMessage::new(format!("Invalid query parameters: {}", err));
        error::InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
    })
}

async fn index() -> Result<HttpResponse> {
    let info = ServerInfo {
        message: "QR code image service".to_string(),
        status: "running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        supported_types: OutputType::ALL.iter().map(|t| t.as_str().to_string()).collect(),
        correction_levels: CorrectionLevel::ALL
            .iter()
            .map(|l| l.as_str().to_string())
            .collect(),
    };
    Ok(HttpResponse::Ok().json(info))
}

async fn health() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(1))
}

async fn qrcode<E>(
    config: web::Data<Config>,
    query: web::Query<QrCodeQuery>,
) -> Result<HttpResponse>
where
    E: MatrixEncoder + Default + Send + 'static,
{
    let query = query.into_inner();
    let contents = query.contents.unwrap_or_default();

    let request = match validate(&contents, query.size, &query.output_type, &query.correction) {
        Ok(request) => request,
        Err(e) => {
            log::warn!("Rejected QR request: {}", e);
            return Ok(HttpResponse::BadRequest().json(ErrorMessage::from(e)));
        }
    };

    log::info!(
        "Rendering {}px {} QR code, level {}",
        request.size(),
        request.output_type().as_str(),
        request.correction_level().as_str()
    );

    // Encoding is CPU-bound, keep it off the async workers. The timeout only
    // bounds the response: a timed-out task still runs to completion on the pool.
    let render =
        web::block(move || QrImageRenderer::with_encoder(E::default()).render(&request));

    match timeout(config.render.timeout(), render).await {
        Ok(Ok(Ok(image))) => Ok(HttpResponse::Ok()
            .content_type(image.content_type)
            .body(image.bytes)),
        Ok(Ok(Err(e))) => {
            log::error!("QR rendering failed: {}", e);
            Ok(HttpResponse::InternalServerError().json(ErrorMessage::new(e.to_string())))
        }
        Ok(Err(e)) => {
            log::error!("QR rendering task failed: {}", e);
            Ok(HttpResponse::InternalServerError().json(ErrorMessage::new(e.to_string())))
        }
        Err(_) => {
            log::error!(
                "QR rendering timed out after {}ms",
                config.render.timeout_ms
            );
            Ok(HttpResponse::RequestTimeout()
                .json(ErrorMessage::new("QR code rendering timed out")))
        }
    }
}
