pub mod companies;
pub mod invoices;

use actix_web::{web, HttpRequest, HttpResponse};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::{CompanyService, InvoiceService};
use crate::errors::AppError;

#[derive(Debug, Serialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn deleted() -> Self {
        Self {
            status: "deleted".to_string(),
        }
    }
}

/// Malformed or missing JSON bodies become 400s with the shared error body.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}

/// Path segments that do not parse (e.g. a non-numeric invoice id) are
/// reported as 404 on every endpoint.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|_err, req| {
        AppError::NotFound(format!("Not found: {}", req.path())).into()
    })
}

/// Register both resources and the extractor configuration on an app.
pub fn configure(
    cfg: &mut web::ServiceConfig,
    company_service: web::Data<CompanyService>,
    invoice_service: web::Data<InvoiceService>,
) {
    cfg.app_data(json_config())
        .app_data(path_config())
        .app_data(company_service)
        .app_data(invoice_service)
        .service(
            web::scope("/companies")
                .route("", web::get().to(companies::list_companies))
                .route("", web::post().to(companies::create_company))
                .route("/", web::get().to(companies::missing_code))
                .route("/", web::put().to(companies::missing_code))
                .route("/", web::delete().to(companies::missing_code))
                .route("/{code}", web::get().to(companies::get_company))
                .route("/{code}", web::put().to(companies::update_company))
                .route("/{code}", web::delete().to(companies::delete_company)),
        )
        .service(
            web::scope("/invoices")
                .route("", web::get().to(invoices::list_invoices))
                .route("", web::post().to(invoices::create_invoice))
                .route("/{id}", web::get().to(invoices::get_invoice))
                .route("/{id}", web::put().to(invoices::update_invoice))
                .route("/{id}", web::delete().to(invoices::delete_invoice)),
        );
}

/// Fallback for unknown routes.
pub async fn not_found(req: HttpRequest) -> Result<HttpResponse, AppError> {
    Err(AppError::NotFound(format!(
        "No route for {} {}",
        req.method(),
        req.path()
    )))
}
