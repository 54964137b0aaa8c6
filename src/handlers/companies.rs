use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::CompanyService;
use crate::domain::company::{Company, CompanyChanges, CompanyDetail, CompanySummary, NewCompany};
use crate::errors::AppError;

use super::StatusResponse;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCompanyRequest {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCompanyRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CompanySummaryResponse {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CompanyListResponse {
    pub companies: Vec<CompanySummaryResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CompanyResponse {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CompanyEnvelope {
    pub company: CompanyResponse,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CompanyDetailResponse {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    /// Ids of every invoice owned by the company; empty when there are none.
    pub invoices: Vec<i32>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CompanyDetailEnvelope {
    pub company: CompanyDetailResponse,
}

impl From<CompanySummary> for CompanySummaryResponse {
    fn from(c: CompanySummary) -> Self {
        Self {
            code: c.code,
            name: c.name,
        }
    }
}

impl From<Company> for CompanyResponse {
    fn from(c: Company) -> Self {
        Self {
            code: c.code,
            name: c.name,
            description: c.description,
        }
    }
}

impl From<CompanyDetail> for CompanyDetailResponse {
    fn from(d: CompanyDetail) -> Self {
        Self {
            code: d.company.code,
            name: d.company.name,
            description: d.company.description,
            invoices: d.invoices,
        }
    }
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// GET /companies
///
/// Lists every company as `{code, name}`.
#[utoipa::path(
    get,
    path = "/companies",
    responses(
        (status = 200, description = "All companies", body = CompanyListResponse),
        (status = 500, description = "Internal server error"),
    ),
    tag = "companies"
)]
pub async fn list_companies(
    service: web::Data<CompanyService>,
) -> Result<HttpResponse, AppError> {
    let companies = web::block(move || service.list_companies()).await??;

    Ok(HttpResponse::Ok().json(CompanyListResponse {
        companies: companies.into_iter().map(Into::into).collect(),
    }))
}

/// GET /companies/{code}
///
/// Returns one company with the ids of its invoices.
#[utoipa::path(
    get,
    path = "/companies/{code}",
    params(
        ("code" = String, Path, description = "Company code"),
    ),
    responses(
        (status = 200, description = "Company found", body = CompanyDetailEnvelope),
        (status = 400, description = "Empty company code"),
        (status = 404, description = "Company not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "companies"
)]
pub async fn get_company(
    service: web::Data<CompanyService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let code = path.into_inner();

    let detail = web::block(move || service.get_company(&code)).await??;

    Ok(HttpResponse::Ok().json(CompanyDetailEnvelope {
        company: detail.into(),
    }))
}

/// POST /companies
#[utoipa::path(
    post,
    path = "/companies",
    request_body = CreateCompanyRequest,
    responses(
        (status = 201, description = "Company created", body = CompanyEnvelope),
        (status = 400, description = "Missing or malformed body"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "companies"
)]
pub async fn create_company(
    service: web::Data<CompanyService>,
    body: web::Json<CreateCompanyRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let new_company = NewCompany {
        code: body.code,
        name: body.name,
        description: body.description,
    };

    let company = web::block(move || service.create_company(new_company)).await??;

    Ok(HttpResponse::Created().json(CompanyEnvelope {
        company: company.into(),
    }))
}

/// PUT /companies/{code}
///
/// Replaces name and description. An omitted description is stored as null.
#[utoipa::path(
    put,
    path = "/companies/{code}",
    params(
        ("code" = String, Path, description = "Company code"),
    ),
    request_body = UpdateCompanyRequest,
    responses(
        (status = 200, description = "Company updated", body = CompanyEnvelope),
        (status = 400, description = "Missing or malformed body"),
        (status = 404, description = "Company not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "companies"
)]
pub async fn update_company(
    service: web::Data<CompanyService>,
    path: web::Path<String>,
    body: web::Json<UpdateCompanyRequest>,
) -> Result<HttpResponse, AppError> {
    let code = path.into_inner();
    let body = body.into_inner();
    let changes = CompanyChanges {
        name: body.name,
        description: body.description,
    };

    let company = web::block(move || service.update_company(&code, changes)).await??;

    Ok(HttpResponse::Ok().json(CompanyEnvelope {
        company: company.into(),
    }))
}

/// DELETE /companies/{code}
///
/// Invoices owned by the company are deleted with it.
#[utoipa::path(
    delete,
    path = "/companies/{code}",
    params(
        ("code" = String, Path, description = "Company code"),
    ),
    responses(
        (status = 200, description = "Company deleted", body = StatusResponse),
        (status = 404, description = "Company not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "companies"
)]
pub async fn delete_company(
    service: web::Data<CompanyService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let code = path.into_inner();

    web::block(move || service.delete_company(&code)).await??;

    Ok(HttpResponse::Ok().json(StatusResponse::deleted()))
}

/// `/companies/` with nothing after the slash.
pub async fn missing_code() -> Result<HttpResponse, AppError> {
    Err(AppError::BadRequest(
        "company code must not be empty".to_string(),
    ))
}
