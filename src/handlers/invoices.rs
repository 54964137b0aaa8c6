use actix_web::{web, HttpResponse};
use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::application::InvoiceService;
use crate::domain::invoice::{parse_amount, Invoice, InvoiceDetail, InvoiceSummary, NewInvoice};
use crate::errors::AppError;

use super::companies::CompanyResponse;
use super::StatusResponse;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateInvoiceRequest {
    pub comp_code: String,
    /// Decimal amount as a string or JSON number, e.g. "25.00"
    #[serde(deserialize_with = "deserialize_amount")]
    #[schema(value_type = String, example = "25.00")]
    pub amt: BigDecimal,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateInvoiceRequest {
    #[serde(deserialize_with = "deserialize_amount")]
    #[schema(value_type = String, example = "900.00")]
    pub amt: BigDecimal,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct InvoiceSummaryResponse {
    pub id: i32,
    pub comp_code: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct InvoiceListResponse {
    pub invoices: Vec<InvoiceSummaryResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct InvoiceResponse {
    pub id: i32,
    pub comp_code: String,
    pub amt: String,
    pub paid: bool,
    pub add_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct InvoiceEnvelope {
    pub invoice: InvoiceResponse,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct InvoiceDetailResponse {
    pub id: i32,
    pub amt: String,
    pub paid: bool,
    pub add_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
    pub company: CompanyResponse,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct InvoiceDetailEnvelope {
    pub invoice: InvoiceDetailResponse,
}

/// Accepts `"25.00"` or `25` and parses the literal text, so the amount never
/// passes through a float. Numbers keep their source text because serde_json
/// is built with `arbitrary_precision`.
fn deserialize_amount<'de, D>(deserializer: D) -> Result<BigDecimal, D::Error>
where
    D: Deserializer<'de>,
{
    let text = match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        other => {
            return Err(de::Error::custom(format!(
                "amt must be a decimal string or number, got {}",
                other
            )))
        }
    };
    parse_amount(&text).map_err(de::Error::custom)
}

/// Amounts are rendered with exactly two decimal places, zero included.
fn format_amount(amt: &BigDecimal) -> String {
    format!("{:.2}", amt)
}

impl From<InvoiceSummary> for InvoiceSummaryResponse {
    fn from(i: InvoiceSummary) -> Self {
        Self {
            id: i.id,
            comp_code: i.comp_code,
        }
    }
}

impl From<Invoice> for InvoiceResponse {
    fn from(i: Invoice) -> Self {
        Self {
            id: i.id,
            comp_code: i.comp_code,
            amt: format_amount(&i.amt),
            paid: i.paid,
            add_date: i.add_date,
            paid_date: i.paid_date,
        }
    }
}

impl From<InvoiceDetail> for InvoiceDetailResponse {
    fn from(d: InvoiceDetail) -> Self {
        Self {
            id: d.id,
            amt: format_amount(&d.amt),
            paid: d.paid,
            add_date: d.add_date,
            paid_date: d.paid_date,
            company: d.company.into(),
        }
    }
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// GET /invoices
///
/// Lists every invoice as `{id, comp_code}`.
#[utoipa::path(
    get,
    path = "/invoices",
    responses(
        (status = 200, description = "All invoices", body = InvoiceListResponse),
        (status = 500, description = "Internal server error"),
    ),
    tag = "invoices"
)]
pub async fn list_invoices(
    service: web::Data<InvoiceService>,
) -> Result<HttpResponse, AppError> {
    let invoices = web::block(move || service.list_invoices()).await??;

    Ok(HttpResponse::Ok().json(InvoiceListResponse {
        invoices: invoices.into_iter().map(Into::into).collect(),
    }))
}

/// GET /invoices/{id}
///
/// Returns the invoice with its owning company embedded in place of
/// `comp_code`.
#[utoipa::path(
    get,
    path = "/invoices/{id}",
    params(
        ("id" = i32, Path, description = "Invoice id"),
    ),
    responses(
        (status = 200, description = "Invoice found", body = InvoiceDetailEnvelope),
        (status = 404, description = "Invoice or its company not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "invoices"
)]
pub async fn get_invoice(
    service: web::Data<InvoiceService>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    let detail = web::block(move || service.get_invoice(id)).await??;

    Ok(HttpResponse::Ok().json(InvoiceDetailEnvelope {
        invoice: detail.into(),
    }))
}

/// POST /invoices
///
/// The store assigns the id, `add_date`, and the unpaid defaults.
#[utoipa::path(
    post,
    path = "/invoices",
    request_body = CreateInvoiceRequest,
    responses(
        (status = 201, description = "Invoice created", body = InvoiceEnvelope),
        (status = 400, description = "Missing or malformed body"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "invoices"
)]
pub async fn create_invoice(
    service: web::Data<InvoiceService>,
    body: web::Json<CreateInvoiceRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let new_invoice = NewInvoice {
        comp_code: body.comp_code,
        amt: body.amt,
    };

    let invoice = web::block(move || service.create_invoice(new_invoice)).await??;

    Ok(HttpResponse::Created().json(InvoiceEnvelope {
        invoice: invoice.into(),
    }))
}

/// PUT /invoices/{id}
#[utoipa::path(
    put,
    path = "/invoices/{id}",
    params(
        ("id" = i32, Path, description = "Invoice id"),
    ),
    request_body = UpdateInvoiceRequest,
    responses(
        (status = 200, description = "Invoice updated", body = InvoiceEnvelope),
        (status = 400, description = "Missing or malformed body"),
        (status = 404, description = "Invoice not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "invoices"
)]
pub async fn update_invoice(
    service: web::Data<InvoiceService>,
    path: web::Path<i32>,
    body: web::Json<UpdateInvoiceRequest>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let amt = body.into_inner().amt;

    let invoice = web::block(move || service.update_invoice(id, amt)).await??;

    Ok(HttpResponse::Ok().json(InvoiceEnvelope {
        invoice: invoice.into(),
    }))
}

/// DELETE /invoices/{id}
///
/// A non-numeric id is a 404, same as an id that matches nothing.
#[utoipa::path(
    delete,
    path = "/invoices/{id}",
    params(
        ("id" = i32, Path, description = "Invoice id"),
    ),
    responses(
        (status = 200, description = "Invoice deleted", body = StatusResponse),
        (status = 404, description = "Invoice not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "invoices"
)]
pub async fn delete_invoice(
    service: web::Data<InvoiceService>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    web::block(move || service.delete_invoice(id)).await??;

    Ok(HttpResponse::Ok().json(StatusResponse::deleted()))
}
