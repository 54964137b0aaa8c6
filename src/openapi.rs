use utoipa::OpenApi;

use crate::handlers::{self, companies, invoices};

#[derive(OpenApi)]
#[openapi(
    info(title = "BizTime API", description = "Companies and the invoices they own."),
    paths(
        companies::list_companies,
        companies::get_company,
        companies::create_company,
        companies::update_company,
        companies::delete_company,
        invoices::list_invoices,
        invoices::get_invoice,
        invoices::create_invoice,
        invoices::update_invoice,
        invoices::delete_invoice,
    ),
    components(schemas(
        handlers::StatusResponse,
        companies::CreateCompanyRequest,
        companies::UpdateCompanyRequest,
        companies::CompanyListResponse,
        companies::CompanyEnvelope,
        companies::CompanyDetailEnvelope,
        invoices::CreateInvoiceRequest,
        invoices::UpdateInvoiceRequest,
        invoices::InvoiceListResponse,
        invoices::InvoiceEnvelope,
        invoices::InvoiceDetailEnvelope,
    )),
    tags(
        (name = "companies", description = "Company management"),
        (name = "invoices", description = "Invoice management"),
    )
)]
pub struct ApiDoc;
