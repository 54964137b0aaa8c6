pub mod company_service;
pub mod invoice_service;

pub use company_service::CompanyService;
pub use invoice_service::InvoiceService;
