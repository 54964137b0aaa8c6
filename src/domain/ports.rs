use bigdecimal::BigDecimal;

use super::company::{Company, CompanyChanges, CompanySummary, NewCompany};
use super::errors::DomainError;
use super::invoice::{Invoice, InvoiceSummary, NewInvoice};

pub trait CompanyRepository: Send + Sync + 'static {
    fn list(&self) -> Result<Vec<CompanySummary>, DomainError>;
    fn find_by_code(&self, code: &str) -> Result<Option<Company>, DomainError>;
    fn invoice_ids(&self, code: &str) -> Result<Vec<i32>, DomainError>;
    fn create(&self, company: NewCompany) -> Result<Company, DomainError>;
    fn update(&self, code: &str, changes: CompanyChanges)
        -> Result<Option<Company>, DomainError>;
    /// Returns `false` when no company matched. Owned invoices are removed with it.
    fn delete(&self, code: &str) -> Result<bool, DomainError>;
}

pub trait InvoiceRepository: Send + Sync + 'static {
    fn list(&self) -> Result<Vec<InvoiceSummary>, DomainError>;
    /// Loads an invoice and its owning company in a single read. The company
    /// is `None` only if referential integrity has been broken.
    fn find_with_company(&self, id: i32)
        -> Result<Option<(Invoice, Option<Company>)>, DomainError>;
    fn create(&self, invoice: NewInvoice) -> Result<Invoice, DomainError>;
    fn update_amount(&self, id: i32, amt: BigDecimal) -> Result<Option<Invoice>, DomainError>;
    fn delete(&self, id: i32) -> Result<bool, DomainError>;
}
