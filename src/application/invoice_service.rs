use std::sync::Arc;

use bigdecimal::BigDecimal;

use crate::domain::errors::DomainError;
use crate::domain::invoice::{Invoice, InvoiceDetail, InvoiceSummary, NewInvoice};
use crate::domain::ports::InvoiceRepository;

pub struct InvoiceService {
    repo: Arc<dyn InvoiceRepository>,
}

impl InvoiceService {
    pub fn new(repo: Arc<dyn InvoiceRepository>) -> Self {
        Self { repo }
    }

    pub fn list_invoices(&self) -> Result<Vec<InvoiceSummary>, DomainError> {
        self.repo.list()
    }

    pub fn get_invoice(&self, id: i32) -> Result<InvoiceDetail, DomainError> {
        let (invoice, company) = self
            .repo
            .find_with_company(id)?
            .ok_or_else(|| not_found(id))?;

        let Some(company) = company else {
            log::warn!(
                "Invoice {} references missing company '{}'",
                id,
                invoice.comp_code
            );
            return Err(DomainError::NotFound(format!(
                "Company not found for invoice ID#{}",
                id
            )));
        };

        Ok(InvoiceDetail::new(invoice, company))
    }

    pub fn create_invoice(&self, invoice: NewInvoice) -> Result<Invoice, DomainError> {
        if invoice.comp_code.trim().is_empty() {
            return Err(DomainError::Validation(
                "comp_code must not be empty".to_string(),
            ));
        }
        let created = self.repo.create(invoice)?;
        log::info!(
            "Created invoice {} for company {}",
            created.id,
            created.comp_code
        );
        Ok(created)
    }

    /// Changes the amount only; every other column keeps its stored value.
    pub fn update_invoice(&self, id: i32, amt: BigDecimal) -> Result<Invoice, DomainError> {
        self.repo
            .update_amount(id, amt)?
            .ok_or_else(|| not_found(id))
    }

    pub fn delete_invoice(&self, id: i32) -> Result<(), DomainError> {
        if !self.repo.delete(id)? {
            return Err(not_found(id));
        }
        log::info!("Deleted invoice {}", id);
        Ok(())
    }
}

fn not_found(id: i32) -> DomainError {
    DomainError::NotFound(format!("Invoice ID#{} not found", id))
}
