//! In-memory repositories standing in for Postgres in unit and handler tests.
//!
//! The fake mirrors the constraints the migrations declare: unique company
//! codes, a foreign key from invoices to companies with cascading deletes,
//! and amounts rounded half-up to two decimals like `NUMERIC(10,2)`.

use std::str::FromStr;
use std::sync::{Arc, Mutex, MutexGuard};

use bigdecimal::{BigDecimal, RoundingMode};
use chrono::Utc;

use crate::domain::company::{Company, CompanyChanges, CompanySummary, NewCompany};
use crate::domain::errors::DomainError;
use crate::domain::invoice::{Invoice, InvoiceSummary, NewInvoice};
use crate::domain::ports::{CompanyRepository, InvoiceRepository};

#[derive(Default)]
struct State {
    companies: Vec<Company>,
    invoices: Vec<Invoice>,
    last_invoice_id: i32,
    invoice_id_lookups: usize,
}

#[derive(Clone, Default)]
pub struct InMemoryStore {
    state: Arc<Mutex<State>>,
}

impl InMemoryStore {
    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().expect("in-memory store poisoned")
    }

    pub fn seed_company(&self, code: &str, name: &str, description: Option<&str>) {
        self.state().companies.push(Company {
            code: code.to_string(),
            name: name.to_string(),
            description: description.map(str::to_string),
        });
    }

    pub fn seed_invoice(&self, comp_code: &str, amt: &str) -> i32 {
        let invoice = InvoiceRepository::create(
            self,
            NewInvoice {
                comp_code: comp_code.to_string(),
                amt: BigDecimal::from_str(amt).expect("valid seed amount"),
            },
        )
        .expect("seed invoice");
        invoice.id
    }

    /// Points an invoice at a company that does not exist, bypassing the
    /// foreign key.
    pub fn orphan_invoice(&self, id: i32, comp_code: &str) {
        let mut state = self.state();
        if let Some(invoice) = state.invoices.iter_mut().find(|i| i.id == id) {
            invoice.comp_code = comp_code.to_string();
        }
    }

    pub fn invoice_id_lookups(&self) -> usize {
        self.state().invoice_id_lookups
    }
}

impl CompanyRepository for InMemoryStore {
    fn list(&self) -> Result<Vec<CompanySummary>, DomainError> {
        Ok(self
            .state()
            .companies
            .iter()
            .map(|c| CompanySummary {
                code: c.code.clone(),
                name: c.name.clone(),
            })
            .collect())
    }

    fn find_by_code(&self, code: &str) -> Result<Option<Company>, DomainError> {
        Ok(self
            .state()
            .companies
            .iter()
            .find(|c| c.code == code)
            .cloned())
    }

    fn invoice_ids(&self, code: &str) -> Result<Vec<i32>, DomainError> {
        let mut state = self.state();
        state.invoice_id_lookups += 1;
        Ok(state
            .invoices
            .iter()
            .filter(|i| i.comp_code == code)
            .map(|i| i.id)
            .collect())
    }

    fn create(&self, company: NewCompany) -> Result<Company, DomainError> {
        let mut state = self.state();
        if state.companies.iter().any(|c| c.code == company.code) {
            return Err(DomainError::Internal(format!(
                "duplicate key value violates unique constraint: {}",
                company.code
            )));
        }
        let created = Company {
            code: company.code,
            name: company.name,
            description: company.description,
        };
        state.companies.push(created.clone());
        Ok(created)
    }

    fn update(
        &self,
        code: &str,
        changes: CompanyChanges,
    ) -> Result<Option<Company>, DomainError> {
        let mut state = self.state();
        Ok(state
            .companies
            .iter_mut()
            .find(|c| c.code == code)
            .map(|c| {
                c.name = changes.name;
                c.description = changes.description;
                c.clone()
            }))
    }

    fn delete(&self, code: &str) -> Result<bool, DomainError> {
        let mut state = self.state();
        let before = state.companies.len();
        state.companies.retain(|c| c.code != code);
        if state.companies.len() == before {
            return Ok(false);
        }
        state.invoices.retain(|i| i.comp_code != code);
        Ok(true)
    }
}

impl InvoiceRepository for InMemoryStore {
    fn list(&self) -> Result<Vec<InvoiceSummary>, DomainError> {
        Ok(self
            .state()
            .invoices
            .iter()
            .map(|i| InvoiceSummary {
                id: i.id,
                comp_code: i.comp_code.clone(),
            })
            .collect())
    }

    fn find_with_company(
        &self,
        id: i32,
    ) -> Result<Option<(Invoice, Option<Company>)>, DomainError> {
        let state = self.state();
        Ok(state.invoices.iter().find(|i| i.id == id).map(|invoice| {
            let company = state
                .companies
                .iter()
                .find(|c| c.code == invoice.comp_code)
                .cloned();
            (invoice.clone(), company)
        }))
    }

    fn create(&self, invoice: NewInvoice) -> Result<Invoice, DomainError> {
        let mut state = self.state();
        if !state.companies.iter().any(|c| c.code == invoice.comp_code) {
            return Err(DomainError::Internal(format!(
                "insert violates foreign key constraint: {}",
                invoice.comp_code
            )));
        }
        state.last_invoice_id += 1;
        let created = Invoice {
            id: state.last_invoice_id,
            comp_code: invoice.comp_code,
            amt: invoice.amt.with_scale_round(2, RoundingMode::HalfUp),
            paid: false,
            add_date: Utc::now().date_naive(),
            paid_date: None,
        };
        state.invoices.push(created.clone());
        Ok(created)
    }

    fn update_amount(&self, id: i32, amt: BigDecimal) -> Result<Option<Invoice>, DomainError> {
        let mut state = self.state();
        Ok(state.invoices.iter_mut().find(|i| i.id == id).map(|i| {
            i.amt = amt.with_scale_round(2, RoundingMode::HalfUp);
            i.clone()
        }))
    }

    fn delete(&self, id: i32) -> Result<bool, DomainError> {
        let mut state = self.state();
        let before = state.invoices.len();
        state.invoices.retain(|i| i.id != id);
        Ok(state.invoices.len() != before)
    }
}

/// A repository whose every call fails, for exercising the 500 path.
pub struct FailingStore;

impl FailingStore {
    fn fail<T>() -> Result<T, DomainError> {
        Err(DomainError::Internal("connection refused".to_string()))
    }
}

impl CompanyRepository for FailingStore {
    fn list(&self) -> Result<Vec<CompanySummary>, DomainError> {
        Self::fail()
    }

    fn find_by_code(&self, _code: &str) -> Result<Option<Company>, DomainError> {
        Self::fail()
    }

    fn invoice_ids(&self, _code: &str) -> Result<Vec<i32>, DomainError> {
        Self::fail()
    }

    fn create(&self, _company: NewCompany) -> Result<Company, DomainError> {
        Self::fail()
    }

    fn update(
        &self,
        _code: &str,
        _changes: CompanyChanges,
    ) -> Result<Option<Company>, DomainError> {
        Self::fail()
    }

    fn delete(&self, _code: &str) -> Result<bool, DomainError> {
        Self::fail()
    }
}
