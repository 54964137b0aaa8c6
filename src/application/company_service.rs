use std::sync::Arc;

use crate::domain::company::{Company, CompanyChanges, CompanyDetail, CompanySummary, NewCompany};
use crate::domain::errors::DomainError;
use crate::domain::ports::CompanyRepository;

pub struct CompanyService {
    repo: Arc<dyn CompanyRepository>,
}

impl CompanyService {
    pub fn new(repo: Arc<dyn CompanyRepository>) -> Self {
        Self { repo }
    }

    pub fn list_companies(&self) -> Result<Vec<CompanySummary>, DomainError> {
        self.repo.list()
    }

    /// Returns the company with the ids of its invoices. The invoice lookup
    /// only runs once the company is known to exist.
    pub fn get_company(&self, code: &str) -> Result<CompanyDetail, DomainError> {
        let code = require_code(code)?;
        let company = self
            .repo
            .find_by_code(code)?
            .ok_or_else(|| not_found(code))?;
        let invoices = self.repo.invoice_ids(code)?;
        Ok(CompanyDetail { company, invoices })
    }

    pub fn create_company(&self, company: NewCompany) -> Result<Company, DomainError> {
        require_code(&company.code)?;
        let created = self.repo.create(company)?;
        log::info!("Created company {}", created.code);
        Ok(created)
    }

    pub fn update_company(
        &self,
        code: &str,
        changes: CompanyChanges,
    ) -> Result<Company, DomainError> {
        let code = require_code(code)?;
        self.repo
            .update(code, changes)?
            .ok_or_else(|| not_found(code))
    }

    pub fn delete_company(&self, code: &str) -> Result<(), DomainError> {
        let code = require_code(code)?;
        if !self.repo.delete(code)? {
            return Err(not_found(code));
        }
        log::info!("Deleted company {}", code);
        Ok(())
    }
}

fn require_code(code: &str) -> Result<&str, DomainError> {
    if code.trim().is_empty() {
        return Err(DomainError::Validation(
            "company code must not be empty".to_string(),
        ));
    }
    Ok(code)
}

fn not_found(code: &str) -> DomainError {
    DomainError::NotFound(format!("Company '{}' not found", code))
}
