use diesel::prelude::*;

use crate::db::DbPool;
use crate::domain::company::{Company, CompanyChanges, CompanySummary, NewCompany};
use crate::domain::errors::DomainError;
use crate::domain::ports::CompanyRepository;
use crate::schema::{companies, invoices};

use super::models::{CompanyChangesRow, CompanyRow, CompanySummaryRow, NewCompanyRow};

pub struct DieselCompanyRepository {
    pool: DbPool,
}

impl DieselCompanyRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl CompanyRepository for DieselCompanyRepository {
    fn list(&self) -> Result<Vec<CompanySummary>, DomainError> {
        let mut conn = self.pool.get()?;

        let rows = companies::table
            .select(CompanySummaryRow::as_select())
            .order(companies::code.asc())
            .load(&mut conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    fn find_by_code(&self, code: &str) -> Result<Option<Company>, DomainError> {
        let mut conn = self.pool.get()?;

        let row = companies::table
            .find(code)
            .select(CompanyRow::as_select())
            .first(&mut conn)
            .optional()?;

        Ok(row.map(Into::into))
    }

    fn invoice_ids(&self, code: &str) -> Result<Vec<i32>, DomainError> {
        let mut conn = self.pool.get()?;

        let ids = invoices::table
            .filter(invoices::comp_code.eq(code))
            .select(invoices::id)
            .order(invoices::id.asc())
            .load(&mut conn)?;

        Ok(ids)
    }

    fn create(&self, company: NewCompany) -> Result<Company, DomainError> {
        let mut conn = self.pool.get()?;

        let row = diesel::insert_into(companies::table)
            .values(&NewCompanyRow {
                code: &company.code,
                name: &company.name,
                description: company.description.as_deref(),
            })
            .returning(CompanyRow::as_returning())
            .get_result(&mut conn)?;

        Ok(row.into())
    }

    fn update(
        &self,
        code: &str,
        changes: CompanyChanges,
    ) -> Result<Option<Company>, DomainError> {
        let mut conn = self.pool.get()?;

        let row = diesel::update(companies::table.find(code))
            .set(&CompanyChangesRow {
                name: &changes.name,
                description: changes.description.as_deref(),
            })
            .returning(CompanyRow::as_returning())
            .get_result(&mut conn)
            .optional()?;

        Ok(row.map(Into::into))
    }

    fn delete(&self, code: &str) -> Result<bool, DomainError> {
        let mut conn = self.pool.get()?;

        let deleted = diesel::delete(companies::table.find(code)).execute(&mut conn)?;

        Ok(deleted > 0)
    }
}
