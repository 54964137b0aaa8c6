use bigdecimal::BigDecimal;
use diesel::prelude::*;

use crate::db::DbPool;
use crate::domain::company::Company;
use crate::domain::errors::DomainError;
use crate::domain::invoice::{Invoice, InvoiceSummary, NewInvoice};
use crate::domain::ports::InvoiceRepository;
use crate::schema::{companies, invoices};

use super::models::{CompanyRow, InvoiceRow, InvoiceSummaryRow, NewInvoiceRow};

pub struct DieselInvoiceRepository {
    pool: DbPool,
}

impl DieselInvoiceRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl InvoiceRepository for DieselInvoiceRepository {
    fn list(&self) -> Result<Vec<InvoiceSummary>, DomainError> {
        let mut conn = self.pool.get()?;

        let rows = invoices::table
            .select(InvoiceSummaryRow::as_select())
            .order(invoices::id.asc())
            .load(&mut conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    fn find_with_company(
        &self,
        id: i32,
    ) -> Result<Option<(Invoice, Option<Company>)>, DomainError> {
        let mut conn = self.pool.get()?;

        // Left join so a dangling comp_code still yields the invoice row.
        let row = invoices::table
            .left_join(companies::table)
            .filter(invoices::id.eq(id))
            .select((InvoiceRow::as_select(), Option::<CompanyRow>::as_select()))
            .first::<(InvoiceRow, Option<CompanyRow>)>(&mut conn)
            .optional()?;

        Ok(row.map(|(invoice, company)| (invoice.into(), company.map(Into::into))))
    }

    fn create(&self, invoice: NewInvoice) -> Result<Invoice, DomainError> {
        let mut conn = self.pool.get()?;

        let row = diesel::insert_into(invoices::table)
            .values(&NewInvoiceRow {
                comp_code: &invoice.comp_code,
                amt: &invoice.amt,
            })
            .returning(InvoiceRow::as_returning())
            .get_result(&mut conn)?;

        Ok(row.into())
    }

    fn update_amount(&self, id: i32, amt: BigDecimal) -> Result<Option<Invoice>, DomainError> {
        let mut conn = self.pool.get()?;

        let row = diesel::update(invoices::table.find(id))
            .set(invoices::amt.eq(amt))
            .returning(InvoiceRow::as_returning())
            .get_result(&mut conn)
            .optional()?;

        Ok(row.map(Into::into))
    }

    fn delete(&self, id: i32) -> Result<bool, DomainError> {
        let mut conn = self.pool.get()?;

        let deleted = diesel::delete(invoices::table.find(id)).execute(&mut conn)?;

        Ok(deleted > 0)
    }
}
