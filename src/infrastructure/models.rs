use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::company::{Company, CompanySummary};
use crate::domain::invoice::{Invoice, InvoiceSummary};
use crate::schema::{companies, invoices};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = companies)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CompanyRow {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = companies)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CompanySummaryRow {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = companies)]
pub struct NewCompanyRow<'a> {
    pub code: &'a str,
    pub name: &'a str,
    pub description: Option<&'a str>,
}

#[derive(Debug, AsChangeset)]
#[diesel(table_name = companies)]
#[diesel(treat_none_as_null = true)]
pub struct CompanyChangesRow<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = invoices)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct InvoiceRow {
    pub id: i32,
    pub comp_code: String,
    pub amt: BigDecimal,
    pub paid: bool,
    pub add_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = invoices)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct InvoiceSummaryRow {
    pub id: i32,
    pub comp_code: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = invoices)]
pub struct NewInvoiceRow<'a> {
    pub comp_code: &'a str,
    pub amt: &'a BigDecimal,
}

impl From<CompanyRow> for Company {
    fn from(row: CompanyRow) -> Self {
        Company {
            code: row.code,
            name: row.name,
            description: row.description,
        }
    }
}

impl From<CompanySummaryRow> for CompanySummary {
    fn from(row: CompanySummaryRow) -> Self {
        CompanySummary {
            code: row.code,
            name: row.name,
        }
    }
}

impl From<InvoiceRow> for Invoice {
    fn from(row: InvoiceRow) -> Self {
        Invoice {
            id: row.id,
            comp_code: row.comp_code,
            amt: row.amt,
            paid: row.paid,
            add_date: row.add_date,
            paid_date: row.paid_date,
        }
    }
}

impl From<InvoiceSummaryRow> for InvoiceSummary {
    fn from(row: InvoiceSummaryRow) -> Self {
        InvoiceSummary {
            id: row.id,
            comp_code: row.comp_code,
        }
    }
}
