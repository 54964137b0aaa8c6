use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::NaiveDate;

use super::company::Company;
use super::errors::DomainError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceSummary {
    pub id: i32,
    pub comp_code: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Invoice {
    pub id: i32,
    pub comp_code: String,
    pub amt: BigDecimal,
    pub paid: bool,
    pub add_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
}

/// An invoice with its owning company embedded in place of `comp_code`.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceDetail {
    pub id: i32,
    pub amt: BigDecimal,
    pub paid: bool,
    pub add_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
    pub company: Company,
}

impl InvoiceDetail {
    pub fn new(invoice: Invoice, company: Company) -> Self {
        Self {
            id: invoice.id,
            amt: invoice.amt,
            paid: invoice.paid,
            add_date: invoice.add_date,
            paid_date: invoice.paid_date,
            company,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewInvoice {
    pub comp_code: String,
    pub amt: BigDecimal,
}

/// Parse a decimal amount from its textual form without going through `f64`.
pub fn parse_amount(text: &str) -> Result<BigDecimal, DomainError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(DomainError::Validation("amt must not be empty".to_string()));
    }
    BigDecimal::from_str(trimmed)
        .map_err(|e| DomainError::Validation(format!("Invalid amt '{}': {}", trimmed, e)))
}
