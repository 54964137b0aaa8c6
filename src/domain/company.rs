#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanySummary {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Company {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
}

/// A company together with the ids of every invoice it owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyDetail {
    pub company: Company,
    pub invoices: Vec<i32>,
}

#[derive(Debug, Clone)]
pub struct NewCompany {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
}

/// Mutable fields of a company. The code never changes after creation.
#[derive(Debug, Clone)]
pub struct CompanyChanges {
    pub name: String,
    pub description: Option<String>,
}
