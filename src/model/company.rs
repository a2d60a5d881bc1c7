//! Company record, the single entity browsed by the directory.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a company, unique within one fetched collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompanyId(i64);

impl CompanyId {
    /// Wrap a raw id from the server.
    pub fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// The raw id.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for CompanyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single directory entry.
///
/// Field names match the JSON served by `GET /companies`:
///
/// ```json
/// {"id": 1, "name": "Acme", "industry": "Tech", "location": "Berlin",
///  "employees": 120, "founded": 2011, "description": "..."}
/// ```
///
/// Records are immutable once fetched. The query pipeline only borrows them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    /// Server-assigned id.
    pub id: CompanyId,
    /// Display name, also the default sort key.
    pub name: String,
    /// Sector label, one of the industry filter choices.
    pub industry: String,
    /// City, one of the location filter choices.
    pub location: String,
    /// Head count. Never negative.
    pub employees: u32,
    /// Founding year.
    pub founded: i32,
    /// One-line summary. Searched together with the name.
    pub description: String,
}

impl Company {
    /// Convenience constructor used by fixtures and the bundled dataset.
    pub fn new(
        id: i64,
        name: impl Into<String>,
        industry: impl Into<String>,
        location: impl Into<String>,
        employees: u32,
        founded: i32,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: CompanyId::new(id),
            name: name.into(),
            industry: industry.into(),
            location: location.into(),
            employees,
            founded,
            description: description.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_from_api_shape() {
        let json = r#"{
            "id": 7,
            "name": "Northwind",
            "industry": "Retail",
            "location": "Seattle",
            "employees": 450,
            "founded": 1998,
            "description": "Speciality foods importer"
        }"#;

        let company: Company = serde_json::from_str(json).expect("valid company json");

        assert_eq!(company.id, CompanyId::new(7));
        assert_eq!(company.name, "Northwind");
        assert_eq!(company.industry, "Retail");
        assert_eq!(company.location, "Seattle");
        assert_eq!(company.employees, 450);
        assert_eq!(company.founded, 1998);
    }

    #[test]
    fn rejects_negative_employee_count() {
        let json = r#"{"id":1,"name":"A","industry":"B","location":"C",
            "employees":-3,"founded":2000,"description":"D"}"#;
        let result: Result<Company, _> = serde_json::from_str(json);
        assert!(result.is_err(), "employee count must be non-negative");
    }

    #[test]
    fn rejects_missing_field() {
        let json = r#"{"id":1,"name":"A","industry":"B","location":"C","employees":3}"#;
        let result: Result<Company, _> = serde_json::from_str(json);
        assert!(result.is_err(), "founded and description are required");
    }

    #[test]
    fn id_serializes_as_plain_integer() {
        let company = Company::new(42, "A", "B", "C", 1, 2000, "D");
        let value = serde_json::to_value(&company).expect("serializable");
        assert_eq!(value["id"], serde_json::json!(42));
    }

    #[test]
    fn company_id_display_is_number() {
        assert_eq!(CompanyId::new(15).to_string(), "15");
    }
}
