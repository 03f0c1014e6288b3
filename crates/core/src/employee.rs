use serde::{Deserialize, Deserializer, Serialize};

/// An employee record as held by the upstream employee API.
///
/// Field names on the wire use the upstream's `employee_*` mapping; `id` is
/// unmapped. The same representation is served to callers of the façade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    #[serde(rename = "employee_name", deserialize_with = "null_as_empty")]
    pub name: String,
    /// Absent salaries are excluded from every salary computation.
    #[serde(rename = "employee_salary", default)]
    pub salary: Option<u64>,
    #[serde(rename = "employee_age", default)]
    pub age: Option<u32>,
    #[serde(rename = "employee_title", default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(rename = "employee_email", default, deserialize_with = "null_as_empty")]
    pub email: String,
}

/// The upstream sends `null` for unset text fields; read those as `""`.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Employee {
    /// Build a record from a draft and the id the upstream assigned to it.
    pub fn from_draft(id: impl Into<String>, draft: EmployeeDraft) -> Self {
        Employee {
            id: id.into(),
            name: draft.name,
            salary: draft.salary,
            age: draft.age,
            title: draft.title,
            email: draft.email,
        }
    }
}

/// Every employee attribute except `id`. Submitted to the upstream on create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeDraft {
    #[serde(rename = "employee_name", deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(rename = "employee_salary", default)]
    pub salary: Option<u64>,
    #[serde(rename = "employee_age", default)]
    pub age: Option<u32>,
    #[serde(rename = "employee_title", default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(rename = "employee_email", default, deserialize_with = "null_as_empty")]
    pub email: String,
}
