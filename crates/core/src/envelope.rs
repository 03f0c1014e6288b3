use serde::Deserialize;

/// The upstream's response wrapper: `{ "data": <payload>, ... }`.
///
/// Any other top-level keys (`status`, `error`) are ignored. A body without a
/// `data` field fails to decode.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn into_data(self) -> T {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Employee;

    #[test]
    fn decodes_list_payload_and_ignores_status() {
        let body = r#"{
            "data": [{"id": "1", "employee_name": "A", "employee_salary": 10}],
            "status": "Successfully processed request."
        }"#;
        let envelope: Envelope<Vec<Employee>> = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.into_data().len(), 1);
    }

    #[test]
    fn null_data_decodes_as_none() {
        let body = r#"{"data": null, "status": "Employee not found"}"#;
        let envelope: Envelope<Option<Employee>> = serde_json::from_str(body).unwrap();
        assert!(envelope.data.is_none());
    }

    #[test]
    fn bare_array_is_rejected() {
        let body = r#"[{"id": "1", "employee_name": "A"}]"#;
        assert!(serde_json::from_str::<Envelope<Vec<Employee>>>(body).is_err());
    }

    #[test]
    fn missing_data_is_rejected() {
        let body = r#"{"status": "Too Many Requests"}"#;
        assert!(serde_json::from_str::<Envelope<Vec<Employee>>>(body).is_err());
    }
}
