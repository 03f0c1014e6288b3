//! Derived views over a fetched employee collection.
//!
//! Every function here works on a snapshot already fetched from upstream;
//! none of them performs I/O. Records with an absent salary take no part in
//! salary computations.

use std::cmp::Reverse;

use crate::Employee;

/// Number of names returned by the top earners view.
pub const TOP_EARNER_LIMIT: usize = 10;

/// Highest salary in the collection, or `0` when no record carries one.
pub fn highest_salary(employees: &[Employee]) -> u64 {
    employees
        .iter()
        .filter_map(|e| e.salary)
        .max()
        .unwrap_or(0)
}

/// Names of the `limit` highest earners, highest first.
///
/// Equal salaries keep the order in which upstream returned the records.
pub fn top_earner_names(employees: &[Employee], limit: usize) -> Vec<String> {
    let mut ranked: Vec<(u64, &Employee)> = employees
        .iter()
        .filter_map(|e| e.salary.map(|salary| (salary, e)))
        .collect();

    // slice::sort_by_key is stable
    ranked.sort_by_key(|(salary, _)| Reverse(*salary));

    ranked
        .into_iter()
        .take(limit)
        .map(|(_, e)| e.name.clone())
        .collect()
}

/// Records whose name contains `query`, compared case-insensitively.
///
/// An empty query keeps every record.
pub fn filter_by_name(employees: Vec<Employee>, query: &str) -> Vec<Employee> {
    let needle = query.to_lowercase();
    employees
        .into_iter()
        .filter(|e| e.name.to_lowercase().contains(&needle))
        .collect()
}
