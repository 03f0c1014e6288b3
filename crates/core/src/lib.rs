//! roster-core: employee records and the aggregation rules of the Roster
//! façade.
//!
//! Nothing in this crate performs I/O. The service crate fetches a snapshot
//! from upstream and hands it to the functions in [`aggregate`].

pub mod aggregate;
pub mod employee;
pub mod envelope;
pub mod outcome;

pub use aggregate::{filter_by_name, highest_salary, top_earner_names, TOP_EARNER_LIMIT};
pub use employee::{Employee, EmployeeDraft};
pub use envelope::Envelope;
pub use outcome::DeleteOutcome;
