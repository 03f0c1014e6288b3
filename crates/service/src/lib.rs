//! roster-service: the upstream adapter and aggregation service of Roster.
//!
//! Layers, bottom up:
//! - [`upstream`]: transports that perform one round trip per call and
//!   return typed errors ([`HttpUpstream`], [`InMemoryUpstream`])
//! - [`EmployeeGateway`]: collapses those errors into empty/absent results
//! - [`EmployeeService`]: the operations the routing layer calls

pub mod config;
pub mod gateway;
pub mod service;
pub mod upstream;

pub use config::{ConfigError, UpstreamConfig};
pub use gateway::EmployeeGateway;
pub use service::EmployeeService;
pub use upstream::http::HttpUpstream;
pub use upstream::memory::InMemoryUpstream;
pub use upstream::{EmployeeUpstream, UpstreamError};
