//! Employee module: three-layer architecture (domain, repository, service).

pub mod domain;
pub mod errors;
pub mod repository;
pub mod service;
pub mod repo;

pub use service::EmployeeService;
