//! Service layer for employee records.
//! - Separates business rules from data access behind the `EmployeeRepository` port.
//! - Ships an in-memory store and a SeaORM store.
//! - Reports conflicts and store failures through `EmployeeError`; absence is `None`.

pub mod employee;
#[cfg(test)]
pub mod test_support;

pub use employee::EmployeeService;
