use async_trait::async_trait;

use super::domain::{Employee, EmployeeDraft};
use super::errors::EmployeeError;

/// Record store for employees. The store assigns ids and owns the canonical copy.
///
/// Implementations must reject a save that would give two records the same email,
/// reporting it as [`EmployeeError::EmailTaken`].
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, EmployeeError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, EmployeeError>;
    /// Insert when `draft.id` is `None`, otherwise overwrite the record with that id.
    async fn save(&self, draft: EmployeeDraft) -> Result<Employee, EmployeeError>;
    async fn find_all(&self) -> Result<Vec<Employee>, EmployeeError>;
    /// Idempotent: a missing id is not an error.
    async fn delete_by_id(&self, id: i64) -> Result<(), EmployeeError>;
}

/// In-memory store for tests, doc examples and database-less runs.
pub mod memory {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Mutex, MutexGuard};

    #[derive(Default)]
    struct State {
        rows: BTreeMap<i64, Employee>,
        last_id: i64,
    }

    #[derive(Default)]
    pub struct InMemoryEmployeeRepository {
        state: Mutex<State>,
        saves: AtomicUsize,
    }

    impl InMemoryEmployeeRepository {
        /// Number of `save` calls received, including rejected ones.
        pub fn save_calls(&self) -> usize {
            self.saves.load(Ordering::SeqCst)
        }

        fn lock(&self) -> Result<MutexGuard<'_, State>, EmployeeError> {
            self.state.lock().map_err(|e| EmployeeError::Repository(e.to_string()))
        }
    }

    #[async_trait]
    impl EmployeeRepository for InMemoryEmployeeRepository {
        async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, EmployeeError> {
            Ok(self.lock()?.rows.get(&id).cloned())
        }

        async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, EmployeeError> {
            Ok(self.lock()?.rows.values().find(|e| e.email == email).cloned())
        }

        async fn save(&self, draft: EmployeeDraft) -> Result<Employee, EmployeeError> {
            self.saves.fetch_add(1, Ordering::SeqCst);
            let mut state = self.lock()?;
            let taken = state
                .rows
                .values()
                .any(|e| e.email == draft.email && Some(e.id) != draft.id);
            if taken {
                return Err(EmployeeError::EmailTaken(draft.email));
            }
            let id = match draft.id {
                Some(id) => id,
                None => state.last_id + 1,
            };
            state.last_id = state.last_id.max(id);
            let employee = Employee { id, nombre: draft.nombre, apellido: draft.apellido, email: draft.email };
            state.rows.insert(id, employee.clone());
            Ok(employee)
        }

        async fn find_all(&self) -> Result<Vec<Employee>, EmployeeError> {
            Ok(self.lock()?.rows.values().cloned().collect())
        }

        async fn delete_by_id(&self, id: i64) -> Result<(), EmployeeError> {
            self.lock()?.rows.remove(&id);
            Ok(())
        }
    }

}
