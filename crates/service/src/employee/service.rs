use std::sync::Arc;

use tracing::{debug, info, instrument};

use super::domain::{Employee, EmployeeDraft, EmployeeInput};
use super::errors::EmployeeError;
use super::repository::EmployeeRepository;

/// Employee business service independent of web framework.
///
/// Stateless: every call goes to the store. Absence is reported as `None`,
/// never as an error.
pub struct EmployeeService<R: EmployeeRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: EmployeeRepository + ?Sized> EmployeeService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Store a new employee unless its email is already registered.
    ///
    /// # Examples
    /// ```
    /// use service::employee::{service::EmployeeService, repository::memory::InMemoryEmployeeRepository};
    /// use service::employee::{domain::EmployeeInput, errors::EmployeeError};
    /// use std::sync::Arc;
    /// let svc = EmployeeService::new(Arc::new(InMemoryEmployeeRepository::default()));
    /// let input = EmployeeInput { nombre: "ju".into(), apellido: "lo".into(), email: "ja@we".into() };
    /// let created = tokio_test::block_on(svc.create(input.clone())).unwrap();
    /// assert_eq!(created.email, "ja@we");
    /// let again = tokio_test::block_on(svc.create(input));
    /// assert!(matches!(again, Err(EmployeeError::EmailTaken(_))));
    /// ```
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn create(&self, input: EmployeeInput) -> Result<Employee, EmployeeError> {
        if let Some(existing) = self.repo.find_by_email(&input.email).await? {
            debug!(existing_id = existing.id, "email already registered");
            return Err(EmployeeError::EmailTaken(input.email));
        }
        let created = self.repo.save(EmployeeDraft::from(input)).await?;
        info!(id = created.id, "employee_created");
        Ok(created)
    }

    /// All employees in store order.
    pub async fn list(&self) -> Result<Vec<Employee>, EmployeeError> {
        self.repo.find_all().await
    }

    pub async fn get(&self, id: i64) -> Result<Option<Employee>, EmployeeError> {
        self.repo.find_by_id(id).await
    }

    /// Overwrite `nombre`, `apellido` and `email` on the stored record.
    ///
    /// Email uniqueness is not pre-checked here; the store still rejects a
    /// collision with another record as [`EmployeeError::EmailTaken`].
    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: i64, patch: EmployeeInput) -> Result<Option<Employee>, EmployeeError> {
        let Some(mut current) = self.repo.find_by_id(id).await? else {
            debug!("employee not found; nothing to update");
            return Ok(None);
        };
        current.apply(patch);
        let saved = self.repo.save(EmployeeDraft::from(current)).await?;
        info!(id = saved.id, "employee_updated");
        Ok(Some(saved))
    }

    /// Idempotent delete.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), EmployeeError> {
        self.repo.delete_by_id(id).await?;
        info!("employee_deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::employee::repository::memory::InMemoryEmployeeRepository;
    use async_trait::async_trait;

    fn input(nombre: &str, apellido: &str, email: &str) -> EmployeeInput {
        EmployeeInput { nombre: nombre.into(), apellido: apellido.into(), email: email.into() }
    }

    fn setup() -> (Arc<InMemoryEmployeeRepository>, EmployeeService<InMemoryEmployeeRepository>) {
        let repo = Arc::new(InMemoryEmployeeRepository::default());
        (repo.clone(), EmployeeService::new(repo))
    }

    #[tokio::test]
    async fn create_assigns_id_and_echoes_fields() {
        let (_, svc) = setup();
        let e = svc.create(input("salome", "roman lopez", "salome@lopez.com")).await.unwrap();
        assert!(e.id > 0);
        assert_eq!((e.nombre.as_str(), e.apellido.as_str(), e.email.as_str()), ("salome", "roman lopez", "salome@lopez.com"));
    }

    #[tokio::test]
    async fn create_duplicate_email_writes_nothing() {
        let (repo, svc) = setup();
        svc.create(input("salome", "roman", "salome@lopez.com")).await.unwrap();
        let saves = repo.save_calls();

        let err = svc.create(input("otra", "persona", "salome@lopez.com")).await.unwrap_err();
        assert!(matches!(err, EmployeeError::EmailTaken(ref email) if email == "salome@lopez.com"));
        assert_eq!(repo.save_calls(), saves);
        assert_eq!(svc.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn list_returns_every_created_record() {
        let (_, svc) = setup();
        assert!(svc.list().await.unwrap().is_empty());
        let a = svc.create(input("salome", "roman", "salome@lopez.com")).await.unwrap();
        let b = svc.create(input("antonella", "fiufiu", "caramelo@chocolate")).await.unwrap();
        assert_eq!(svc.list().await.unwrap(), vec![a, b]);
    }

    #[tokio::test]
    async fn get_returns_stored_record_or_none() {
        let (_, svc) = setup();
        let e = svc.create(input("ju", "lo", "ja@we")).await.unwrap();
        assert_eq!(svc.get(e.id).await.unwrap(), Some(e));
        assert_eq!(svc.get(999).await.unwrap(), None);
    }

    #[tokio::test]
    async fn update_overwrites_fields_and_keeps_id() {
        let (_, svc) = setup();
        let e = svc.create(input("ju", "lo", "ja@we")).await.unwrap();
        let updated = svc.update(e.id, input("lao", "lioa", "dad@as")).await.unwrap().unwrap();
        assert_eq!(updated, Employee { id: e.id, nombre: "lao".into(), apellido: "lioa".into(), email: "dad@as".into() });
        assert_eq!(svc.get(e.id).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn update_missing_id_is_absent_without_write() {
        let (repo, svc) = setup();
        let out = svc.update(42, input("lao", "lioa", "dad@as")).await.unwrap();
        assert!(out.is_none());
        assert_eq!(repo.save_calls(), 0);
        assert!(svc.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_may_keep_own_email() {
        let (_, svc) = setup();
        let e = svc.create(input("ju", "lo", "ja@we")).await.unwrap();
        let updated = svc.update(e.id, input("juan", "lopez", "ja@we")).await.unwrap().unwrap();
        assert_eq!(updated.nombre, "juan");
    }

    #[tokio::test]
    async fn update_into_another_records_email_is_rejected_by_store() {
        let (_, svc) = setup();
        svc.create(input("ju", "lo", "ja@we")).await.unwrap();
        let b = svc.create(input("lao", "lioa", "dad@as")).await.unwrap();
        let err = svc.update(b.id, input("lao", "lioa", "ja@we")).await.unwrap_err();
        assert!(matches!(err, EmployeeError::EmailTaken(_)));
        assert_eq!(svc.get(b.id).await.unwrap().unwrap().email, "dad@as");
    }

    #[tokio::test]
    async fn delete_removes_record() {
        let (_, svc) = setup();
        let a = svc.create(input("ju", "lo", "ja@we")).await.unwrap();
        svc.create(input("lao", "lioa", "dad@as")).await.unwrap();
        svc.delete(a.id).await.unwrap();
        assert!(svc.get(a.id).await.unwrap().is_none());
        assert_eq!(svc.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn delete_missing_id_succeeds_and_changes_nothing() {
        let (_, svc) = setup();
        let a = svc.create(input("ju", "lo", "ja@we")).await.unwrap();
        svc.delete(a.id + 100).await.unwrap();
        assert_eq!(svc.list().await.unwrap(), vec![a]);
    }

    #[tokio::test]
    async fn works_through_trait_object() {
        let repo: Arc<dyn EmployeeRepository> = Arc::new(InMemoryEmployeeRepository::default());
        let svc = EmployeeService::new(repo);
        let e = svc.create(input("ju", "lo", "ja@we")).await.unwrap();
        assert_eq!(svc.get(e.id).await.unwrap(), Some(e));
    }

    struct FailingRepository;

    #[async_trait]
    impl EmployeeRepository for FailingRepository {
        async fn find_by_id(&self, _id: i64) -> Result<Option<Employee>, EmployeeError> {
            Err(EmployeeError::Repository("connection refused".into()))
        }
        async fn find_by_email(&self, _email: &str) -> Result<Option<Employee>, EmployeeError> {
            Err(EmployeeError::Repository("connection refused".into()))
        }
        async fn save(&self, _draft: EmployeeDraft) -> Result<Employee, EmployeeError> {
            Err(EmployeeError::Repository("connection refused".into()))
        }
        async fn find_all(&self) -> Result<Vec<Employee>, EmployeeError> {
            Err(EmployeeError::Repository("connection refused".into()))
        }
        async fn delete_by_id(&self, _id: i64) -> Result<(), EmployeeError> {
            Err(EmployeeError::Repository("connection refused".into()))
        }
    }

    #[tokio::test]
    async fn store_failures_propagate_unchanged() {
        let svc = EmployeeService::new(Arc::new(FailingRepository));
        let is_repo = |e: EmployeeError| matches!(e, EmployeeError::Repository(ref m) if m == "connection refused");
        assert!(is_repo(svc.create(input("a", "b", "c@d")).await.unwrap_err()));
        assert!(is_repo(svc.list().await.unwrap_err()));
        assert!(is_repo(svc.get(1).await.unwrap_err()));
        assert!(is_repo(svc.update(1, input("a", "b", "c@d")).await.unwrap_err()));
        assert!(is_repo(svc.delete(1).await.unwrap_err()));
    }
}
