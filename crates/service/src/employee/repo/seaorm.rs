use sea_orm::DatabaseConnection;

use crate::employee::domain::{Employee, EmployeeDraft};
use crate::employee::errors::EmployeeError;
use crate::employee::repository::EmployeeRepository;
use models::errors::ModelError;

pub struct SeaOrmEmployeeRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmEmployeeRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

impl From<models::empleado::Model> for Employee {
    fn from(m: models::empleado::Model) -> Self {
        Self { id: m.id, nombre: m.nombre, apellido: m.apellido, email: m.email }
    }
}

fn repo_err(e: ModelError) -> EmployeeError {
    EmployeeError::Repository(e.to_string())
}

/// The unique index on `email` is the only constraint a save can trip.
fn save_err(email: String) -> impl FnOnce(ModelError) -> EmployeeError {
    move |e| match e {
        ModelError::Conflict(_) => EmployeeError::EmailTaken(email),
        other => repo_err(other),
    }
}

#[async_trait::async_trait]
impl EmployeeRepository for SeaOrmEmployeeRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, EmployeeError> {
        let found = models::empleado::find(&self.db, id).await.map_err(repo_err)?;
        Ok(found.map(Employee::from))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, EmployeeError> {
        let found = models::empleado::find_by_email(&self.db, email).await.map_err(repo_err)?;
        Ok(found.map(Employee::from))
    }

    async fn save(&self, draft: EmployeeDraft) -> Result<Employee, EmployeeError> {
        let saved = match draft.id {
            None => models::empleado::create(&self.db, &draft.nombre, &draft.apellido, &draft.email)
                .await
                .map_err(save_err(draft.email))?,
            Some(id) => {
                let model = models::empleado::Model {
                    id,
                    nombre: draft.nombre,
                    apellido: draft.apellido,
                    email: draft.email.clone(),
                };
                models::empleado::overwrite(&self.db, model)
                    .await
                    .map_err(save_err(draft.email))?
            }
        };
        Ok(saved.into())
    }

    async fn find_all(&self) -> Result<Vec<Employee>, EmployeeError> {
        let rows = models::empleado::list(&self.db).await.map_err(repo_err)?;
        Ok(rows.into_iter().map(Employee::from).collect())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), EmployeeError> {
        models::empleado::delete(&self.db, id).await.map_err(repo_err)
    }
}
