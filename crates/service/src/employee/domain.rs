use serde::{Deserialize, Serialize};

/// Stored employee. `id` comes from the store on first save and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub nombre: String,
    pub apellido: String,
    pub email: String,
}

/// Payload for create, and the patch for update.
/// An `id` sent by a client is ignored; the store assigns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeInput {
    pub nombre: String,
    pub apellido: String,
    pub email: String,
}

/// What the store saves: `id: None` inserts, `Some` overwrites that record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeDraft {
    pub id: Option<i64>,
    pub nombre: String,
    pub apellido: String,
    pub email: String,
}

impl Employee {
    /// Overwrite the three mutable fields, keeping the id.
    pub fn apply(&mut self, patch: EmployeeInput) {
        self.nombre = patch.nombre;
        self.apellido = patch.apellido;
        self.email = patch.email;
    }
}

impl From<EmployeeInput> for EmployeeDraft {
    fn from(input: EmployeeInput) -> Self {
        Self { id: None, nombre: input.nombre, apellido: input.apellido, email: input.email }
    }
}

impl From<Employee> for EmployeeDraft {
    fn from(e: Employee) -> Self {
        Self { id: Some(e.id), nombre: e.nombre, apellido: e.apellido, email: e.email }
    }
}
