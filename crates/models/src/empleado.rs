use sea_orm::{entity::prelude::*, DatabaseConnection, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "empleados")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub nombre: String,
    pub apellido: String,
    #[sea_orm(unique)]
    pub email: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub async fn find(db: &DatabaseConnection, id: i64) -> Result<Option<Model>, errors::ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

pub async fn find_by_email(db: &DatabaseConnection, email: &str) -> Result<Option<Model>, errors::ModelError> {
    Ok(Entity::find().filter(Column::Email.eq(email)).one(db).await?)
}

/// All rows, ascending id.
pub async fn list(db: &DatabaseConnection) -> Result<Vec<Model>, errors::ModelError> {
    Ok(Entity::find().order_by_asc(Column::Id).all(db).await?)
}

/// Insert a new row; the database assigns the id.
pub async fn create(db: &DatabaseConnection, nombre: &str, apellido: &str, email: &str) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        nombre: Set(nombre.to_string()),
        apellido: Set(apellido.to_string()),
        email: Set(email.to_string()),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

/// Write every column of `model` under its id, inserting the row if it no longer exists.
pub async fn overwrite(db: &DatabaseConnection, model: Model) -> Result<Model, errors::ModelError> {
    let exists = Entity::find_by_id(model.id).one(db).await?.is_some();
    let am = ActiveModel {
        id: Set(model.id),
        nombre: Set(model.nombre),
        apellido: Set(model.apellido),
        email: Set(model.email),
    };
    if exists {
        Ok(am.update(db).await?)
    } else {
        Ok(am.insert(db).await?)
    }
}

/// Removing an id that is not stored is not an error.
pub async fn delete(db: &DatabaseConnection, id: i64) -> Result<(), errors::ModelError> {
    Entity::delete_by_id(id).exec(db).await?;
    Ok(())
}
