//! Entity helpers against an in-memory SQLite database migrated with the real migrator.
use anyhow::Result;
use configs::DatabaseConfig;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;

use crate::db::connect_with_config;
use crate::empleado;
use crate::errors::ModelError;

async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = connect_with_config(&DatabaseConfig::with_url("sqlite::memory:")).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

#[tokio::test]
async fn create_assigns_ids_in_order() -> Result<()> {
    let db = setup_test_db().await?;
    let a = empleado::create(&db, "antonella", "lopez torres", "antonella@example.com").await?;
    let b = empleado::create(&db, "silvana", "torres", "silvana@example.com").await?;
    assert!(a.id > 0);
    assert!(b.id > a.id);

    let all = empleado::list(&db).await?;
    assert_eq!(all, vec![a.clone(), b]);

    let found = empleado::find_by_email(&db, "antonella@example.com").await?;
    assert_eq!(found, Some(a));
    Ok(())
}

#[tokio::test]
async fn duplicate_email_is_a_conflict() -> Result<()> {
    let db = setup_test_db().await?;
    empleado::create(&db, "ju", "lo", "ja@we").await?;
    let err = empleado::create(&db, "otro", "nombre", "ja@we").await.unwrap_err();
    assert!(matches!(err, ModelError::Conflict(_)), "unexpected: {err:?}");
    assert_eq!(empleado::list(&db).await?.len(), 1);
    Ok(())
}

#[tokio::test]
async fn overwrite_updates_and_reinserts() -> Result<()> {
    let db = setup_test_db().await?;
    let mut m = empleado::create(&db, "ju", "lo", "ja@we").await?;
    m.nombre = "lao".into();
    m.email = "dad@as".into();
    let updated = empleado::overwrite(&db, m.clone()).await?;
    assert_eq!(updated, m);
    assert_eq!(empleado::find(&db, m.id).await?, Some(m.clone()));

    empleado::delete(&db, m.id).await?;
    assert_eq!(empleado::find(&db, m.id).await?, None);
    let back = empleado::overwrite(&db, m.clone()).await?;
    assert_eq!(back.id, m.id);
    Ok(())
}

#[tokio::test]
async fn delete_missing_id_is_ok() -> Result<()> {
    let db = setup_test_db().await?;
    empleado::delete(&db, 404).await?;
    assert!(empleado::list(&db).await?.is_empty());
    Ok(())
}
