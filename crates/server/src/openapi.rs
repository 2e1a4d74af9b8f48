use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct EmployeeDoc {
    pub id: i64,
    pub nombre: String,
    pub apellido: String,
    pub email: String,
}

#[derive(ToSchema)]
pub struct EmployeeInputDoc {
    pub nombre: String,
    pub apellido: String,
    pub email: String,
}

#[derive(ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(ToSchema)]
pub struct ErrorDoc {
    pub error: String,
    pub detail: Option<String>,
    pub code: Option<u16>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::employees::list_employees,
        crate::routes::employees::create_employee,
        crate::routes::employees::get_employee,
        crate::routes::employees::update_employee,
        crate::routes::employees::delete_employee,
    ),
    components(
        schemas(
            HealthResponse,
            EmployeeDoc,
            EmployeeInputDoc,
            MessageDoc,
            ErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "empleados")
    )
)]
pub struct ApiDoc;
