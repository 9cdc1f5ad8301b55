use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthDoc {
    pub status: String,
}

#[derive(ToSchema)]
pub struct ItemDoc {
    pub id: i32,
    pub name: String,
    pub description: String,
}

#[derive(ToSchema)]
pub struct ItemInputDoc {
    pub name: String,
    pub description: String,
}

#[derive(ToSchema)]
pub struct ErrorDoc {
    pub detail: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::items::list,
        crate::routes::items::create,
        crate::routes::items::get,
        crate::routes::items::update,
        crate::routes::items::delete,
    ),
    components(
        schemas(
            HealthDoc,
            ItemDoc,
            ItemInputDoc,
            ErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "items")
    )
)]
pub struct ApiDoc;
