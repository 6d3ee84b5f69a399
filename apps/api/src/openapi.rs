use utoipa::OpenApi;

/// Users API documentation, served by Swagger UI at `/swagger-ui`.
#[derive(OpenApi)]
#[openapi(
    paths(
        domain_users::handlers::list_users,
        domain_users::handlers::get_user,
        domain_users::handlers::register,
        domain_users::handlers::login,
        domain_users::handlers::update_user,
        domain_users::handlers::delete_user,
    ),
    components(schemas(
        domain_users::models::User,
        domain_users::models::RegisterRequest,
        domain_users::models::UpdateUserRequest,
        domain_users::models::LoginRequest,
        domain_users::models::UsersListResponse,
        domain_users::models::UserEnvelope,
        domain_users::models::RegisterResponse,
        domain_users::models::WelcomeResponse,
        domain_users::models::UpdateResponse,
        domain_users::models::DeleteResponse,
    )),
    tags((name = "users", description = "User registration, login and CRUD"))
)]
pub struct ApiDoc;
