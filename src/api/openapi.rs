use crate::api::schemas::{ErrorResponse, PaginationMetaSchema};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::address::adapter::incoming::web::routes::{
    AddressListResponse, AddressMessageResponse, AddressView, CreateAddressRequestDto,
    ExportRequestDto, MessageResponse, UpdateAddressRequestDto,
};
use crate::auth::adapter::incoming::web::routes::{
    LoginRequestDto, LoginResponse, RegisterRequestDto, RegisterResponse, RegisteredUser,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Address Book API",
        version = "1.0.0",
        description = "Personal address book with CSV export by email"
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::register_user_handler,
        crate::auth::adapter::incoming::web::routes::login_user_handler,

        // Address endpoints
        crate::address::adapter::incoming::web::routes::list_addresses_handler,
        crate::address::adapter::incoming::web::routes::create_address_handler,
        crate::address::adapter::incoming::web::routes::update_address_handler,
        crate::address::adapter::incoming::web::routes::delete_address_handler,
        crate::address::adapter::incoming::web::routes::export_addresses_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            PaginationMetaSchema,

            // Auth DTOs
            RegisterRequestDto,
            RegisterResponse,
            RegisteredUser,
            LoginRequestDto,
            LoginResponse,

            // Address DTOs
            AddressView,
            AddressListResponse,
            AddressMessageResponse,
            CreateAddressRequestDto,
            UpdateAddressRequestDto,
            ExportRequestDto,
            MessageResponse
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration and login"),
        (name = "address", description = "Address book management and export"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Token returned by /auth/login"))
                        .build(),
                ),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        for path in [
            "/auth/register",
            "/auth/login",
            "/address/",
            "/address/{id}",
            "/address/export",
        ] {
            assert!(paths.contains_key(path), "missing {path}");
        }
    }

    #[test]
    fn test_openapi_registers_bearer_scheme() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("BearerAuth"));
    }
}
