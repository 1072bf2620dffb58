use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method,
    },
    middleware, Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{auth, booking, business, event, system},
    middleware::activity::track_request,
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Business Directory API"),
    modifiers(&BearerAuth),
    tags(
        (name = "auth", description = "Registration, login and session management"),
        (name = "business", description = "Business listings"),
        (name = "event", description = "Events hosted by owners"),
        (name = "booking", description = "Event bookings"),
        (name = "system", description = "Health, statistics and recent activity")
    )
)]
pub struct ApiDoc;

/// Registers the `bearer_auth` scheme referenced by protected paths.
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// Builds the complete application: API routes, OpenAPI document, Swagger UI and layers.
pub fn router(state: AppState) -> Router {
    let (api_router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::register))
        .routes(routes!(auth::login))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::delete_account))
        .routes(routes!(system::health))
        .routes(routes!(system::get_stats))
        .routes(routes!(system::get_system_events))
        .routes(routes!(
            business::get_businesses,
            business::create_business,
            business::update_business,
            business::delete_business
        ))
        .routes(routes!(business::get_business))
        .routes(routes!(business::get_my_businesses))
        .routes(routes!(business::get_my_business_stats))
        .routes(routes!(
            event::get_events,
            event::create_event,
            event::update_event,
            event::delete_event
        ))
        .routes(routes!(event::get_event))
        .routes(routes!(event::get_my_events))
        .routes(routes!(
            booking::create_booking,
            booking::get_bookings,
            booking::update_booking,
            booking::delete_booking
        ))
        .split_for_parts();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION]);

    api_router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .layer(middleware::from_fn_with_state(state.clone(), track_request))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
