use crate::{
    dtos::{
        association::IdsRequest,
        availability::{
            AvailabilityResponse, ReplaceAvailabilityRequest, UpdateWindowRequest, WindowRequest,
            WindowResponse,
        },
        booking::{BookingResponse, CreateBookingRequest},
        lookup::{CityResponse, GradeLevelResponse, NamedItem},
        notification::{MarkReadResponse, NotificationResponse},
        teacher::{
            CreateTeacherRequest, TeacherProfileResponse, TeacherResponse, UpdateTeacherRequest,
        },
    },
    error::ErrorBody,
    routes::{association, availability, booking, health, lookup, notification, root, teacher},
};
use utoipa::{
    Modify, OpenApi,
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "jwt",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        root::root,
        health::health,
        lookup::get_languages,
        lookup::get_subjects,
        lookup::get_grade_levels,
        lookup::get_cities,
        teacher::list_teachers,
        teacher::get_teacher,
        teacher::get_teacher_availability,
        teacher::get_my_profile,
        teacher::create_my_profile,
        teacher::update_my_profile,
        teacher::delete_my_profile,
        availability::get_my_availability,
        availability::replace_my_availability,
        availability::update_my_window,
        availability::delete_my_window,
        association::put_my_languages,
        association::put_my_subjects,
        association::put_my_grade_levels,
        booking::list_my_bookings,
        booking::create_booking,
        booking::list_teacher_bookings,
        notification::list_notifications,
        notification::mark_notifications_read
    ),
    components(schemas(
        ErrorBody,
        IdsRequest,
        WindowRequest,
        WindowResponse,
        ReplaceAvailabilityRequest,
        UpdateWindowRequest,
        AvailabilityResponse,
        BookingResponse,
        CreateBookingRequest,
        NamedItem,
        GradeLevelResponse,
        CityResponse,
        NotificationResponse,
        MarkReadResponse,
        CreateTeacherRequest,
        UpdateTeacherRequest,
        TeacherResponse,
        TeacherProfileResponse
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Liveness endpoints"),
        (name = "Lookups", description = "Reference data used by profile forms"),
        (name = "Teachers", description = "Public teacher profiles"),
        (name = "My profile", description = "The caller's own teacher profile"),
        (name = "Availability", description = "Weekly availability windows"),
        (name = "Bookings", description = "Session bookings"),
        (name = "Notifications", description = "In-app notifications"),
    ),
    info(
        title = "Tutoring API",
        version = "1.0.0",
        description = "Teacher profiles, weekly availability and bookings",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_route_with_jwt_scheme() {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key("/teachers/{teacher_id}/availability"));
        assert!(doc.paths.paths.contains_key("/me/notifications/read"));
        let components = doc.components.unwrap();
        assert!(components.security_schemes.contains_key("jwt"));
    }
}
