pub mod association;
pub mod availability;
pub mod booking;
pub mod health;
pub mod lookup;
pub mod notification;
pub mod root;
pub mod teacher;

use crate::state::AppState;
use axum::{
    Router,
    routing::{get, patch, put},
};

/// Routes readable without a token
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root::root))
        .route("/health", get(health::health))
        .route("/languages", get(lookup::get_languages))
        .route("/subjects", get(lookup::get_subjects))
        .route("/grade-levels", get(lookup::get_grade_levels))
        .route("/cities", get(lookup::get_cities))
        .route("/teachers", get(teacher::list_teachers))
        .route("/teachers/{teacher_id}", get(teacher::get_teacher))
        .route(
            "/teachers/{teacher_id}/availability",
            get(teacher::get_teacher_availability),
        )
}

/// Routes acting on behalf of the token's subject
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/me/teacher",
            get(teacher::get_my_profile)
                .post(teacher::create_my_profile)
                .put(teacher::update_my_profile)
                .delete(teacher::delete_my_profile),
        )
        .route(
            "/me/teacher/availability",
            get(availability::get_my_availability).put(availability::replace_my_availability),
        )
        .route(
            "/me/teacher/availability/{availability_id}",
            patch(availability::update_my_window).delete(availability::delete_my_window),
        )
        .route("/me/teacher/languages", put(association::put_my_languages))
        .route("/me/teacher/subjects", put(association::put_my_subjects))
        .route(
            "/me/teacher/grade-levels",
            put(association::put_my_grade_levels),
        )
        .route(
            "/me/teacher/bookings",
            get(booking::list_teacher_bookings),
        )
        .route(
            "/me/bookings",
            get(booking::list_my_bookings).post(booking::create_booking),
        )
        .route("/me/notifications", get(notification::list_notifications))
        .route(
            "/me/notifications/read",
            patch(notification::mark_notifications_read),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Extension,
        body::{Body, to_bytes},
        http::{Request, StatusCode, header},
    };
    use database::entities::{language, user};
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ActiveModelTrait, ActiveValue::Set, ConnectOptions, Database};
    use serde_json::{Value, json};
    use tower::ServiceExt;
    use tower_oauth2_resource_server::claims::DefaultClaims;

    async fn app() -> (Router, AppState) {
        let mut options = ConnectOptions::new("sqlite::memory:");
        options.max_connections(1).min_connections(1);
        let db = Database::connect(options).await.unwrap();
        Migrator::up(&db, None).await.unwrap();

        let state = AppState { db };
        let router = public_routes()
            .merge(protected_routes())
            .with_state(state.clone());
        (router, state)
    }

    async fn send(router: Router, method: &str, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        respond(router, request).await
    }

    /// Sends `body` as JSON with claims for `subject`, as the OAuth2 layer would
    async fn send_as(
        router: &Router,
        subject: &str,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let claims = DefaultClaims {
            iss: None,
            sub: Some(subject.to_string()),
            aud: Vec::new(),
            jti: None,
        };
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(body.map_or_else(Body::empty, |body| Body::from(body.to_string())))
            .unwrap();
        respond(router.clone().layer(Extension(claims)), request).await
    }

    async fn respond(router: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    #[tokio::test]
    async fn health_pings_database() {
        let (router, _) = app().await;
        let (status, _) = send(router, "GET", "/health").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn lists_languages() {
        let (router, state) = app().await;
        language::ActiveModel {
            name: Set("English".to_string()),
            ..Default::default()
        }
        .insert(&state.db)
        .await
        .unwrap();

        let (status, body) = send(router, "GET", "/languages").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["name"], "English");
    }

    #[tokio::test]
    async fn unknown_teacher_is_404() {
        let (router, _) = app().await;

        let (status, body) = send(router.clone(), "GET", "/teachers/7").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "not_found");

        let (status, _) = send(router, "GET", "/teachers/7/availability").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn me_routes_need_identity() {
        let (router, _) = app().await;

        let (status, body) = send(router.clone(), "GET", "/me/teacher").await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "unauthorized");

        let (status, _) = send(router, "PATCH", "/me/notifications/read").await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    async fn seed_user(state: &AppState, subject: &str) {
        user::ActiveModel {
            auth_subject: Set(subject.to_string()),
            name: Set(format!("User {subject}")),
            email: Set(format!("{subject}@example.com")),
            ..Default::default()
        }
        .insert(&state.db)
        .await
        .unwrap();
    }

    fn profile_body() -> Value {
        json!({
            "teaching_mode": "online",
            "bio": "Maths and physics tutor",
            "experience_years": 5,
            "hourly_rate": 25.0,
            "education": "BSc"
        })
    }

    /// Seeds `subject` as a teacher and returns the teacher id
    async fn seed_teacher(router: &Router, state: &AppState, subject: &str) -> i64 {
        seed_user(state, subject).await;
        let (status, body) =
            send_as(router, subject, "POST", "/me/teacher", Some(profile_body())).await;
        assert_eq!(status, StatusCode::CREATED);
        body["id"].as_i64().unwrap()
    }

    #[tokio::test]
    async fn unknown_subject_is_unauthorized() {
        let (router, _) = app().await;

        let (status, body) = send_as(&router, "nobody", "GET", "/me/teacher", None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "unauthorized");
    }

    #[tokio::test]
    async fn create_and_update_own_profile() {
        let (router, state) = app().await;
        seed_user(&state, "sub-1").await;

        let (status, _) = send_as(&router, "sub-1", "GET", "/me/teacher", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, created) =
            send_as(&router, "sub-1", "POST", "/me/teacher", Some(profile_body())).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["duration_per_session"], 60);
        assert_eq!(created["is_verified"], false);

        let (status, body) =
            send_as(&router, "sub-1", "POST", "/me/teacher", Some(profile_body())).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"], "conflict");

        let (status, updated) = send_as(
            &router,
            "sub-1",
            "PUT",
            "/me/teacher",
            Some(json!({"experience_years": 7, "teaching_mode": "hybrid"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["id"], created["id"]);
        assert_eq!(updated["experience_years"], 7);
        assert_eq!(updated["teaching_mode"], "hybrid");
        assert_eq!(updated["hourly_rate"], 25.0);

        let (status, body) = send_as(
            &router,
            "sub-1",
            "PUT",
            "/me/teacher",
            Some(json!({"hourly_rate": -1.0})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "validation");

        let (status, body) = send_as(
            &router,
            "sub-1",
            "POST",
            "/me/teacher",
            Some(json!({"bio": "no other fields"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "validation");
    }

    #[tokio::test]
    async fn replace_availability_validates_every_window() {
        let (router, state) = app().await;
        seed_teacher(&router, &state, "sub-1").await;
        let uri = "/me/teacher/availability";

        let (status, body) = send_as(
            &router,
            "sub-1",
            "PUT",
            uri,
            Some(json!({"windows": [{"day": "monday", "start": "09:00", "end": "10:00"}]})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["windows"][0]["day"], "Monday");
        assert_eq!(body["days"], "M");

        let rejected = [
            json!({"windows": [{"day": "Tuesday", "start": "10:00", "end": "10:00"}]}),
            json!({"windows": [{"day": "Funday", "start": "09:00", "end": "10:00"}]}),
            json!({"windows": [{"day": "Tuesday", "start": "09:00"}]}),
            json!({"windows": [{"day": "Tuesday", "start": "9am", "end": "10:00"}]}),
        ];
        for request in rejected {
            let (status, body) = send_as(&router, "sub-1", "PUT", uri, Some(request)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body["error"], "validation");
        }

        let (status, body) = send_as(&router, "sub-1", "GET", uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["windows"].as_array().unwrap().len(), 1);
        assert_eq!(body["windows"][0]["start"], "09:00");
    }

    #[tokio::test]
    async fn other_teachers_window_is_404() {
        let (router, state) = app().await;
        seed_teacher(&router, &state, "owner").await;
        seed_teacher(&router, &state, "other").await;

        let (_, body) = send_as(
            &router,
            "owner",
            "PUT",
            "/me/teacher/availability",
            Some(json!({"windows": [{"day": "Thursday", "start": "10:00", "end": "11:00"}]})),
        )
        .await;
        let uri = format!("/me/teacher/availability/{}", body["windows"][0]["id"]);
        let later = json!({"start": "12:00", "end": "13:30"});

        let (status, body) = send_as(&router, "other", "PATCH", &uri, Some(later.clone())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "not_found");
        let (status, _) = send_as(&router, "other", "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) = send_as(
            &router,
            "owner",
            "PATCH",
            &uri,
            Some(json!({"start": "12:00", "end": "12:00"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "validation");

        let (status, body) = send_as(&router, "owner", "PATCH", &uri, Some(later)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["day"], "Thursday");
        assert_eq!(body["start"], "12:00");
        assert_eq!(body["end"], "13:30");

        let (status, _) = send_as(&router, "owner", "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn unknown_language_id_is_rejected() {
        let (router, state) = app().await;
        seed_teacher(&router, &state, "sub-1").await;
        let english = language::ActiveModel {
            name: Set("English".to_string()),
            ..Default::default()
        }
        .insert(&state.db)
        .await
        .unwrap();
        let uri = "/me/teacher/languages";

        let (status, body) = send_as(
            &router,
            "sub-1",
            "PUT",
            uri,
            Some(json!({"ids": [english.language_id, english.language_id]})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ids"], json!([english.language_id]));

        let (status, body) = send_as(
            &router,
            "sub-1",
            "PUT",
            uri,
            Some(json!({"ids": [english.language_id, 9_999]})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "invalid_reference");

        let (status, body) = send_as(&router, "sub-1", "GET", "/me/teacher", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["languages"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn booking_reaches_teacher() {
        let (router, state) = app().await;
        let teacher_id = seed_teacher(&router, &state, "teacher").await;
        seed_user(&state, "student").await;

        let (status, body) = send_as(
            &router,
            "student",
            "POST",
            "/me/bookings",
            Some(json!({
                "teacher_id": teacher_id,
                "slot": {"day": "wednesday", "start": "04:00 PM", "end": "17:00"},
                "note": "Algebra revision"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["teacher_id"], teacher_id);
        assert_eq!(body["day"], "Wednesday");
        assert_eq!(body["start"], "16:00");

        let (status, body) = send_as(
            &router,
            "student",
            "POST",
            "/me/bookings",
            Some(json!({
                "teacher_id": teacher_id + 100,
                "slot": {"day": "Wednesday", "start": "16:00", "end": "17:00"}
            })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "not_found");

        let (status, body) = send_as(&router, "teacher", "GET", "/me/teacher/bookings", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);

        let (status, body) = send_as(&router, "teacher", "GET", "/me/notifications", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["is_read"], false);
    }
}
