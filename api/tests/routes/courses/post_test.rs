#[cfg(test)]
mod tests {
    use crate::helpers::{
        RecordingUploader, bearer, get_json_body, make_test_app, make_test_app_with_uploader,
        multipart_body,
    };
    use axum::{
        body::Body as AxumBody,
        http::{Request, StatusCode},
    };
    use db::models::{
        course::Model as CourseModel,
        course_stats::Model as CourseStatsModel,
        user::{Model as UserModel, Role},
    };
    use db::test_utils::insert_user;
    use serde_json::json;
    use serial_test::serial;
    use std::sync::Arc;
    use tower::ServiceExt;
    use util::test_helpers::setup_test_storage_root;

    struct TestData {
        publisher: UserModel,
        other_publisher: UserModel,
        student: UserModel,
        course: CourseModel,
    }

    async fn setup_test_data(db: &sea_orm::DatabaseConnection) -> TestData {
        let publisher = insert_user(db, "pat@test.com", Role::Publisher).await;
        let other_publisher = insert_user(db, "olive@test.com", Role::Publisher).await;
        let student = insert_user(db, "sam@test.com", Role::User).await;
        let course = CourseModel::create(db, publisher.id, "Pat Tester", "Rust", "desc", 20.0)
            .await
            .expect("Failed to create course");
        TestData {
            publisher,
            other_publisher,
            student,
            course,
        }
    }

    fn json_post(uri: &str, auth: Option<String>, body: serde_json::Value) -> Request<AxumBody> {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json");
        if let Some(auth) = auth {
            builder = builder.header("Authorization", auth);
        }
        builder.body(AxumBody::from(body.to_string())).unwrap()
    }

    fn multipart_post(
        uri: &str,
        auth: String,
        fields: &[(&str, &str)],
        file: Option<(&str, &[u8])>,
    ) -> Request<AxumBody> {
        let (body, content_type) = multipart_body(fields, file);
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Authorization", auth)
            .header("Content-Type", content_type)
            .body(AxumBody::from(body))
            .unwrap()
    }

    // --- POST /api/courses ---

    #[tokio::test]
    #[serial]
    async fn test_create_course_as_publisher() {
        let (app, app_state, _tmp) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;

        let req = json_post(
            "/api/courses",
            Some(bearer(&data.publisher)),
            json!({ "title": "Tokio", "description": "Async runtime", "price": 30 }),
        );
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let json = get_json_body(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["title"], "Tokio");
        assert_eq!(json["data"]["publisher"], data.publisher.id);
        assert_eq!(json["data"]["publisherName"], "pat Tester");
        assert_eq!(json["data"]["numberOfStudents"], 0);
    }

    #[tokio::test]
    #[serial]
    async fn test_create_course_keeps_given_publisher_name() {
        let (app, app_state, _tmp) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;

        let req = json_post(
            "/api/courses",
            Some(bearer(&data.publisher)),
            json!({
                "title": "Tokio",
                "description": "Async runtime",
                "price": 30,
                "publisherName": "Rust Academy"
            }),
        );
        let json = get_json_body(app.oneshot(req).await.unwrap()).await;
        assert_eq!(json["data"]["publisherName"], "Rust Academy");
    }

    #[tokio::test]
    #[serial]
    async fn test_create_course_forbidden_for_plain_user() {
        let (app, app_state, _tmp) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;

        let req = json_post(
            "/api/courses",
            Some(bearer(&data.student)),
            json!({ "title": "Tokio", "description": "Async runtime", "price": 30 }),
        );
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        let json = get_json_body(response).await;
        assert_eq!(json["error"], "User role user is not authorized to access this route");
    }

    #[tokio::test]
    #[serial]
    async fn test_create_course_requires_token() {
        let (app, _app_state, _tmp) = make_test_app().await;

        let req = json_post(
            "/api/courses",
            None,
            json!({ "title": "Tokio", "description": "Async runtime", "price": 30 }),
        );
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    #[serial]
    async fn test_create_course_validation_error() {
        let (app, app_state, _tmp) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;

        let req = json_post(
            "/api/courses",
            Some(bearer(&data.publisher)),
            json!({ "title": "Tokio", "description": "Async runtime" }),
        );
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = get_json_body(response).await;
        assert_eq!(json["error"], "Please add a price");
    }

    // --- POST /api/courses/{course_id}/content ---

    #[tokio::test]
    #[serial]
    async fn test_upload_content_stores_file_and_removes_staged_copy() {
        let tmp = setup_test_storage_root();
        let uploader = Arc::new(RecordingUploader::default());
        let (app, app_state, _tmp) = make_test_app_with_uploader(uploader.clone(), tmp).await;
        let data = setup_test_data(app_state.db()).await;

        let uri = format!("/api/courses/{}/content", data.course.id);
        let req = multipart_post(
            &uri,
            bearer(&data.publisher),
            &[("title", "Week 1"), ("youtube", "https://youtu.be/xyz")],
            Some(("slides.pdf", b"%PDF-1.4")),
        );
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_json_body(response).await;
        assert_eq!(json["msg"], "successfully uploaded course content");
        let item = &json["data"]["courseContent"][0];
        assert_eq!(item["title"], "Week 1");
        assert_eq!(item["youtube"], "https://youtu.be/xyz");
        let url = item["content"].as_str().unwrap();
        assert!(url.starts_with("https://cdn.test/coursecontent/"));
        assert!(url.ends_with(".pdf"));

        let seen = uploader.seen();
        assert_eq!(seen.len(), 1);
        let (staged, existed) = &seen[0];
        assert!(existed);
        assert!(!staged.exists());
    }

    #[tokio::test]
    #[serial]
    async fn test_upload_content_without_file() {
        let (app, app_state, _tmp) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;

        let uri = format!("/api/courses/{}/content", data.course.id);
        let req = multipart_post(&uri, bearer(&data.publisher), &[("title", "Intro")], None);
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_json_body(response).await;
        let item = &json["data"]["courseContent"][0];
        assert_eq!(item["title"], "Intro");
        assert!(item["content"].is_null());
    }

    #[tokio::test]
    #[serial]
    async fn test_upload_content_requires_title_and_cleans_up() {
        let tmp = setup_test_storage_root();
        let uploads = tmp.path().join("uploads");
        let (app, app_state, _tmp) =
            make_test_app_with_uploader(Arc::new(RecordingUploader::default()), tmp).await;
        let data = setup_test_data(app_state.db()).await;

        let uri = format!("/api/courses/{}/content", data.course.id);
        let req = multipart_post(
            &uri,
            bearer(&data.publisher),
            &[("youtube", "https://youtu.be/xyz")],
            Some(("notes.txt", b"notes")),
        );
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = get_json_body(response).await;
        assert_eq!(json["error"], "Please add a title");

        let leftovers = std::fs::read_dir(&uploads).map(|d| d.count()).unwrap_or(0);
        assert_eq!(leftovers, 0);
    }

    #[tokio::test]
    #[serial]
    async fn test_upload_content_by_non_owner() {
        let (app, app_state, _tmp) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;

        let uri = format!("/api/courses/{}/content", data.course.id);
        let req = multipart_post(&uri, bearer(&data.other_publisher), &[("title", "x")], None);
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = get_json_body(response).await;
        assert_eq!(json["error"], "you cannot carry out this action");
    }

    // --- POST /api/courses/{course_id}/enroll ---

    #[tokio::test]
    #[serial]
    async fn test_enroll_updates_course_and_user() {
        let (app, app_state, _tmp) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;
        CourseStatsModel::create(app_state.db(), Some(data.course.id), 0)
            .await
            .unwrap();

        let uri = format!("/api/courses/{}/enroll", data.course.id);
        let req = json_post(&uri, Some(bearer(&data.student)), json!({}));
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_json_body(response).await;
        assert_eq!(json["data"]["id"], data.course.id);
        assert_eq!(json["data"]["numberOfStudents"], 1);
        assert_eq!(json["user"]["id"], data.student.id);
        assert_eq!(json["user"]["enrolledCourses"], json!([data.course.id.to_string()]));
    }

    #[tokio::test]
    #[serial]
    async fn test_enroll_twice_is_rejected_without_counting() {
        let (app, app_state, _tmp) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;

        let uri = format!("/api/courses/{}/enroll", data.course.id);
        let req = json_post(&uri, Some(bearer(&data.student)), json!({}));
        let response = app.clone().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let req = json_post(&uri, Some(bearer(&data.student)), json!({}));
        let response = app.clone().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = get_json_body(response).await;
        assert_eq!(json["error"], "you have already enrolled for this course");

        let req = Request::builder()
            .method("GET")
            .uri(format!("/api/courses/{}", data.course.id))
            .body(AxumBody::empty())
            .unwrap();
        let json = get_json_body(app.oneshot(req).await.unwrap()).await;
        assert_eq!(json["data"]["numberOfStudents"], 1);
    }

    #[tokio::test]
    #[serial]
    async fn test_enroll_missing_course() {
        let (app, app_state, _tmp) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;

        let req = json_post("/api/courses/777/enroll", Some(bearer(&data.student)), json!({}));
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
