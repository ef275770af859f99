#[cfg(test)]
mod tests {
    use crate::helpers::{get_json_body, make_test_app};
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
    use serial_test::serial;
    use tower::ServiceExt;

    struct TestData {
        publisher: UserModel,
        courses: Vec<CourseModel>,
    }

    async fn setup_test_data(db: &sea_orm::DatabaseConnection) -> TestData {
        let publisher = insert_user(db, "publisher@test.com", Role::Publisher).await;
        let mut courses = Vec::new();
        for (title, price) in [("Rust Basics", 10.0), ("Async Rust", 25.0), ("Rust Macros", 40.0)] {
            let course = CourseModel::create(db, publisher.id, "Pat Publisher", title, "desc", price)
                .await
                .expect("Failed to create course");
            courses.push(course);
        }
        TestData { publisher, courses }
    }

    async fn get(app: axum::Router, uri: &str) -> axum::response::Response {
        let req = Request::builder()
            .method("GET")
            .uri(uri)
            .body(AxumBody::empty())
            .unwrap();
        app.oneshot(req).await.unwrap()
    }

    // --- GET /api/courses ---

    #[tokio::test]
    #[serial]
    async fn test_list_courses_default_envelope() {
        let (app, app_state, _tmp) = make_test_app().await;
        setup_test_data(app_state.db()).await;

        let response = get(app, "/api/courses").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_json_body(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["Total"], 3);
        assert_eq!(json["pagination"], serde_json::json!({}));
        let first = &json["data"][0];
        assert!(first["courseContent"].as_array().unwrap().is_empty());
        assert_eq!(first["numberOfStudents"], 0);
    }

    #[tokio::test]
    #[serial]
    async fn test_list_courses_filter_and_sort() {
        let (app, app_state, _tmp) = make_test_app().await;
        setup_test_data(app_state.db()).await;

        let response = get(app, "/api/courses?price%5Bgte%5D=20&sort=-price").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_json_body(response).await;
        assert_eq!(json["Total"], 2);
        let titles: Vec<&str> = json["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["title"].as_str().unwrap())
            .collect();
        assert_eq!(titles, vec!["Rust Macros", "Async Rust"]);
    }

    #[tokio::test]
    #[serial]
    async fn test_list_courses_in_operator() {
        let (app, app_state, _tmp) = make_test_app().await;
        setup_test_data(app_state.db()).await;

        let response = get(app, "/api/courses?price%5Bin%5D=10,40&sort=price").await;
        let json = get_json_body(response).await;
        assert_eq!(json["Total"], 2);
        assert_eq!(json["data"][0]["price"], 10.0);
        assert_eq!(json["data"][1]["price"], 40.0);
    }

    #[tokio::test]
    #[serial]
    async fn test_list_courses_pagination_uses_unfiltered_total() {
        let (app, app_state, _tmp) = make_test_app().await;
        setup_test_data(app_state.db()).await;

        let response = get(app.clone(), "/api/courses?limit=1&page=2&sort=price").await;
        let json = get_json_body(response).await;
        assert_eq!(json["Total"], 1);
        assert_eq!(json["data"][0]["title"], "Async Rust");
        assert_eq!(json["pagination"]["next"]["page"], 3);
        assert_eq!(json["pagination"]["next"]["limit"], 1);
        assert_eq!(json["pagination"]["previous"]["page"], 1);

        // Only one course matches, but `next` still follows the full catalogue.
        let response = get(app, "/api/courses?price=10&limit=1").await;
        let json = get_json_body(response).await;
        assert_eq!(json["Total"], 1);
        assert_eq!(json["pagination"]["next"]["page"], 2);
        assert!(json["pagination"].get("previous").is_none());
    }

    #[tokio::test]
    #[serial]
    async fn test_list_courses_select_projection() {
        let (app, app_state, _tmp) = make_test_app().await;
        setup_test_data(app_state.db()).await;

        let response = get(app, "/api/courses?select=title,price").await;
        let json = get_json_body(response).await;
        let first = json["data"][0].as_object().unwrap();
        let mut keys: Vec<&str> = first.keys().map(String::as_str).collect();
        keys.sort();
        assert_eq!(keys, vec!["id", "price", "title"]);
    }

    #[tokio::test]
    #[serial]
    async fn test_list_courses_unknown_field_is_server_error() {
        let (app, app_state, _tmp) = make_test_app().await;
        setup_test_data(app_state.db()).await;

        let response = get(app, "/api/courses?colour=red").await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = get_json_body(response).await;
        assert_eq!(json["success"], false);
    }

    #[tokio::test]
    #[serial]
    async fn test_list_courses_unsupported_operator_and_negative_window() {
        let (app, app_state, _tmp) = make_test_app().await;
        setup_test_data(app_state.db()).await;

        let response = get(app.clone(), "/api/courses?price%5Bne%5D=10").await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = get(app, "/api/courses?page=-1").await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    #[serial]
    async fn test_list_courses_no_matches_is_empty_ok() {
        let (app, app_state, _tmp) = make_test_app().await;
        setup_test_data(app_state.db()).await;

        let response = get(app, "/api/courses?price%5Bgt%5D=100000").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_json_body(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["Total"], 0);
        assert_eq!(json["data"], serde_json::json!([]));
    }

    #[tokio::test]
    #[serial]
    async fn test_list_courses_page_past_i64_range_is_server_error() {
        let (app, app_state, _tmp) = make_test_app().await;
        setup_test_data(app_state.db()).await;

        let response = get(app, "/api/courses?page=9223372036854775807").await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = get_json_body(response).await;
        assert_eq!(json["success"], false);
    }

    // --- GET /api/courses/{course_id} ---

    #[tokio::test]
    #[serial]
    async fn test_get_course_includes_publisher() {
        let (app, app_state, _tmp) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;

        let uri = format!("/api/courses/{}", data.courses[0].id);
        let response = get(app, &uri).await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_json_body(response).await;
        assert_eq!(json["data"]["title"], "Rust Basics");
        assert_eq!(json["publisher"]["id"], data.publisher.id);
        assert_eq!(json["publisher"]["email"], "publisher@test.com");
    }

    #[tokio::test]
    #[serial]
    async fn test_get_course_not_found() {
        let (app, _app_state, _tmp) = make_test_app().await;

        let response = get(app, "/api/courses/9999").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = get_json_body(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "No course with the id of 9999");
    }

    // --- GET /api/courses/publisher/{publisher_id} ---

    #[tokio::test]
    #[serial]
    async fn test_publisher_listing_pages_in_creation_order() {
        let (app, app_state, _tmp) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;

        let uri = format!("/api/courses/publisher/{}?page=2&limit=2", data.publisher.id);
        let response = get(app.clone(), &uri).await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        assert_eq!(json["data"].as_array().unwrap().len(), 1);
        assert_eq!(json["data"][0]["title"], "Rust Macros");

        let uri = format!("/api/courses/publisher/{}", data.publisher.id);
        let json = get_json_body(get(app, &uri).await).await;
        assert_eq!(json["data"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    #[serial]
    async fn test_publisher_listing_empty_is_not_found() {
        let (app, app_state, _tmp) = make_test_app().await;
        setup_test_data(app_state.db()).await;

        let response = get(app, "/api/courses/publisher/4242").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = get_json_body(response).await;
        assert_eq!(json["error"], "No course created by this publisher");
    }

    #[tokio::test]
    #[serial]
    async fn test_publisher_listing_page_past_i64_range_is_server_error() {
        let (app, app_state, _tmp) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;

        let uri = format!(
            "/api/courses/publisher/{}?page=9223372036854775807",
            data.publisher.id
        );
        let response = get(app, &uri).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = get_json_body(response).await;
        assert_eq!(json["success"], false);
    }

    // --- GET /api/courses/stats/total-students ---

    #[tokio::test]
    #[serial]
    async fn test_total_students_without_stats_is_server_error() {
        let (app, _app_state, _tmp) = make_test_app().await;

        let response = get(app, "/api/courses/stats/total-students").await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    #[serial]
    async fn test_total_students_sums_records() {
        let (app, app_state, _tmp) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;
        CourseStatsModel::create(app_state.db(), Some(data.courses[0].id), 4)
            .await
            .unwrap();
        CourseStatsModel::create(app_state.db(), None, 3).await.unwrap();

        let response = get(app, "/api/courses/stats/total-students").await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        assert_eq!(json["data"], 7);
    }
}
