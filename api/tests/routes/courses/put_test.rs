#[cfg(test)]
mod tests {
    use crate::helpers::{bearer, get_json_body, make_test_app, multipart_body};
    use axum::{
        body::Body as AxumBody,
        http::{Request, StatusCode},
    };
    use db::models::{
        course::Model as CourseModel,
        course_content::Model as ContentModel,
        user::{Model as UserModel, Role},
    };
    use db::test_utils::insert_user;
    use serde_json::json;
    use serial_test::serial;
    use tower::ServiceExt;

    struct TestData {
        publisher: UserModel,
        other_publisher: UserModel,
        admin: UserModel,
        course: CourseModel,
        content: ContentModel,
    }

    async fn setup_test_data(db: &sea_orm::DatabaseConnection) -> TestData {
        let publisher = insert_user(db, "pat@test.com", Role::Publisher).await;
        let other_publisher = insert_user(db, "olive@test.com", Role::Publisher).await;
        let admin = insert_user(db, "ada@test.com", Role::Admin).await;
        let course = CourseModel::create(db, publisher.id, "Pat Tester", "Rust", "desc", 20.0)
            .await
            .expect("Failed to create course");
        let content = ContentModel::create(
            db,
            course.id,
            "Week 1",
            Some("https://youtu.be/old"),
            Some("https://cdn.test/old.pdf"),
        )
        .await
        .expect("Failed to create content");
        TestData {
            publisher,
            other_publisher,
            admin,
            course,
            content,
        }
    }

    fn json_put(uri: &str, auth: String, body: serde_json::Value) -> Request<AxumBody> {
        Request::builder()
            .method("PUT")
            .uri(uri)
            .header("Authorization", auth)
            .header("Content-Type", "application/json")
            .body(AxumBody::from(body.to_string()))
            .unwrap()
    }

    fn multipart_put(
        uri: &str,
        auth: String,
        fields: &[(&str, &str)],
        file: Option<(&str, &[u8])>,
    ) -> Request<AxumBody> {
        let (body, content_type) = multipart_body(fields, file);
        Request::builder()
            .method("PUT")
            .uri(uri)
            .header("Authorization", auth)
            .header("Content-Type", content_type)
            .body(AxumBody::from(body))
            .unwrap()
    }

    // --- PUT /api/courses/{course_id} ---

    #[tokio::test]
    #[serial]
    async fn test_update_course_as_owner() {
        let (app, app_state, _tmp) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;

        let uri = format!("/api/courses/{}", data.course.id);
        let req = json_put(&uri, bearer(&data.publisher), json!({ "price": 35.5 }));
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_json_body(response).await;
        assert_eq!(json["data"]["price"], 35.5);
        assert_eq!(json["data"]["title"], "Rust");
        assert_eq!(json["data"]["courseContent"][0]["title"], "Week 1");
    }

    #[tokio::test]
    #[serial]
    async fn test_update_course_as_admin() {
        let (app, app_state, _tmp) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;

        let uri = format!("/api/courses/{}", data.course.id);
        let req = json_put(&uri, bearer(&data.admin), json!({ "title": "Rust 2024" }));
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        assert_eq!(json["data"]["title"], "Rust 2024");
    }

    #[tokio::test]
    #[serial]
    async fn test_update_course_by_non_owner_is_bad_request() {
        let (app, app_state, _tmp) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;

        let uri = format!("/api/courses/{}", data.course.id);
        let req = json_put(&uri, bearer(&data.other_publisher), json!({ "title": "Mine" }));
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = get_json_body(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "you cannot carry out this action");
    }

    #[tokio::test]
    #[serial]
    async fn test_update_missing_course() {
        let (app, app_state, _tmp) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;

        let req = json_put("/api/courses/9999", bearer(&data.publisher), json!({ "title": "x" }));
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    #[serial]
    async fn test_update_course_rejects_negative_price() {
        let (app, app_state, _tmp) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;

        let uri = format!("/api/courses/{}", data.course.id);
        let req = json_put(&uri, bearer(&data.publisher), json!({ "price": -1 }));
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    // --- PUT /api/courses/{course_id}/image ---

    #[tokio::test]
    #[serial]
    async fn test_upload_image_stores_under_media_root() {
        let (app, app_state, tmp) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;

        let uri = format!("/api/courses/{}/image", data.course.id);
        let req = multipart_put(&uri, bearer(&data.publisher), &[], Some(("cover.png", b"png")));
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_json_body(response).await;
        assert_eq!(json["msg"], "successfully uploaded course image");
        let url = json["data"]["courseImage"].as_str().unwrap();
        assert!(url.starts_with("/media/courseimage/"));

        let stored = tmp
            .path()
            .join("media")
            .join("courseimage")
            .join(url.rsplit('/').next().unwrap());
        assert_eq!(std::fs::read(stored).unwrap(), b"png");
    }

    #[tokio::test]
    #[serial]
    async fn test_upload_image_without_file() {
        let (app, app_state, _tmp) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;

        let uri = format!("/api/courses/{}/image", data.course.id);
        let req = multipart_put(&uri, bearer(&data.publisher), &[("note", "none")], None);
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = get_json_body(response).await;
        assert_eq!(json["error"], "Please upload a file");
    }

    // --- PUT /api/courses/{course_id}/content/{content_id} ---

    #[tokio::test]
    #[serial]
    async fn test_update_content_replaces_link_and_file() {
        let (app, app_state, _tmp) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;

        let uri = format!("/api/courses/{}/content/{}", data.course.id, data.content.id);
        let req = multipart_put(
            &uri,
            bearer(&data.publisher),
            &[("title", "Week one"), ("youtube", "https://youtu.be/new")],
            Some(("week1.mp4", b"video")),
        );
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_json_body(response).await;
        assert_eq!(json["msg"], "content successfully updated");
        let item = &json["data"]["courseContent"][0];
        assert_eq!(item["title"], "Week one");
        assert_eq!(item["youtube"], "https://youtu.be/new");
        assert!(item["content"].as_str().unwrap().starts_with("/media/coursecontent/"));
    }

    #[tokio::test]
    #[serial]
    async fn test_update_content_without_file_keeps_content() {
        let (app, app_state, _tmp) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;

        let uri = format!("/api/courses/{}/content/{}", data.course.id, data.content.id);
        let req = multipart_put(
            &uri,
            bearer(&data.publisher),
            &[("title", "Week one"), ("youtube", "https://youtu.be/new")],
            None,
        );
        let json = get_json_body(app.oneshot(req).await.unwrap()).await;
        assert_eq!(json["data"]["courseContent"][0]["content"], "https://cdn.test/old.pdf");
    }

    #[tokio::test]
    #[serial]
    async fn test_update_unknown_content() {
        let (app, app_state, _tmp) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;

        let uri = format!("/api/courses/{}/content/4242", data.course.id);
        let req = multipart_put(&uri, bearer(&data.publisher), &[("title", "x")], None);
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = get_json_body(response).await;
        assert_eq!(json["error"], "No content found");
    }
}
