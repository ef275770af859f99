#[cfg(test)]
mod tests {
    use crate::helpers::{bearer, get_json_body, make_test_app};
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
        student: UserModel,
        course: CourseModel,
        content: ContentModel,
    }

    async fn setup_test_data(db: &sea_orm::DatabaseConnection) -> TestData {
        let publisher = insert_user(db, "pat@test.com", Role::Publisher).await;
        let student = insert_user(db, "sam@test.com", Role::User).await;
        let course = CourseModel::create(db, publisher.id, "Pat Tester", "Rust", "desc", 20.0)
            .await
            .expect("Failed to create course");
        let content = ContentModel::create(db, course.id, "Week 1", None, None)
            .await
            .expect("Failed to create content");
        TestData {
            publisher,
            student,
            course,
            content,
        }
    }

    fn delete(uri: &str, auth: String) -> Request<AxumBody> {
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .header("Authorization", auth)
            .body(AxumBody::empty())
            .unwrap()
    }

    // --- DELETE /api/courses/{course_id} ---

    #[tokio::test]
    #[serial]
    async fn test_delete_course_as_owner() {
        let (app, app_state, _tmp) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;

        let uri = format!("/api/courses/{}", data.course.id);
        let response = app.clone().oneshot(delete(&uri, bearer(&data.publisher))).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["data"], json!({}));

        let req = Request::builder()
            .method("GET")
            .uri(&uri)
            .body(AxumBody::empty())
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    #[serial]
    async fn test_delete_course_by_student_is_bad_request() {
        let (app, app_state, _tmp) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;

        let uri = format!("/api/courses/{}", data.course.id);
        let response = app.oneshot(delete(&uri, bearer(&data.student))).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    #[serial]
    async fn test_delete_course_without_token() {
        let (app, app_state, _tmp) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;

        let req = Request::builder()
            .method("DELETE")
            .uri(format!("/api/courses/{}", data.course.id))
            .body(AxumBody::empty())
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    // --- DELETE /api/courses/{course_id}/content/{content_id} ---

    #[tokio::test]
    #[serial]
    async fn test_delete_content() {
        let (app, app_state, _tmp) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;

        let uri = format!("/api/courses/{}/content/{}", data.course.id, data.content.id);
        let response = app.oneshot(delete(&uri, bearer(&data.publisher))).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_json_body(response).await;
        assert_eq!(json["msg"], "content successfully deleted");
        assert_eq!(json["data"]["courseContent"], json!([]));
    }

    #[tokio::test]
    #[serial]
    async fn test_delete_unknown_content_leaves_list_untouched() {
        let (app, app_state, _tmp) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;

        let uri = format!("/api/courses/{}/content/4242", data.course.id);
        let response = app.oneshot(delete(&uri, bearer(&data.publisher))).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let items = ContentModel::for_course(app_state.db(), data.course.id)
            .await
            .unwrap();
        assert_eq!(items.len(), 1);
    }
}
