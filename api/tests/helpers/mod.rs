pub mod app;

pub use app::{RecordingUploader, make_test_app, make_test_app_with_uploader};
pub use request::{bearer, get_json_body, multipart_body};
