//! Landing endpoint.

use actix_web::get;

/// Plain-text greeting; doubles as a smoke test for the listener.
#[utoipa::path(
    get,
    path = "/",
    tags = ["home"],
    responses((status = 200, description = "Greeting", body = String, content_type = "text/plain"))
)]
#[get("/")]
pub async fn home() -> &'static str {
    "Hello visitor!"
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, http::StatusCode, test};

    #[actix_web::test]
    async fn greets_visitors() {
        let app = test::init_service(App::new().service(home)).await;
        let res = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(test::read_body(res).await.as_ref(), b"Hello visitor!");
    }
}
