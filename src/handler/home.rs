use bytes::Bytes;
use http::header;
use http::HeaderValue;
use http_body_util::Full;
use hyper::Response;

const CHAT_PAGE: &str = include_str!("../../assets/index.html");

/// The chat page is compiled into the binary; every `GET /` gets the same
/// bytes regardless of query string or headers.
pub fn handle_home() -> Response<Full<Bytes>> {
    let mut response = Response::new(Full::new(Bytes::from(CHAT_PAGE)));
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/html; charset=utf-8"),
    );
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use hyper::StatusCode;

    #[tokio::test]
    async fn test_home_returns_the_chat_page() {
        let response = handle_home();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/html; charset=utf-8"
        );

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let page = String::from_utf8_lossy(&body);
        assert!(page.contains("MediBot"));
        assert!(page.contains("id=\"send-btn\""));
    }
}
