//! Serves the compiled frontend embedded into the binary at build time.
//!
//! Unknown paths fall back to `index.html` so client-side navigation keeps
//! working; without an embedded frontend build every request is a 404.

use actix_web::{HttpRequest, HttpResponse};
use include_dir::{include_dir, Dir};
use mime_guess::from_path;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

const INDEX: &str = "index.html";

/// Maps a request path onto a file path inside the embedded directory.
fn asset_path(request_path: &str) -> &str {
    let path = request_path.trim_start_matches('/');
    if path.is_empty() {
        INDEX
    } else {
        path
    }
}

pub async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let file_path = asset_path(req.path());

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match STATIC_DIR.get_file(INDEX) {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}
