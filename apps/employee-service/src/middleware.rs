//! # アクセスログミドルウェア
//!
//! リクエストごとにメソッド・パス・ステータス・レイテンシを1件の INFO イベントで出力する。
//! TraceLayer の内側に置くため、イベントはリクエストスパン（request_id 付き）に属する。
//! `/health` 配下は出力しない。

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};

pub async fn access_log(request: Request, next: Next) -> Response {
    if request.uri().path().starts_with("/health") {
        return next.run(request).await;
    }

    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(request).await;

    let latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    tracing::info!(
        http.method = %method,
        http.path = %path,
        http.status_code = response.status().as_u16(),
        http.latency_ms = latency_ms,
        "リクエスト完了"
    );

    response
}
