//! # ヘルスチェックハンドラ
//!
//! - `/health` - Liveness Check（常に `"healthy"` を返す）
//! - `/health/ready` - Readiness Check（データベースへの疎通を確認）
//!
//! レスポンス型は [`roster_shared::HealthResponse`] / [`roster_shared::ReadinessResponse`] を参照。

use std::{collections::BTreeMap, sync::Arc, time::Duration};

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use roster_infra::db;
use roster_shared::{CheckStatus, HealthResponse, ReadinessResponse};
use sqlx::PgPool;

/// データベース疎通確認のタイムアウト
const DATABASE_CHECK_TIMEOUT: Duration = Duration::from_secs(5);

/// Employee Service のヘルスチェックエンドポイント
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy(env!("CARGO_PKG_VERSION")))
}

/// Readiness Check 用の State
pub struct ReadinessState {
    pub pool: PgPool,
}

/// Employee Service の Readiness Check エンドポイント
///
/// 全チェック OK → 200、1 つでも失敗 → 503。
#[tracing::instrument(skip_all)]
pub async fn readiness_check(State(state): State<Arc<ReadinessState>>) -> impl IntoResponse {
    let checks = BTreeMap::from([("database".to_string(), check_database(&state.pool).await)]);
    let response = ReadinessResponse::from_checks(checks);

    let status = if response.is_ready() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(response))
}

async fn check_database(pool: &PgPool) -> CheckStatus {
    match tokio::time::timeout(DATABASE_CHECK_TIMEOUT, db::ping(pool)).await {
        Ok(Ok(())) => CheckStatus::Ok,
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "readiness check: database ping failed");
            CheckStatus::Error
        }
        Err(_) => {
            tracing::warn!("readiness check: database check timed out");
            CheckStatus::Error
        }
    }
}
