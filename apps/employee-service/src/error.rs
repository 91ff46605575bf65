//! # Employee Service エラー定義
//!
//! Employee Service 固有のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! ## HTTP ステータスへの対応
//!
//! | バリアント | ステータス | detail |
//! |-----------|-----------|--------|
//! | `NotFound` | 404 | メッセージ |
//! | `BadRequest` | 400 | メッセージ |
//! | `Validation` | 400 | メッセージ |
//! | `Database` | 500 | 固定メッセージ（詳細はログのみ） |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use roster_domain::DomainError;
use roster_infra::InfraError;
use roster_shared::ErrorResponse;
use thiserror::Error;

/// Employee Service で発生するエラー
#[derive(Debug, Error)]
pub enum CoreError {
    /// リソースが見つからない
    #[error("リソースが見つかりません: {0}")]
    NotFound(String),

    /// 不正なリクエスト（パラメータの型不一致、JSON の構文エラーなど）
    #[error("不正なリクエスト: {0}")]
    BadRequest(String),

    /// 入力値のバリデーションエラー
    #[error("バリデーションエラー: {0}")]
    Validation(String),

    /// ストア障害
    #[error("データベースエラー: {0}")]
    Database(#[from] InfraError),
}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => CoreError::Validation(msg),
            DomainError::NotFound { .. } => CoreError::NotFound(err.to_string()),
        }
    }
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let body = match &self {
            CoreError::NotFound(msg) => ErrorResponse::not_found(msg.clone()),
            CoreError::BadRequest(msg) => ErrorResponse::bad_request(msg.clone()),
            CoreError::Validation(msg) => ErrorResponse::validation_error(msg.clone()),
            CoreError::Database(e) => {
                tracing::error!(
                    error.kind = "database",
                    span_trace = %e.span_trace(),
                    "データベースエラー: {}",
                    e
                );
                ErrorResponse::internal_error()
            }
        };

        let status =
            StatusCode::from_u16(body.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(body)).into_response()
    }
}
