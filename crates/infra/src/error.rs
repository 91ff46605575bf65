//! # インフラ層エラー定義
//!
//! 従業員ストアの操作失敗を [`InfraError`] で表す。
//! 生成時点の [`SpanTrace`] を保持するため、500 応答の原因をログから辿れる。
//! SpanTrace を記録するには subscriber に `tracing_error::ErrorLayer` が必要。

use derive_more::Display;
use thiserror::Error;
use tracing_error::SpanTrace;

/// ストア操作のエラー
#[derive(Debug, Display)]
#[display("{kind}")]
pub struct InfraError {
    kind:       InfraErrorKind,
    span_trace: SpanTrace,
}

/// ストア操作のエラー種別
#[derive(Debug, Error)]
pub enum InfraErrorKind {
    /// クエリ実行・接続・接続取得タイムアウト
    #[error("データベースエラー: {0}")]
    Database(#[source] sqlx::Error),

    #[error("マイグレーションエラー: {0}")]
    Migration(#[source] sqlx::migrate::MigrateError),

    /// 更新対象の欠落など、ストアが整合しない状態
    #[error("予期しないエラー: {0}")]
    Unexpected(String),
}

impl InfraError {
    fn capture(kind: InfraErrorKind) -> Self {
        Self {
            kind,
            span_trace: SpanTrace::capture(),
        }
    }

    pub fn unexpected(msg: impl Into<String>) -> Self {
        Self::capture(InfraErrorKind::Unexpected(msg.into()))
    }

    pub fn kind(&self) -> &InfraErrorKind {
        &self.kind
    }

    pub fn span_trace(&self) -> &SpanTrace {
        &self.span_trace
    }
}

impl std::error::Error for InfraError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(&self.kind)
    }
}

impl From<sqlx::Error> for InfraError {
    fn from(source: sqlx::Error) -> Self {
        Self::capture(InfraErrorKind::Database(source))
    }
}

impl From<sqlx::migrate::MigrateError> for InfraError {
    fn from(source: sqlx::migrate::MigrateError) -> Self {
        Self::capture(InfraErrorKind::Migration(source))
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use pretty_assertions::assert_eq;
    use tracing_subscriber::layer::SubscriberExt as _;

    use super::*;

    /// ErrorLayer 付き subscriber の下で `f` を実行する
    fn in_traced_span<T>(span_name: &'static str, f: impl FnOnce() -> T) -> T {
        let subscriber = tracing_subscriber::registry().with(tracing_error::ErrorLayer::default());
        let _guard = tracing::subscriber::set_default(subscriber);
        let span = tracing::info_span!("span", name = span_name);
        let _enter = span.enter();
        f()
    }

    #[test]
    fn test_sqlxエラーの変換時に呼び出し元のスパンを記録する() {
        let err: InfraError = in_traced_span("find_by_id", || sqlx::Error::RowNotFound.into());

        assert!(matches!(err.kind(), InfraErrorKind::Database(_)));
        let trace = err.span_trace().to_string();
        assert!(trace.contains("find_by_id"), "{trace}");
    }

    #[test]
    fn test_unexpectedはメッセージとスパンを保持する() {
        let err = in_traced_span("update", || InfraError::unexpected("id=7 が存在しません"));

        assert_eq!(err.to_string(), "予期しないエラー: id=7 が存在しません");
        assert!(err.span_trace().to_string().contains("update"));
    }

    #[test]
    fn test_sourceは元のsqlxエラーを指す() {
        let database: InfraError = sqlx::Error::PoolTimedOut.into();
        let unexpected = InfraError::unexpected("x");

        assert!(database.source().is_some());
        assert!(unexpected.source().is_none());
    }
}
