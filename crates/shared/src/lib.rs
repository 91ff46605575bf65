//! # Roster 共有ユーティリティ
//!
//! Roster の各クレートから利用される、ビジネスロジックを含まない
//! レスポンス型・観測基盤を提供する。
//!
//! ## 設計方針
//!
//! - domain / infra には依存しない
//! - axum には依存しない（`IntoResponse` 変換は各サービスの責務）
//! - tower-http / tracing-subscriber への依存は `observability` feature に閉じ込める

pub mod api_response;
pub mod error_response;
pub mod health;
pub mod observability;
pub mod paginated_response;

pub use api_response::StatusResponse;
pub use error_response::ErrorResponse;
pub use health::{CheckStatus, HealthResponse, ReadinessResponse, ReadinessStatus};
pub use paginated_response::PaginatedResponse;
