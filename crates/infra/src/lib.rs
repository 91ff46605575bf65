//! # Roster インフラ層
//!
//! 従業員ストアの永続化を担当するインフラストラクチャ層。
//!
//! ## 設計方針
//!
//! このクレートはストアの抽象（[`repository::EmployeeRepository`]）と、
//! その具体的な実装を提供する。ユースケース層はトレイトにのみ依存し、
//! データベース技術の詳細を知らない。
//!
//! ## 責務
//!
//! - **データベース接続**: PostgreSQL への接続プール管理とマイグレーション
//! - **リポジトリ実装**: 従業員レコードの CRUD と全件列挙
//! - **テスト用ストア**: インメモリのモックリポジトリ（`test-utils` feature）
//!
//! ## モジュール構成
//!
//! - [`db`] - PostgreSQL データベース接続管理
//! - [`error`] - インフラ層エラー定義
//! - [`repository`] - リポジトリトレイトと実装
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use roster_infra::{db, repository::PostgresEmployeeRepository};
//!
//! async fn setup() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = db::create_pool("postgres://localhost/roster").await?;
//!     db::run_migrations(&pool).await?;
//!
//!     let repository = PostgresEmployeeRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod db;
pub mod error;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod repository;

pub use error::{InfraError, InfraErrorKind};
