//! # リポジトリ
//!
//! 従業員ストアの抽象（トレイト）と具体的な実装を提供する。
//!
//! ## 設計方針
//!
//! - **依存性逆転**: ユースケース層はトレイトにのみ依存する
//! - **データベース抽象化**: sqlx を使用し、PostgreSQL 固有の処理をカプセル化
//! - **テスタビリティ**: トレイト経由でインメモリ実装に差し替え可能

pub mod employee_repository;

pub use employee_repository::{DeleteOutcome, EmployeeRepository, PostgresEmployeeRepository};
