//! # Roster ドメイン層
//!
//! 従業員名簿のドメインモデルと一覧クエリエンジンを定義する。
//!
//! ## 設計方針
//!
//! - **エンティティ**: 一意の識別子を持つオブジェクト（[`employee::Employee`]）
//! - **値オブジェクト**: 識別子を持たない不変オブジェクト（氏名、役職、ページ指定）
//! - **クエリエンジン**: 検索・絞り込み・並び替え・ページ切り出しを行う純粋関数
//! - **ドメインエラー**: ビジネスルール違反を表現するエラー型
//!
//! ## 依存関係の方向
//!
//! ```text
//! employee-service → infra → domain
//!         ↘                   ↑
//!           ──────────────────
//! ```
//!
//! ドメイン層はインフラ層（DB、HTTP）には一切依存しない。
//!
//! ## モジュール構成
//!
//! - [`employee`] - 従業員エンティティと一覧クエリ
//! - [`pagination`] - ページ指定とページ切り出し結果
//! - [`value_objects`] - 氏名・役職の値オブジェクト
//! - [`error`] - ドメイン層で発生するエラーの定義
//!
//! ## 使用例
//!
//! ```rust
//! use roster_domain::{
//!     employee::{Employee, EmployeeId, EmployeeQuery},
//!     value_objects::{EmployeeName, EmployeeRole},
//! };
//!
//! let employees = vec![Employee::new(
//!     EmployeeId::new(1),
//!     EmployeeName::new("Bob").unwrap(),
//!     EmployeeRole::new("Dev").unwrap(),
//!     true,
//! )];
//!
//! let page = EmployeeQuery::default().list(&employees);
//! assert_eq!(page.total_record_count(), 1);
//! ```

#[macro_use]
mod macros;

pub mod employee;
pub mod error;
pub mod pagination;
pub mod value_objects;

pub use error::DomainError;
