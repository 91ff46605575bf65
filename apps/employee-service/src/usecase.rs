//! # ユースケース層
//!
//! Employee Service のアプリケーションロジックを実装する。
//!
//! ## 設計方針
//!
//! - **依存性注入**: リポジトリを `Arc<dyn Trait>` で外部から注入
//! - **薄いハンドラ**: ハンドラは入出力の変換のみを行い、処理はユースケースに集約
//! - **トレイト境界**: ハンドラはトレイト越しに呼び出すため、テストではスタブに差し替えられる

pub mod employee;

use async_trait::async_trait;
pub use employee::EmployeeUseCaseImpl;
use roster_domain::employee::{Employee, EmployeeId, EmployeePage, EmployeeQuery, NewEmployee};
use roster_infra::repository::DeleteOutcome;

use crate::error::CoreError;

/// 従業員ユースケーストレイト
#[async_trait]
pub trait EmployeeUseCase: Send + Sync {
    /// 一覧クエリを実行する
    async fn list_employees(&self, query: &EmployeeQuery) -> Result<EmployeePage, CoreError>;

    /// ID で従業員を取得する
    ///
    /// 存在しない場合は `Ok(None)`。
    async fn get_employee(&self, id: EmployeeId) -> Result<Option<Employee>, CoreError>;

    /// 従業員を作成し、採番済みの従業員を返す
    async fn create_employee(&self, employee: NewEmployee) -> Result<Employee, CoreError>;

    /// 従業員を更新する
    async fn update_employee(&self, employee: &Employee) -> Result<(), CoreError>;

    /// 従業員を削除する
    async fn delete_employee(&self, id: EmployeeId) -> Result<DeleteOutcome, CoreError>;
}
