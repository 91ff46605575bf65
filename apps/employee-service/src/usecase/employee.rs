//! # 従業員ユースケース
//!
//! 一覧クエリはリポジトリから全件を取得し、ドメインの [`EmployeeQuery::list`] で
//! 絞り込み・並び替え・ページ切り出しを行う。単一レコードの操作はリポジトリに委譲する。

use std::sync::Arc;

use async_trait::async_trait;
use roster_domain::employee::{Employee, EmployeeId, EmployeePage, EmployeeQuery, NewEmployee};
use roster_infra::repository::{DeleteOutcome, EmployeeRepository};

use super::EmployeeUseCase;
use crate::error::CoreError;

/// 従業員ユースケースの実装
pub struct EmployeeUseCaseImpl {
    employee_repository: Arc<dyn EmployeeRepository>,
}

impl EmployeeUseCaseImpl {
    pub fn new(employee_repository: Arc<dyn EmployeeRepository>) -> Self {
        Self {
            employee_repository,
        }
    }
}

#[async_trait]
impl EmployeeUseCase for EmployeeUseCaseImpl {
    #[tracing::instrument(
        skip_all,
        fields(
            page_number = query.page.number(),
            page_size = query.page.size(),
            include_inactive = query.include_inactive,
        )
    )]
    async fn list_employees(&self, query: &EmployeeQuery) -> Result<EmployeePage, CoreError> {
        let candidates = self.employee_repository.find_all().await?;
        let page = query.list(&candidates);

        tracing::debug!(
            candidates = candidates.len(),
            matched = page.total_record_count(),
            returned = page.items().len(),
            "一覧クエリを実行しました"
        );

        Ok(page)
    }

    #[tracing::instrument(skip_all, fields(%id))]
    async fn get_employee(&self, id: EmployeeId) -> Result<Option<Employee>, CoreError> {
        Ok(self.employee_repository.find_by_id(id).await?)
    }

    #[tracing::instrument(skip_all)]
    async fn create_employee(&self, employee: NewEmployee) -> Result<Employee, CoreError> {
        let created = self.employee_repository.insert(&employee).await?;
        tracing::info!(id = %created.id(), "従業員を作成しました");
        Ok(created)
    }

    #[tracing::instrument(skip_all, fields(id = %employee.id()))]
    async fn update_employee(&self, employee: &Employee) -> Result<(), CoreError> {
        self.employee_repository.update(employee).await?;
        tracing::info!("従業員を更新しました");
        Ok(())
    }

    #[tracing::instrument(skip_all, fields(%id))]
    async fn delete_employee(&self, id: EmployeeId) -> Result<DeleteOutcome, CoreError> {
        let outcome = self.employee_repository.delete(id).await?;
        if outcome == DeleteOutcome::Deleted {
            tracing::info!("従業員を削除しました");
        }
        Ok(outcome)
    }
}
