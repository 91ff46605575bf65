//! # EmployeeRepository
//!
//! 従業員レコードの永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **ID はストアが採番**: `SERIAL` 列の値を `RETURNING` で受け取る
//! - **削除結果は型で表現**: 対象なしを [`DeleteOutcome::NotFound`] として返し、
//!   ストア障害（`Err`）と区別する
//! - **全件列挙は ID 順**: 挿入順を列挙順として一覧クエリの安定ソートに渡す
//! - **後勝ち**: 更新の競合制御は行わない

use async_trait::async_trait;
use roster_domain::{
    employee::{Employee, EmployeeId, NewEmployee},
    value_objects::{EmployeeName, EmployeeRole},
};
use sqlx::PgPool;

use crate::error::InfraError;

/// 削除操作の結果
///
/// ストア障害は `Result` の `Err` 側で表現する。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// 削除した
    Deleted,
    /// 指定 ID のレコードが存在しない
    NotFound,
}

/// 従業員リポジトリトレイト
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// 全従業員を列挙する（ID 昇順）
    async fn find_all(&self) -> Result<Vec<Employee>, InfraError>;

    /// ID で従業員を検索する
    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, InfraError>;

    /// 従業員を挿入し、採番済みの従業員を返す
    async fn insert(&self, employee: &NewEmployee) -> Result<Employee, InfraError>;

    /// 従業員を更新する（氏名、役職、在籍フラグ）
    ///
    /// 対象が存在しない場合は [`InfraError::unexpected`] を返す。
    async fn update(&self, employee: &Employee) -> Result<(), InfraError>;

    /// 従業員を削除する
    async fn delete(&self, id: EmployeeId) -> Result<DeleteOutcome, InfraError>;
}

/// PostgreSQL 実装の EmployeeRepository
#[derive(Debug, Clone)]
pub struct PostgresEmployeeRepository {
    pool: PgPool,
}

impl PostgresEmployeeRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// employees テーブルの行
#[derive(Debug, sqlx::FromRow)]
struct EmployeeRow {
    id:        i32,
    name:      String,
    role:      String,
    is_active: bool,
}

impl EmployeeRow {
    fn into_employee(self) -> Result<Employee, InfraError> {
        let name = EmployeeName::new(self.name).map_err(|e| {
            InfraError::unexpected(format!("保存済みの氏名が不正です(id={}): {e}", self.id))
        })?;
        let role = EmployeeRole::new(self.role).map_err(|e| {
            InfraError::unexpected(format!("保存済みの役職が不正です(id={}): {e}", self.id))
        })?;

        Ok(Employee::new(
            EmployeeId::new(self.id),
            name,
            role,
            self.is_active,
        ))
    }
}

#[async_trait]
impl EmployeeRepository for PostgresEmployeeRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all(&self) -> Result<Vec<Employee>, InfraError> {
        let rows = sqlx::query_as::<_, EmployeeRow>(
            r#"
            SELECT id, name, role, is_active
            FROM employees
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(EmployeeRow::into_employee).collect()
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, InfraError> {
        let row = sqlx::query_as::<_, EmployeeRow>(
            r#"
            SELECT id, name, role, is_active
            FROM employees
            WHERE id = $1
            "#,
        )
        .bind(id.as_i32())
        .fetch_optional(&self.pool)
        .await?;

        row.map(EmployeeRow::into_employee).transpose()
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn insert(&self, employee: &NewEmployee) -> Result<Employee, InfraError> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO employees (name, role, is_active)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(employee.name.as_str())
        .bind(employee.role.as_str())
        .bind(employee.is_active)
        .fetch_one(&self.pool)
        .await?;

        Ok(Employee::from_new(EmployeeId::new(id), employee.clone()))
    }

    #[tracing::instrument(skip_all, level = "debug", fields(id = %employee.id()))]
    async fn update(&self, employee: &Employee) -> Result<(), InfraError> {
        let result = sqlx::query(
            r#"
            UPDATE employees
            SET name = $2, role = $3, is_active = $4
            WHERE id = $1
            "#,
        )
        .bind(employee.id().as_i32())
        .bind(employee.name().as_str())
        .bind(employee.role().as_str())
        .bind(employee.is_active())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(InfraError::unexpected(format!(
                "更新対象の従業員が存在しません: id={}",
                employee.id()
            )));
        }

        Ok(())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn delete(&self, id: EmployeeId) -> Result<DeleteOutcome, InfraError> {
        let result = sqlx::query(
            r#"
            DELETE FROM employees
            WHERE id = $1
            "#,
        )
        .bind(id.as_i32())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            Ok(DeleteOutcome::NotFound)
        } else {
            Ok(DeleteOutcome::Deleted)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_トレイトはsendとsyncを実装している() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PostgresEmployeeRepository>();
        assert_send_sync::<Box<dyn EmployeeRepository>>();
    }

    #[test]
    fn test_空の氏名を持つ行は予期しないエラーになる() {
        let row = EmployeeRow {
            id:        3,
            name:      " ".to_string(),
            role:      "Dev".to_string(),
            is_active: true,
        };

        let err = row.into_employee().unwrap_err();

        assert!(matches!(err.kind(), crate::InfraErrorKind::Unexpected(msg) if msg.contains("id=3")));
    }

    #[test]
    fn test_行から従業員に変換できる() {
        let row = EmployeeRow {
            id:        9,
            name:      "Amy".to_string(),
            role:      "Dev".to_string(),
            is_active: false,
        };

        let employee = row.into_employee().unwrap();

        assert_eq!(employee.id(), EmployeeId::new(9));
        assert_eq!(employee.name().as_str(), "Amy");
        assert!(!employee.is_active());
    }
}
