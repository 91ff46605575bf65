//! # テスト用モックリポジトリ
//!
//! ユースケーステスト・ハンドラテストで使用するインメモリモックリポジトリ。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! roster-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use roster_domain::employee::{Employee, EmployeeId, NewEmployee};

use crate::{
    error::InfraError,
    repository::{DeleteOutcome, EmployeeRepository},
};

// ===== MockEmployeeRepository =====

/// インメモリの従業員ストア
///
/// ID は 1 から順に採番する。列挙順は挿入順。
#[derive(Clone, Default)]
pub struct MockEmployeeRepository {
    state: Arc<Mutex<MockState>>,
}

#[derive(Default)]
struct MockState {
    employees: Vec<Employee>,
    last_id:   i32,
}

impl MockEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 採番済みの従業員をそのまま追加する
    ///
    /// 以後の採番は追加済みの最大 ID より後から行う。
    pub fn add_employee(&self, employee: Employee) {
        let mut state = self.state.lock().unwrap();
        state.last_id = state.last_id.max(employee.id().as_i32());
        state.employees.push(employee);
    }

    /// 現在保持している従業員のスナップショット
    pub fn employees(&self) -> Vec<Employee> {
        self.state.lock().unwrap().employees.clone()
    }
}

#[async_trait]
impl EmployeeRepository for MockEmployeeRepository {
    async fn find_all(&self) -> Result<Vec<Employee>, InfraError> {
        Ok(self.employees())
    }

    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, InfraError> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .employees
            .iter()
            .find(|e| e.id() == id)
            .cloned())
    }

    async fn insert(&self, employee: &NewEmployee) -> Result<Employee, InfraError> {
        let mut state = self.state.lock().unwrap();
        state.last_id += 1;
        let created = Employee::from_new(EmployeeId::new(state.last_id), employee.clone());
        state.employees.push(created.clone());
        Ok(created)
    }

    async fn update(&self, employee: &Employee) -> Result<(), InfraError> {
        let mut state = self.state.lock().unwrap();
        let Some(slot) = state.employees.iter_mut().find(|e| e.id() == employee.id()) else {
            return Err(InfraError::unexpected(format!(
                "更新対象の従業員が存在しません: id={}",
                employee.id()
            )));
        };
        *slot = employee.clone();
        Ok(())
    }

    async fn delete(&self, id: EmployeeId) -> Result<DeleteOutcome, InfraError> {
        let mut state = self.state.lock().unwrap();
        let before = state.employees.len();
        state.employees.retain(|e| e.id() != id);

        if state.employees.len() == before {
            Ok(DeleteOutcome::NotFound)
        } else {
            Ok(DeleteOutcome::Deleted)
        }
    }
}

// ===== FailingEmployeeRepository =====

/// すべての操作がストア障害を返すリポジトリ
///
/// 500 応答への変換を検証するために使用する。
#[derive(Clone, Default)]
pub struct FailingEmployeeRepository;

impl FailingEmployeeRepository {
    fn failure() -> InfraError {
        InfraError::unexpected("ストアに接続できません")
    }
}

#[async_trait]
impl EmployeeRepository for FailingEmployeeRepository {
    async fn find_all(&self) -> Result<Vec<Employee>, InfraError> {
        Err(Self::failure())
    }

    async fn find_by_id(&self, _id: EmployeeId) -> Result<Option<Employee>, InfraError> {
        Err(Self::failure())
    }

    async fn insert(&self, _employee: &NewEmployee) -> Result<Employee, InfraError> {
        Err(Self::failure())
    }

    async fn update(&self, _employee: &Employee) -> Result<(), InfraError> {
        Err(Self::failure())
    }

    async fn delete(&self, _id: EmployeeId) -> Result<DeleteOutcome, InfraError> {
        Err(Self::failure())
    }
}
