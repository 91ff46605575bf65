//! # 従業員
//!
//! 従業員名簿の中心となるエンティティを定義する。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 説明 |
//! |---|------------|------|
//! | [`Employee`] | 従業員 | ストアに保存済みの従業員レコード |
//! | [`NewEmployee`] | 新規従業員 | ID 採番前の従業員レコード |
//! | [`EmployeeQuery`] | 一覧クエリ | 検索・役職絞り込み・在籍絞り込み・ページ指定 |
//!
//! ## 設計方針
//!
//! - **ID はストアが採番**: 作成時に整数 ID が割り当てられ、以後は不変
//! - **氏名・役職は検証済み**: 値オブジェクトで空文字列を排除する

mod query;

use derive_more::Display;
use serde::{Deserialize, Serialize};

pub use self::query::{EmployeePage, EmployeeQuery};
use crate::value_objects::{EmployeeName, EmployeeRole};

/// 従業員 ID（一意識別子）
///
/// ストアが作成時に採番する整数値。
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
)]
#[display("{_0}")]
pub struct EmployeeId(i32);

impl EmployeeId {
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    pub fn as_i32(&self) -> i32 {
        self.0
    }
}

/// 新規従業員
///
/// ストアに挿入されると ID が採番され [`Employee`] になる。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub name:      EmployeeName,
    pub role:      EmployeeRole,
    pub is_active: bool,
}

/// 従業員エンティティ
///
/// # 不変条件
///
/// - `id` は採番後に変更されない
/// - `name` と `role` は空でない
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    id:        EmployeeId,
    name:      EmployeeName,
    role:      EmployeeRole,
    is_active: bool,
}

impl Employee {
    pub fn new(id: EmployeeId, name: EmployeeName, role: EmployeeRole, is_active: bool) -> Self {
        Self {
            id,
            name,
            role,
            is_active,
        }
    }

    /// 採番済み ID と新規従業員から従業員を組み立てる
    pub fn from_new(id: EmployeeId, new: NewEmployee) -> Self {
        Self::new(id, new.name, new.role, new.is_active)
    }

    pub fn id(&self) -> EmployeeId {
        self.id
    }

    pub fn name(&self) -> &EmployeeName {
        &self.name
    }

    pub fn role(&self) -> &EmployeeRole {
        &self.role
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }
}
