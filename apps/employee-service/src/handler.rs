//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュール（この `handler.rs`）で re-export し、フラットな API を提供
//! - ハンドラは入出力の変換に徹し、処理はユースケースに委譲

pub mod employee;
pub mod health;

pub use employee::{
    EmployeeState,
    add_employee,
    delete_employee,
    delete_employee_by_query,
    get_all_employees,
    get_employee,
    get_employee_by_query,
    update_employee,
};
pub use health::{ReadinessState, health_check, readiness_check};
