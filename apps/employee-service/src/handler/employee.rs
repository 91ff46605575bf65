//! # 従業員ハンドラ
//!
//! 従業員名簿 API を提供する。ベースパスは `/api/Employee`。
//!
//! ## エンドポイント
//!
//! - `GET /GetAllEmployee` - 一覧（検索・役職絞り込み・在籍絞り込み・ページネーション）
//! - `GET /{employeeId}`, `GET /GetEmployeeById?employeeId=` - 単一取得
//! - `POST /AddEmployee` - 作成
//! - `PUT /UpdateEmployee` - 更新
//! - `DELETE /{employeeId}`, `DELETE /DeleteEmployee?employeeId=` - 削除
//!
//! パラメータの型不一致・JSON 構文エラーは 400（Problem Details）で返す。

use std::{fmt, str::FromStr, sync::Arc};

use axum::{
    Json,
    extract::{
        Path,
        Query,
        State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::IntoResponse,
};
use roster_domain::{
    DomainError,
    employee::{Employee, EmployeeId, EmployeePage, EmployeeQuery, NewEmployee},
    pagination::PageRequest,
    value_objects::{EmployeeName, EmployeeRole},
};
use roster_infra::repository::DeleteOutcome;
use roster_shared::{PaginatedResponse, StatusResponse};
use serde::{Deserialize, Deserializer, Serialize, de};

use crate::{error::CoreError, usecase::EmployeeUseCase};

const EMPLOYEE_ADDED: &str = "Employee added.";
const EMPLOYEE_UPDATED: &str = "Employee updated.";
const EMPLOYEE_DELETED: &str = "Employee deleted.";

/// 従業員 API の共有状態
pub struct EmployeeState {
    pub usecase: Arc<dyn EmployeeUseCase>,
}

// --- リクエスト/レスポンス型 ---

/// 一覧クエリパラメータ
///
/// 数値・真偽値の項目は空の値（`pageNumber=`）を未指定として扱う。
/// `includeInActive` は大文字小文字を区別しない（`True` も受け付ける）。
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListEmployeesParams {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub page_number:      Option<u32>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub page_size:        Option<u32>,
    pub search:           Option<String>,
    pub filter_by_role:   Option<String>,
    #[serde(rename = "includeInActive", default, deserialize_with = "lenient_bool")]
    pub include_inactive: Option<bool>,
}

/// 空の値を未指定とし、それ以外は `FromStr` で解釈する
fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    match Option::<String>::deserialize(deserializer)?.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(de::Error::custom),
    }
}

/// 大文字小文字を区別せずに真偽値を解釈する。空の値は未指定
fn lenient_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)?.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) if value.eq_ignore_ascii_case("true") => Ok(Some(true)),
        Some(value) if value.eq_ignore_ascii_case("false") => Ok(Some(false)),
        Some(value) => Err(de::Error::custom(format!("真偽値ではありません: {value}"))),
    }
}

impl ListEmployeesParams {
    /// 未指定の項目をデフォルト値で補い、一覧クエリに変換する
    ///
    /// | 項目 | デフォルト |
    /// |-----|-----------|
    /// | `pageNumber` | 1 |
    /// | `pageSize` | 0（ページネーションなし） |
    /// | `includeInActive` | false |
    pub fn into_query(self) -> Result<EmployeeQuery, DomainError> {
        let page = PageRequest::new(
            self.page_number.unwrap_or(PageRequest::DEFAULT_NUMBER),
            self.page_size.unwrap_or(0),
        )?;

        Ok(EmployeeQuery {
            page,
            search: self.search,
            filter_by_role: self.filter_by_role,
            include_inactive: self.include_inactive.unwrap_or(false),
        })
    }
}

/// 従業員 ID クエリパラメータ（`?employeeId=`）
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeIdParams {
    pub employee_id: i32,
}

/// 従業員 DTO
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDto {
    pub id:        i32,
    pub name:      String,
    pub role:      String,
    pub is_active: bool,
}

impl From<&Employee> for EmployeeDto {
    fn from(employee: &Employee) -> Self {
        Self {
            id:        employee.id().as_i32(),
            name:      employee.name().as_str().to_string(),
            role:      employee.role().as_str().to_string(),
            is_active: employee.is_active(),
        }
    }
}

/// 従業員作成リクエスト
///
/// `name` / `role` の欠落は空文字列として扱い、バリデーションで 400 にする。
/// `isActive` の欠落は JSON の解釈エラーとして 400 にする。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddEmployeeRequest {
    #[serde(default)]
    pub name:      String,
    #[serde(default)]
    pub role:      String,
    pub is_active: bool,
}

impl AddEmployeeRequest {
    fn into_new_employee(self) -> Result<NewEmployee, DomainError> {
        Ok(NewEmployee {
            name:      EmployeeName::new(self.name)?,
            role:      EmployeeRole::new(self.role)?,
            is_active: self.is_active,
        })
    }
}

/// 従業員更新リクエスト
///
/// `id` と `isActive` は必須。`name` / `role` の扱いは [`AddEmployeeRequest`] と同じ。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployeeRequest {
    pub id:        i32,
    #[serde(default)]
    pub name:      String,
    #[serde(default)]
    pub role:      String,
    pub is_active: bool,
}

impl UpdateEmployeeRequest {
    fn into_employee(self) -> Result<Employee, DomainError> {
        Ok(Employee::new(
            EmployeeId::new(self.id),
            EmployeeName::new(self.name)?,
            EmployeeRole::new(self.role)?,
            self.is_active,
        ))
    }
}

fn to_paginated_response(page: &EmployeePage) -> PaginatedResponse<EmployeeDto> {
    PaginatedResponse {
        total_record_count: page.total_record_count(),
        total_pages:        page.total_pages(),
        current_page:       page.current_page(),
        page_size:          page.page_size(),
        has_previous_page:  page.has_previous_page(),
        has_next_page:      page.has_next_page(),
        data:               page.items().iter().map(EmployeeDto::from).collect(),
    }
}

fn employee_not_found(id: EmployeeId) -> CoreError {
    DomainError::NotFound {
        entity_type: "Employee",
        id:          id.to_string(),
    }
    .into()
}

// --- ハンドラ ---

/// GET /api/Employee/GetAllEmployee
///
/// ## レスポンス
///
/// - `200 OK`: ページネーション付きの従業員一覧
/// - `400 Bad Request`: `pageNumber` が 0、またはパラメータの型不一致
#[tracing::instrument(skip_all)]
pub async fn get_all_employees(
    State(state): State<Arc<EmployeeState>>,
    params: Result<Query<ListEmployeesParams>, QueryRejection>,
) -> Result<impl IntoResponse, CoreError> {
    let Query(params) = params.map_err(|e| CoreError::BadRequest(e.body_text()))?;
    let query = params.into_query()?;

    let page = state.usecase.list_employees(&query).await?;

    Ok((StatusCode::OK, Json(to_paginated_response(&page))))
}

/// GET /api/Employee/{employeeId}
///
/// ## レスポンス
///
/// - `200 OK`: 従業員
/// - `404 Not Found`: 指定 ID の従業員が存在しない
pub async fn get_employee(
    State(state): State<Arc<EmployeeState>>,
    employee_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, CoreError> {
    let Path(employee_id) = employee_id.map_err(|e| CoreError::BadRequest(e.body_text()))?;
    find_employee(&state, EmployeeId::new(employee_id)).await
}

/// GET /api/Employee/GetEmployeeById?employeeId=
pub async fn get_employee_by_query(
    State(state): State<Arc<EmployeeState>>,
    params: Result<Query<EmployeeIdParams>, QueryRejection>,
) -> Result<impl IntoResponse, CoreError> {
    let Query(params) = params.map_err(|e| CoreError::BadRequest(e.body_text()))?;
    find_employee(&state, EmployeeId::new(params.employee_id)).await
}

#[tracing::instrument(skip(state))]
async fn find_employee(
    state: &EmployeeState,
    id: EmployeeId,
) -> Result<(StatusCode, Json<EmployeeDto>), CoreError> {
    let employee = state
        .usecase
        .get_employee(id)
        .await?
        .ok_or_else(|| employee_not_found(id))?;

    Ok((StatusCode::OK, Json(EmployeeDto::from(&employee))))
}

/// POST /api/Employee/AddEmployee
///
/// 氏名・役職は前後の空白を除去して保存する（`"  Amy  "` は `"Amy"`）。
///
/// ## レスポンス
///
/// - `200 OK`: `{ "status": true, "statusMessage": "Employee added." }`
/// - `400 Bad Request`: 氏名・役職が空、`isActive` の欠落、または JSON が不正
#[tracing::instrument(skip_all)]
pub async fn add_employee(
    State(state): State<Arc<EmployeeState>>,
    req: Result<Json<AddEmployeeRequest>, JsonRejection>,
) -> Result<impl IntoResponse, CoreError> {
    let Json(req) = req.map_err(|e| CoreError::BadRequest(e.body_text()))?;
    let new_employee = req.into_new_employee()?;

    state.usecase.create_employee(new_employee).await?;

    Ok((StatusCode::OK, Json(StatusResponse::success(EMPLOYEE_ADDED))))
}

/// PUT /api/Employee/UpdateEmployee
///
/// 氏名・役職・在籍フラグをすべて置き換える。
/// 氏名・役職は作成時と同じく前後の空白を除去して保存する。
///
/// ## レスポンス
///
/// - `200 OK`: `{ "status": true, "statusMessage": "Employee updated." }`
/// - `400 Bad Request`: 氏名・役職が空、`id` / `isActive` の欠落、または JSON が不正
/// - `500 Internal Server Error`: 更新対象が存在しない場合を含むストア障害
#[tracing::instrument(skip_all)]
pub async fn update_employee(
    State(state): State<Arc<EmployeeState>>,
    req: Result<Json<UpdateEmployeeRequest>, JsonRejection>,
) -> Result<impl IntoResponse, CoreError> {
    let Json(req) = req.map_err(|e| CoreError::BadRequest(e.body_text()))?;
    let employee = req.into_employee()?;

    state.usecase.update_employee(&employee).await?;

    Ok((StatusCode::OK, Json(StatusResponse::success(EMPLOYEE_UPDATED))))
}

/// DELETE /api/Employee/{employeeId}
///
/// ## レスポンス
///
/// - `200 OK`: `{ "status": true, "statusMessage": "Employee deleted." }`
/// - `404 Not Found`: 指定 ID の従業員が存在しない
pub async fn delete_employee(
    State(state): State<Arc<EmployeeState>>,
    employee_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, CoreError> {
    let Path(employee_id) = employee_id.map_err(|e| CoreError::BadRequest(e.body_text()))?;
    remove_employee(&state, EmployeeId::new(employee_id)).await
}

/// DELETE /api/Employee/DeleteEmployee?employeeId=
pub async fn delete_employee_by_query(
    State(state): State<Arc<EmployeeState>>,
    params: Result<Query<EmployeeIdParams>, QueryRejection>,
) -> Result<impl IntoResponse, CoreError> {
    let Query(params) = params.map_err(|e| CoreError::BadRequest(e.body_text()))?;
    remove_employee(&state, EmployeeId::new(params.employee_id)).await
}

#[tracing::instrument(skip(state))]
async fn remove_employee(
    state: &EmployeeState,
    id: EmployeeId,
) -> Result<(StatusCode, Json<StatusResponse>), CoreError> {
    match state.usecase.delete_employee(id).await? {
        DeleteOutcome::Deleted => Ok((
            StatusCode::OK,
            Json(StatusResponse::success(EMPLOYEE_DELETED)),
        )),
        DeleteOutcome::NotFound => Err(employee_not_found(id)),
    }
}
