//! # Employee Service アプリケーション構築
//!
//! DI（リポジトリ → ユースケース → State）の初期化とルーター構築を担当する。
//! `main.rs` はインフラ初期化とサーバー起動に集中する。

use std::sync::Arc;

use axum::{
    Router,
    middleware::from_fn,
    routing::{delete, get, post, put},
};
use roster_infra::repository::EmployeeRepository;
use roster_shared::observability::{MakeRequestUuidV7, make_request_span};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    handler::{
        EmployeeState,
        ReadinessState,
        add_employee,
        delete_employee,
        delete_employee_by_query,
        get_all_employees,
        get_employee,
        get_employee_by_query,
        health_check,
        readiness_check,
        update_employee,
    },
    middleware::access_log,
    usecase::EmployeeUseCaseImpl,
};

/// 従業員 API のベースパス
pub const EMPLOYEE_BASE_PATH: &str = "/api/Employee";

/// 従業員 API のルーター（ベースパスからの相対）
///
/// `/{employee_id}` は静的セグメントのルートより優先度が低いため、
/// `GetAllEmployee` などと衝突しない。
pub fn employee_routes(state: Arc<EmployeeState>) -> Router {
    Router::new()
        .route("/GetAllEmployee", get(get_all_employees))
        .route("/GetEmployeeById", get(get_employee_by_query))
        .route("/AddEmployee", post(add_employee))
        .route("/UpdateEmployee", put(update_employee))
        .route("/DeleteEmployee", delete(delete_employee_by_query))
        .route("/{employee_id}", get(get_employee).delete(delete_employee))
        .with_state(state)
}

/// DI コンテナの構築とルーター定義を行う
pub fn build_app(
    employee_repository: Arc<dyn EmployeeRepository>,
    readiness_state: Arc<ReadinessState>,
) -> Router {
    let employee_state = Arc::new(EmployeeState {
        usecase: Arc::new(EmployeeUseCaseImpl::new(employee_repository)),
    });

    Router::new()
        .route("/health", get(health_check))
        .merge(
            Router::new()
                .route("/health/ready", get(readiness_check))
                .with_state(readiness_state),
        )
        .nest(EMPLOYEE_BASE_PATH, employee_routes(employee_state))
        // 下に書いたものが外側
        // 1. SetRequestIdLayer（最外）: UUID v7 を生成（クライアント提供値があればそれを使用）
        // 2. TraceLayer: request_id を含むスパンを作成
        // 3. PropagateRequestIdLayer: レスポンスヘッダーに X-Request-Id をコピー
        // 4. access_log: リクエスト完了時にサマリを出力（スパン内）
        .layer(from_fn(access_log))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
