//! # Employee Service サーバー
//!
//! 従業員名簿の CRUD と一覧クエリを提供する API サーバー。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `ROSTER_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `ROSTER_PORT` | No | ポート番号（デフォルト: `3000`） |
//! | `DATABASE_URL` | **Yes** | PostgreSQL 接続 URL |
//! | `RUN_MIGRATIONS` | No | 起動時にマイグレーションを適用するか（デフォルト: `true`） |
//! | `LOG_FORMAT` | No | `json` で JSON 形式のログを出力 |
//! | `RUST_LOG` | No | ログフィルタ |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境
//! cargo run -p roster-employee-service
//!
//! # 本番環境
//! ROSTER_PORT=8080 DATABASE_URL=postgres://... cargo run -p roster-employee-service --release
//! ```

use std::sync::Arc;

use anyhow::Context;
use roster_employee_service::{
    app_builder::build_app,
    config::EmployeeServiceConfig,
    handler::ReadinessState,
};
use roster_infra::{
    db,
    repository::{EmployeeRepository, PostgresEmployeeRepository},
};
use roster_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

/// Employee Service サーバーのエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    let tracing_config = TracingConfig::from_env("employee-service");
    init_tracing(&tracing_config);
    let _tracing_guard = tracing::info_span!("app", service = "employee-service").entered();

    let config = EmployeeServiceConfig::from_env().context("設定の読み込みに失敗しました")?;

    tracing::info!(
        "Employee Service サーバーを起動します: {}:{}",
        config.host,
        config.port
    );

    let pool = db::create_pool(&config.database_url)
        .await
        .context("データベース接続に失敗しました")?;
    tracing::info!("データベースに接続しました");

    if config.run_migrations {
        db::run_migrations(&pool)
            .await
            .context("マイグレーションの実行に失敗しました")?;
        tracing::info!("マイグレーションを適用しました");
    }

    // pool が move される前に clone
    let readiness_state = Arc::new(ReadinessState { pool: pool.clone() });
    let employee_repository: Arc<dyn EmployeeRepository> =
        Arc::new(PostgresEmployeeRepository::new(pool));

    let app = build_app(employee_repository, readiness_state);

    let listener = TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("{}:{} にバインドできません", config.host, config.port))?;
    tracing::info!(
        "Employee Service サーバーが起動しました: {}",
        listener.local_addr()?
    );

    axum::serve(listener, app).await?;

    Ok(())
}
