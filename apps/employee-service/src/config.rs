//! # Employee Service 設定
//!
//! 環境変数から Employee Service サーバーの設定を読み込む。

use std::env;

use thiserror::Error;

/// 設定読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// 必須の環境変数が未設定
    #[error("{0} が設定されていません（.env を確認してください）")]
    Missing(&'static str),

    /// 環境変数の値が不正
    #[error("{name} の値が不正です: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Employee Service サーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeServiceConfig {
    /// バインドアドレス
    pub host:           String,
    /// ポート番号
    pub port:           u16,
    /// データベース接続 URL
    pub database_url:   String,
    /// 起動時にマイグレーションを適用するか
    pub run_migrations: bool,
}

impl EmployeeServiceConfig {
    const DEFAULT_HOST: &'static str = "0.0.0.0";
    const DEFAULT_PORT: u16 = 3000;

    /// 環境変数から設定を読み込む
    ///
    /// | 変数名 | 必須 | デフォルト |
    /// |--------|------|-----------|
    /// | `ROSTER_HOST` | No | `0.0.0.0` |
    /// | `ROSTER_PORT` | No | `3000` |
    /// | `DATABASE_URL` | **Yes** | - |
    /// | `RUN_MIGRATIONS` | No | `true` |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 任意の値取得関数から設定を組み立てる
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("ROSTER_HOST").unwrap_or_else(|| Self::DEFAULT_HOST.to_string());

        let port = match lookup("ROSTER_PORT") {
            None => Self::DEFAULT_PORT,
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                name: "ROSTER_PORT",
                value,
            })?,
        };

        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let run_migrations = match lookup("RUN_MIGRATIONS") {
            None => true,
            Some(value) => parse_bool(&value).ok_or(ConfigError::Invalid {
                name: "RUN_MIGRATIONS",
                value,
            })?,
        };

        Ok(Self {
            host,
            port,
            database_url,
            run_migrations,
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}
