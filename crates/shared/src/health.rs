//! # ヘルスチェック共通型
//!
//! `/health`（liveness）と `/health/ready`（readiness）のレスポンス型。

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// ヘルスチェックレスポンス
///
/// ```
/// use roster_shared::HealthResponse;
///
/// let response = HealthResponse::healthy("0.1.0");
/// assert_eq!(response.status, "healthy");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// 稼働状態
    pub status:  String,
    /// アプリケーションバージョン（Cargo.toml から取得）
    pub version: String,
}

impl HealthResponse {
    pub fn healthy(version: impl Into<String>) -> Self {
        Self {
            status:  "healthy".to_string(),
            version: version.into(),
        }
    }
}

/// 個別チェックの結果ステータス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Ok,
    Error,
}

/// Readiness 全体のステータス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessStatus {
    /// 全依存先が利用可能
    Ready,
    /// 一部の依存先が利用不可
    NotReady,
}

/// Readiness Check レスポンス
///
/// キーの順序を安定させるため `checks` は `BTreeMap` で保持する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub status: ReadinessStatus,
    pub checks: BTreeMap<String, CheckStatus>,
}

impl ReadinessResponse {
    /// 個別チェック結果から全体ステータスを決定する
    ///
    /// すべて `Ok` なら `Ready`、1 つでも `Error` があれば `NotReady`。
    pub fn from_checks(checks: BTreeMap<String, CheckStatus>) -> Self {
        let status = if checks.values().all(|s| *s == CheckStatus::Ok) {
            ReadinessStatus::Ready
        } else {
            ReadinessStatus::NotReady
        };
        Self { status, checks }
    }

    pub fn is_ready(&self) -> bool {
        self.status == ReadinessStatus::Ready
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn database(status: CheckStatus) -> BTreeMap<String, CheckStatus> {
        BTreeMap::from([("database".to_string(), status)])
    }

    #[test]
    fn test_health_responseのserializeで正しいjson形状にする() {
        let json = serde_json::to_value(HealthResponse::healthy("0.1.0")).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "status": "healthy",
                "version": "0.1.0"
            })
        );
    }

    #[test]
    fn test_全チェック成功でreadyになる() {
        let response = ReadinessResponse::from_checks(database(CheckStatus::Ok));

        assert!(response.is_ready());
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            serde_json::json!({
                "status": "ready",
                "checks": { "database": "ok" }
            })
        );
    }

    #[test]
    fn test_チェック失敗があるとnot_readyになる() {
        let response = ReadinessResponse::from_checks(database(CheckStatus::Error));

        assert!(!response.is_ready());
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            serde_json::json!({
                "status": "not_ready",
                "checks": { "database": "error" }
            })
        );
    }
}
