//! # 更新系 API のレスポンス
//!
//! 作成・更新・削除の成功時に返す `{ "status": true, "statusMessage": "..." }` 形式。

use serde::{Deserialize, Serialize};

/// 更新系 API の成功レスポンス
///
/// ## 使用例
///
/// ```
/// use roster_shared::StatusResponse;
///
/// let response = StatusResponse::success("Employee added.");
/// assert!(response.status);
/// assert_eq!(response.status_message, "Employee added.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub status:         bool,
    pub status_message: String,
}

impl StatusResponse {
    /// 成功レスポンスを作成する
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status:         true,
            status_message: message.into(),
        }
    }
}
