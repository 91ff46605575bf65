//! # エラーレスポンス（RFC 9457 Problem Details）
//!
//! 従業員 API が返す 4xx/5xx の本文。`IntoResponse` への変換は各サービスが行う。

use serde::{Deserialize, Serialize};

const ERROR_TYPE_BASE: &str = "https://roster.example.com/errors";

/// 500 応答の detail。原因はログにのみ出力する
pub const INTERNAL_ERROR_DETAIL: &str = "Something went wrong. Please try again later.";

/// 問題の種類: `type` URI の末尾、`title`、HTTP ステータス
type ProblemKind = (&'static str, &'static str, u16);

const BAD_REQUEST: ProblemKind = ("bad-request", "Bad Request", 400);
const VALIDATION_ERROR: ProblemKind = ("validation-error", "Validation Error", 400);
const NOT_FOUND: ProblemKind = ("not-found", "Not Found", 404);
const INTERNAL_ERROR: ProblemKind = ("internal-error", "Internal Server Error", 500);

/// Problem Details 本文
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(rename = "type")]
    pub error_type: String,
    pub title:      String,
    pub status:     u16,
    pub detail:     String,
}

impl ErrorResponse {
    fn of((slug, title, status): ProblemKind, detail: impl Into<String>) -> Self {
        Self {
            error_type: format!("{ERROR_TYPE_BASE}/{slug}"),
            title: title.to_string(),
            status,
            detail: detail.into(),
        }
    }

    /// パラメータや JSON を解釈できない
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::of(BAD_REQUEST, detail)
    }

    /// 値が業務ルールを満たさない（空の氏名、ページ番号 0 など）
    pub fn validation_error(detail: impl Into<String>) -> Self {
        Self::of(VALIDATION_ERROR, detail)
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::of(NOT_FOUND, detail)
    }

    pub fn internal_error() -> Self {
        Self::of(INTERNAL_ERROR, INTERNAL_ERROR_DETAIL)
    }
}
