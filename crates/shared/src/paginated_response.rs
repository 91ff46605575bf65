//! # ページネーション付きレスポンス
//!
//! ページ番号方式のページネーションに対応した一覧 API のレスポンス型。

use serde::{Deserialize, Serialize};

/// ページネーション付きレスポンス
///
/// ## JSON 形式
///
/// ```json
/// {
///   "totalRecordCount": 100,
///   "totalPages": 5,
///   "currentPage": 5,
///   "pageSize": 20,
///   "hasPreviousPage": true,
///   "hasNextPage": false,
///   "data": [...]
/// }
/// ```
///
/// `pageSize` が 0 の場合はページネーションなし（全件）で、`totalPages` は 1。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    pub total_record_count: usize,
    pub total_pages:        usize,
    pub current_page:       u32,
    pub page_size:          u32,
    pub has_previous_page:  bool,
    pub has_next_page:      bool,
    pub data:               Vec<T>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_serializeでメタ情報がキャメルケースになる() {
        let response = PaginatedResponse {
            total_record_count: 3,
            total_pages:        2,
            current_page:       2,
            page_size:          2,
            has_previous_page:  true,
            has_next_page:      false,
            data:               vec!["c"],
        };

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "totalRecordCount": 3,
                "totalPages": 2,
                "currentPage": 2,
                "pageSize": 2,
                "hasPreviousPage": true,
                "hasNextPage": false,
                "data": ["c"]
            })
        );
    }
}
