//! # ドメイン層エラー定義
//!
//! ビジネスルール違反やドメイン固有の例外状態を表現するエラー型。
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `Validation` | 400 Bad Request | 入力値の検証失敗 |
//! | `NotFound` | 404 Not Found | エンティティが存在しない |
//!
//! ## 使用例
//!
//! ```rust
//! use roster_domain::DomainError;
//!
//! fn validate_name(name: &str) -> Result<(), DomainError> {
//!     if name.is_empty() {
//!         return Err(DomainError::Validation("氏名は必須です".to_string()));
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// ドメイン層で発生するエラー
///
/// API 層でこのエラーを受け取り、適切な HTTP レスポンスに変換する。
#[derive(Debug, Error)]
pub enum DomainError {
    /// バリデーションエラー
    ///
    /// 入力値がビジネスルールに違反している場合に使用する。
    ///
    /// # 例
    ///
    /// - 必須フィールドが未入力
    /// - 文字数制限の超過
    /// - ページ番号が 0
    #[error("バリデーションエラー: {0}")]
    Validation(String),

    /// エンティティが見つからない
    ///
    /// 指定された ID のエンティティがストアに存在しない場合に使用する。
    #[error("{entity_type} が見つかりません: {id}")]
    NotFound {
        /// エンティティの種類（"Employee" など）
        entity_type: &'static str,
        /// 検索に使用した識別子
        id:          String,
    },
}
