//! # 従業員の値オブジェクト
//!
//! 従業員エンティティを構成する文字列値を Newtype で表現する。
//!
//! ## 設計方針
//!
//! - **Newtype パターン**: プリミティブ型をラップし、型安全性を確保
//! - **バリデーション**: 生成時に検証し、空の氏名・役職の存在を型レベルで排除
//! - **不変性**: 一度作成したら変更不可
//!
//! ## 含まれる型
//!
//! | 型 | ラップ対象 | 用途 |
//! |---|-----------|------|
//! | [`EmployeeName`] | `String` | 従業員の氏名 |
//! | [`EmployeeRole`] | `String` | 従業員の役職 |

// =========================================================================
// EmployeeName（氏名）
// =========================================================================

define_validated_string! {
    /// 従業員の氏名（値オブジェクト）
    ///
    /// PII（個人識別情報）のため、Debug 出力はマスクされる。
    ///
    /// # バリデーション
    ///
    /// - 空文字列ではない（前後の空白は除去される）
    /// - 最大 100 文字
    pub struct EmployeeName {
        label: "氏名",
        max_length: 100,
        pii: true,
    }
}

// =========================================================================
// EmployeeRole（役職）
// =========================================================================

define_validated_string! {
    /// 従業員の役職（値オブジェクト）
    ///
    /// 一覧クエリの役職フィルタは、この値との完全一致で判定される。
    ///
    /// # バリデーション
    ///
    /// - 空文字列ではない（前後の空白は除去される）
    /// - 最大 100 文字
    pub struct EmployeeRole {
        label: "役職",
        max_length: 100,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::DomainError;

    #[test]
    fn test_氏名は前後の空白を除去して保持する() {
        let name = EmployeeName::new("  Amy  ").unwrap();
        assert_eq!(name.as_str(), "Amy");
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    fn test_空の氏名はバリデーションエラー(#[case] input: &str) {
        let result = EmployeeName::new(input);
        assert!(matches!(result, Err(DomainError::Validation(msg)) if msg == "氏名は必須です"));
    }

    #[test]
    fn test_氏名は100文字まで許容する() {
        assert!(EmployeeName::new("あ".repeat(100)).is_ok());
        assert!(EmployeeName::new("あ".repeat(101)).is_err());
    }

    #[test]
    fn test_氏名のdebug出力はマスクされる() {
        let name = EmployeeName::new("Amy").unwrap();
        let debug = format!("{name:?}");
        assert_eq!(debug, r#"EmployeeName("[REDACTED]")"#);
    }

    #[rstest]
    #[case("")]
    #[case("  ")]
    fn test_空の役職はバリデーションエラー(#[case] input: &str) {
        let result = EmployeeRole::new(input);
        assert!(matches!(result, Err(DomainError::Validation(msg)) if msg == "役職は必須です"));
    }

    #[test]
    fn test_役職はdisplayで平文を出力する() {
        let role = EmployeeRole::new("Software Developer").unwrap();
        assert_eq!(role.to_string(), "Software Developer");
        assert_eq!(role.into_string(), "Software Developer");
    }
}
