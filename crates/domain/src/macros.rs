/// 必須・長さ制限付きの文字列 Newtype を定義する
///
/// `new()` は前後の空白を除去してから検証する。ストアに入る値は常に除去済みのため、
/// 一覧の検索・役職フィルタも除去後の値と比較される。
///
/// - `label`: エラーメッセージ中の項目名（`"氏名は必須です"`）
/// - `max_length`: 最大文字数（`char` 単位）
/// - `pii: true`: `Debug` で値を出さず、`Display` を実装しない
///
/// ```rust
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use roster_domain::value_objects::{EmployeeName, EmployeeRole};
///
/// let name = EmployeeName::new("  Amy  ")?;
/// assert_eq!(name.as_str(), "Amy");
/// assert_eq!(format!("{name:?}"), r#"EmployeeName("[REDACTED]")"#);
///
/// let role = EmployeeRole::new("Dev")?;
/// assert_eq!(role.to_string(), "Dev");
/// # Ok(())
/// # }
/// ```
macro_rules! define_validated_string {
    (@newtype $(#[$meta:meta])* $vis:vis $Name:ident, $label:expr, $max_length:expr) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
        $vis struct $Name(String);

        impl $Name {
            pub fn new(value: impl Into<String>) -> Result<Self, $crate::DomainError> {
                let value = value.into().trim().to_string();

                if value.is_empty() {
                    return Err($crate::DomainError::Validation(format!("{}は必須です", $label)));
                }
                if value.chars().count() > $max_length {
                    return Err($crate::DomainError::Validation(format!(
                        "{}は {} 文字以内である必要があります",
                        $label, $max_length
                    )));
                }

                Ok(Self(value))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_string(self) -> String {
                self.0
            }
        }
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $Name:ident {
            label: $label:expr,
            max_length: $max_length:expr,
            pii: true $(,)?
        }
    ) => {
        define_validated_string!(@newtype $(#[$meta])* $vis $Name, $label, $max_length);

        impl std::fmt::Debug for $Name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_tuple(stringify!($Name)).field(&"[REDACTED]").finish()
            }
        }
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $Name:ident {
            label: $label:expr,
            max_length: $max_length:expr $(,)?
        }
    ) => {
        define_validated_string!(@newtype $(#[$meta])* $vis $Name, $label, $max_length);

        impl std::fmt::Debug for $Name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_tuple(stringify!($Name)).field(&self.0).finish()
            }
        }

        impl std::fmt::Display for $Name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}
