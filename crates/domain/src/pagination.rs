//! # ページネーション
//!
//! ページ番号方式のページ指定（[`PageRequest`]）と、
//! 並び替え済みの結果からページを切り出した結果（[`Page`]）を定義する。
//!
//! ## ページ切り出しの規則
//!
//! | ページサイズ | 総ページ数 | 切り出し |
//! |-------------|-----------|---------|
//! | `0` | 常に 1 | 行わない（全件を返す） |
//! | `p > 0` | `ceil(総件数 / p)` | `(番号 - 1) * p` 件スキップして `p` 件 |
//!
//! ページ番号は総ページ数に丸めない。範囲外のページは空の結果になる。

use crate::DomainError;

/// ページ指定（値オブジェクト）
///
/// # 不変条件
///
/// - ページ番号は 1 以上
/// - ページサイズ 0 はページネーションなし（全件）を意味する
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    number: u32,
    size:   u32,
}

impl PageRequest {
    /// ページ番号のデフォルト値
    pub const DEFAULT_NUMBER: u32 = 1;

    /// ページ指定を作成する
    ///
    /// # エラー
    ///
    /// ページ番号が 0 の場合は `DomainError::Validation` を返す。
    pub fn new(number: u32, size: u32) -> Result<Self, DomainError> {
        if number == 0 {
            return Err(DomainError::Validation(
                "ページ番号は 1 以上である必要があります".to_string(),
            ));
        }
        Ok(Self { number, size })
    }

    /// ページネーションなし（全件取得）の指定を作成する
    pub fn unpaged() -> Self {
        Self {
            number: Self::DEFAULT_NUMBER,
            size:   0,
        }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// ページネーションなしの指定かどうか
    pub fn is_unpaged(&self) -> bool {
        self.size == 0
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::unpaged()
    }
}

/// ページ切り出し結果
///
/// 切り出し前の総件数とページのメタ情報、切り出したウィンドウを保持する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    total_record_count: usize,
    total_pages:        usize,
    current_page:       u32,
    page_size:          u32,
    items:              Vec<T>,
}

impl<T> Page<T> {
    /// 並び替え済みの全件からページを切り出す
    pub fn paginate(items: Vec<T>, request: PageRequest) -> Self {
        let total_record_count = items.len();

        if request.is_unpaged() {
            return Self {
                total_record_count,
                total_pages: 1,
                current_page: request.number(),
                page_size: request.size(),
                items,
            };
        }

        let size = request.size() as usize;
        let skip = (request.number() as usize - 1).saturating_mul(size);
        let window = items.into_iter().skip(skip).take(size).collect();

        Self {
            total_record_count,
            total_pages: total_record_count.div_ceil(size),
            current_page: request.number(),
            page_size: request.size(),
            items: window,
        }
    }

    /// フィルタ通過件数（切り出し前）
    pub fn total_record_count(&self) -> usize {
        self.total_record_count
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn has_previous_page(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next_page(&self) -> bool {
        (self.current_page as usize) < self.total_pages
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// メタ情報を保ったままウィンドウの要素を変換する
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            total_record_count: self.total_record_count,
            total_pages:        self.total_pages,
            current_page:       self.current_page,
            page_size:          self.page_size,
            items:              self.items.into_iter().map(f).collect(),
        }
    }
}
