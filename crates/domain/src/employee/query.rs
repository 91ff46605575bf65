//! # 従業員一覧クエリ
//!
//! 候補レコード全件に対して、検索・役職絞り込み・在籍絞り込みを適用し、
//! 氏名順に並べてページを切り出す。
//!
//! ## 絞り込み条件
//!
//! 3 つの条件をすべて満たすレコードが一致する。
//! 各条件は入力が空（または `false`）のとき常に真になる。
//!
//! | 条件 | 一致する場合 |
//! |-----|------------|
//! | 検索 | 検索文字列が空、または氏名か役職が検索文字列を含む |
//! | 役職 | 役職フィルタが空、または役職が完全一致する |
//! | 在籍 | 退職者を含める指定、または在籍中 |
//!
//! 文字列比較はすべて大文字小文字を区別する。
//!
//! ## 並び順
//!
//! 氏名の昇順。同名のレコードは候補の列挙順を保つ（安定ソート）。

use crate::{
    employee::Employee,
    pagination::{Page, PageRequest},
};

/// 従業員一覧のページ切り出し結果
pub type EmployeePage = Page<Employee>;

/// 従業員一覧クエリ
///
/// リクエストごとに組み立てる一時的な値。状態を持たない。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeQuery {
    /// ページ指定
    pub page:             PageRequest,
    /// 氏名・役職の部分一致検索
    pub search:           Option<String>,
    /// 役職の完全一致フィルタ
    pub filter_by_role:   Option<String>,
    /// 退職者（`is_active == false`）を含めるか
    pub include_inactive: bool,
}

impl EmployeeQuery {
    /// レコードが絞り込み条件をすべて満たすか判定する
    pub fn matches(&self, employee: &Employee) -> bool {
        self.matches_search(employee)
            && self.matches_role(employee)
            && self.matches_active(employee)
    }

    /// 候補全件から一覧ページを作成する
    ///
    /// 候補は変更しない。同じ候補に同じクエリを適用すれば同じ結果になる。
    pub fn list(&self, candidates: &[Employee]) -> EmployeePage {
        let mut matched: Vec<&Employee> = candidates.iter().filter(|e| self.matches(e)).collect();

        // sort_by は安定ソート
        matched.sort_by(|a, b| a.name().as_str().cmp(b.name().as_str()));

        Page::paginate(matched, self.page).map(Employee::clone)
    }

    fn matches_search(&self, employee: &Employee) -> bool {
        match non_empty(&self.search) {
            None => true,
            Some(text) => {
                employee.name().as_str().contains(text) || employee.role().as_str().contains(text)
            }
        }
    }

    fn matches_role(&self, employee: &Employee) -> bool {
        match non_empty(&self.filter_by_role) {
            None => true,
            Some(role) => employee.role().as_str() == role,
        }
    }

    fn matches_active(&self, employee: &Employee) -> bool {
        self.include_inactive || employee.is_active()
    }
}

/// 空文字列を未指定として扱う
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::{
        employee::EmployeeId,
        value_objects::{EmployeeName, EmployeeRole},
    };

    fn employee(id: i32, name: &str, role: &str, is_active: bool) -> Employee {
        Employee::new(
            EmployeeId::new(id),
            EmployeeName::new(name).unwrap(),
            EmployeeRole::new(role).unwrap(),
            is_active,
        )
    }

    fn bob_and_amy() -> Vec<Employee> {
        vec![
            employee(1, "Bob", "Dev", true),
            employee(2, "Amy", "Dev", false),
        ]
    }

    fn names(page: &EmployeePage) -> Vec<&str> {
        page.items().iter().map(|e| e.name().as_str()).collect()
    }

    fn ids(page: &EmployeePage) -> Vec<i32> {
        page.items().iter().map(|e| e.id().as_i32()).collect()
    }

    fn query() -> EmployeeQuery {
        EmployeeQuery::default()
    }

    // ===== 在籍絞り込み =====

    #[test]
    fn test_デフォルトでは在籍中のみを返す() {
        let page = query().list(&bob_and_amy());

        assert_eq!(ids(&page), vec![1]);
        assert_eq!(page.total_record_count(), 1);
        assert_eq!(page.total_pages(), 1);
    }

    #[test]
    fn test_退職者を含めると氏名順に全員を返す() {
        let q = EmployeeQuery {
            include_inactive: true,
            ..query()
        };

        let page = q.list(&bob_and_amy());

        assert_eq!(names(&page), vec!["Amy", "Bob"]);
        assert_eq!(page.total_record_count(), 2);
    }

    // ===== 検索 =====

    #[test]
    fn test_検索は役職に関係なく氏名に一致する() {
        let q = EmployeeQuery {
            search: Some("Amy".to_string()),
            include_inactive: true,
            ..query()
        };

        let page = q.list(&bob_and_amy());

        assert_eq!(names(&page), vec!["Amy"]);
    }

    #[test]
    fn test_検索は役職の部分一致にも一致する() {
        let candidates = vec![
            employee(1, "Carol", "Software Developer", true),
            employee(2, "Dave", "Designer", true),
            employee(3, "Erin", "QA", true),
        ];
        let q = EmployeeQuery {
            search: Some("De".to_string()),
            ..query()
        };

        let page = q.list(&candidates);

        assert_eq!(names(&page), vec!["Carol", "Dave"]);
    }

    #[rstest]
    #[case("amy")]
    #[case("AMY")]
    #[case("dev")]
    fn test_検索は大文字小文字を区別する(#[case] search: &str) {
        let q = EmployeeQuery {
            search: Some(search.to_string()),
            include_inactive: true,
            ..query()
        };

        let page = q.list(&bob_and_amy());

        assert!(page.items().is_empty());
        assert_eq!(page.total_record_count(), 0);
    }

    #[test]
    fn test_空の検索文字列は未指定として扱う() {
        let q = EmployeeQuery {
            search: Some(String::new()),
            include_inactive: true,
            ..query()
        };

        assert_eq!(q.list(&bob_and_amy()).total_record_count(), 2);
    }

    // ===== 役職フィルタ =====

    #[test]
    fn test_役職フィルタは完全一致のみ() {
        let candidates = vec![
            employee(1, "Carol", "Software Developer", true),
            employee(2, "Dave", "Developer", true),
            employee(3, "Erin", "developer", true),
        ];
        let q = EmployeeQuery {
            filter_by_role: Some("Developer".to_string()),
            ..query()
        };

        let page = q.list(&candidates);

        assert_eq!(names(&page), vec!["Dave"]);
    }

    #[test]
    fn test_空の役職フィルタは未指定として扱う() {
        let q = EmployeeQuery {
            filter_by_role: Some(String::new()),
            ..query()
        };

        assert_eq!(q.list(&bob_and_amy()).total_record_count(), 1);
    }

    #[test]
    fn test_全条件はandで結合される() {
        let candidates = vec![
            employee(1, "Ann Dev", "QA", true),
            employee(2, "Ann", "Dev", false),
            employee(3, "Ann", "Dev", true),
            employee(4, "Ben", "Dev", true),
        ];
        let q = EmployeeQuery {
            search: Some("Ann".to_string()),
            filter_by_role: Some("Dev".to_string()),
            ..query()
        };

        let page = q.list(&candidates);

        assert_eq!(ids(&page), vec![3]);
    }

    // ===== 並び順 =====

    #[test]
    fn test_同名のレコードは列挙順を保つ() {
        let candidates = vec![
            employee(5, "Zed", "Dev", true),
            employee(3, "Amy", "QA", true),
            employee(1, "Amy", "Dev", true),
            employee(4, "Amy", "Ops", true),
        ];

        let page = query().list(&candidates);

        assert_eq!(ids(&page), vec![3, 1, 4, 5]);
    }

    #[test]
    fn test_氏名は文字列の辞書順で並ぶ() {
        let candidates: Vec<Employee> = ["E2", "E10", "E1"]
            .iter()
            .enumerate()
            .map(|(i, name)| employee(i as i32, name, "Dev", true))
            .collect();

        let page = query().list(&candidates);

        assert_eq!(names(&page), vec!["E1", "E10", "E2"]);
    }

    // ===== ページネーション =====

    fn hundred_employees() -> Vec<Employee> {
        (1..=100)
            .map(|i| employee(i, &format!("E{i}"), "Dev", true))
            .collect()
    }

    #[test]
    fn test_5ページ目は81番目から100番目を返す() {
        let candidates = hundred_employees();
        let mut sorted: Vec<String> = (1..=100).map(|i| format!("E{i}")).collect();
        sorted.sort();
        let q = EmployeeQuery {
            page: PageRequest::new(5, 20).unwrap(),
            ..query()
        };

        let page = q.list(&candidates);

        assert_eq!(names(&page), sorted[80..100].iter().map(String::as_str).collect::<Vec<_>>());
        assert_eq!(page.total_record_count(), 100);
        assert_eq!(page.total_pages(), 5);
        assert_eq!(page.current_page(), 5);
        assert!(page.has_previous_page());
        assert!(!page.has_next_page());
    }

    #[test]
    fn test_総ページ数を超えるページは空でエラーにならない() {
        let q = EmployeeQuery {
            page: PageRequest::new(9, 20).unwrap(),
            ..query()
        };

        let page = q.list(&hundred_employees());

        assert!(page.items().is_empty());
        assert_eq!(page.total_record_count(), 100);
        assert_eq!(page.total_pages(), 5);
        assert!(!page.has_next_page());
    }

    #[test]
    fn test_ウィンドウは並び替え済み全件の該当範囲と一致する() {
        let candidates: Vec<Employee> = (0..37)
            .map(|i| employee(i, &format!("N{}", (i * 7) % 37), "Dev", i % 3 != 0))
            .collect();
        let all = EmployeeQuery {
            include_inactive: true,
            ..query()
        }
        .list(&candidates);

        for size in 1..=10u32 {
            for number in 1..=8u32 {
                let q = EmployeeQuery {
                    page: PageRequest::new(number, size).unwrap(),
                    include_inactive: true,
                    ..query()
                };
                let page = q.list(&candidates);

                let start = ((number - 1) * size) as usize;
                let expected: Vec<&Employee> =
                    all.items().iter().skip(start).take(size as usize).collect();
                let actual: Vec<&Employee> = page.items().iter().collect();

                assert_eq!(actual, expected, "size={size} number={number}");
                assert_eq!(page.total_record_count(), 37);
                assert_eq!(page.total_pages(), 37usize.div_ceil(size as usize));
                assert_eq!(page.has_previous_page(), number > 1);
                assert_eq!(page.has_next_page(), (number as usize) < page.total_pages());
            }
        }
    }

    #[test]
    fn test_同じクエリを繰り返しても結果は同じで候補は変更されない() {
        let candidates = hundred_employees();
        let snapshot = candidates.clone();
        let q = EmployeeQuery {
            page: PageRequest::new(2, 15).unwrap(),
            search: Some("E1".to_string()),
            ..query()
        };

        let first = q.list(&candidates);
        let second = q.list(&candidates);

        assert_eq!(first, second);
        assert_eq!(candidates, snapshot);
    }

    #[test]
    fn test_総件数はページ指定に依存しない() {
        let candidates = hundred_employees();
        let filtered = |page: PageRequest| {
            EmployeeQuery {
                page,
                search: Some("E9".to_string()),
                ..query()
            }
            .list(&candidates)
            .total_record_count()
        };

        // E9, E90..E99
        assert_eq!(filtered(PageRequest::unpaged()), 11);
        assert_eq!(filtered(PageRequest::new(1, 4).unwrap()), 11);
        assert_eq!(filtered(PageRequest::new(7, 4).unwrap()), 11);
    }
}
