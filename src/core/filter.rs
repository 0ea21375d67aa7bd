use crate::domain::model::{RecipeRequirement, SubstituteItem};

/// 可依名稱／分類／菜系篩選的項目
pub trait Filterable {
    fn display_name(&self) -> &str;

    fn category(&self) -> Option<&str> {
        None
    }

    fn culture(&self) -> Option<&str> {
        None
    }
}

impl Filterable for RecipeRequirement {
    fn display_name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }

    fn culture(&self) -> Option<&str> {
        Some(&self.culture)
    }
}

impl Filterable for SubstituteItem {
    fn display_name(&self) -> &str {
        &self.name
    }
}

/// Criteria for a browse view. Unset fields do not filter.
///
/// * `name`: case-insensitive substring of the display name; blank means all.
/// * `category`: exact, case-sensitive match; `"All"` means all.
/// * `culture`: case-insensitive equality; `"All"` and `"Select"` (any case) mean all.
#[derive(Debug, Clone, Copy, Default)]
pub struct ItemFilter<'q> {
    pub name: Option<&'q str>,
    pub category: Option<&'q str>,
    pub culture: Option<&'q str>,
}

/// 名稱包含查詢字串（不分大小寫）。空查詢回傳全部。
pub fn filter_by_name<'a, T: Filterable>(items: &'a [T], query: &str) -> Vec<&'a T> {
    filter_items(items, &ItemFilter { name: Some(query), ..Default::default() })
}

pub fn filter_by_category<'a, T: Filterable>(items: &'a [T], category: Option<&str>) -> Vec<&'a T> {
    filter_items(items, &ItemFilter { category, ..Default::default() })
}

pub fn filter_by_culture<'a, T: Filterable>(items: &'a [T], culture: Option<&str>) -> Vec<&'a T> {
    filter_items(items, &ItemFilter { culture, ..Default::default() })
}

/// Borrowed view of `items` passing every criterion in `filter`, in source order.
pub fn filter_items<'a, T: Filterable>(items: &'a [T], filter: &ItemFilter<'_>) -> Vec<&'a T> {
    let query = filter
        .name
        .map(|q| q.trim_matches(|c: char| c <= '\u{20}').to_lowercase())
        .filter(|q| !q.is_empty());
    // 分類比對區分大小寫，也不去除空白
    let category = filter.category.filter(|c| *c != "All");
    let culture = filter
        .culture
        .filter(|c| !eq_ignore_case(c, "all") && !eq_ignore_case(c, "select"));

    items
        .iter()
        .filter(|item| {
            query
                .as_ref()
                .map_or(true, |q| item.display_name().to_lowercase().contains(q.as_str()))
        })
        .filter(|item| category.map_or(true, |wanted| item.category() == Some(wanted)))
        .filter(|item| {
            culture.map_or(true, |wanted| {
                item.culture().map_or(false, |c| eq_ignore_case(c, wanted))
            })
        })
        .collect()
}

/// 逐字元比較，大小寫任一方向相同即可
fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars().count() == b.chars().count()
        && a.chars().zip(b.chars()).all(|(x, y)| {
            x == y || x.to_uppercase().eq(y.to_uppercase()) || x.to_lowercase().eq(y.to_lowercase())
        })
}
