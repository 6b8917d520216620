//! Named query shapes applied by the entity store

use super::store::Entity;

/// Value bound to a `?` placeholder of a rendered predicate
#[derive(Debug, Clone, PartialEq)]
pub enum Bind {
    Bool(bool),
    Int(i64),
}

/// Predicate over one entity table.
///
/// Flag and foreign-key predicates render to SQL. Text predicates are matched
/// row by row with `str::to_lowercase` on both sides (SQLite's `LOWER` only
/// folds ASCII). A `NULL` column never matches a text predicate.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// `column` equals the given boolean
    Flag { column: &'static str, value: bool },
    /// `column` equals `value`, ignoring case
    EqualsIgnoreCase { column: &'static str, value: String },
    /// `column` contains `value` as a substring, ignoring case
    ContainsIgnoreCase { column: &'static str, value: String },
    /// At least one of `columns` contains `value`, ignoring case
    AnyContainsIgnoreCase {
        columns: &'static [&'static str],
        value: String,
    },
    /// Foreign key `column` points at `id`
    References { column: &'static str, id: i64 },
}

impl Filter {
    pub fn flag(column: &'static str, value: bool) -> Self {
        Filter::Flag { column, value }
    }

    pub fn equals_ignore_case(column: &'static str, value: &str) -> Self {
        Filter::EqualsIgnoreCase {
            column,
            value: value.to_lowercase(),
        }
    }

    pub fn contains_ignore_case(column: &'static str, value: &str) -> Self {
        Filter::ContainsIgnoreCase {
            column,
            value: value.to_lowercase(),
        }
    }

    pub fn any_contains_ignore_case(columns: &'static [&'static str], value: &str) -> Self {
        Filter::AnyContainsIgnoreCase {
            columns,
            value: value.to_lowercase(),
        }
    }

    pub fn references(column: &'static str, id: i64) -> Self {
        Filter::References { column, id }
    }

    /// Render as a WHERE predicate with `?` placeholders and the matching binds.
    /// `None` for text predicates, which are evaluated by [`Filter::matches`].
    pub fn to_sql(&self) -> Option<(String, Vec<Bind>)> {
        match self {
            Filter::Flag { column, value } => {
                Some((format!("{} = ?", column), vec![Bind::Bool(*value)]))
            }
            Filter::References { column, id } => {
                Some((format!("{} = ?", column), vec![Bind::Int(*id)]))
            }
            Filter::EqualsIgnoreCase { .. }
            | Filter::ContainsIgnoreCase { .. }
            | Filter::AnyContainsIgnoreCase { .. } => None,
        }
    }

    /// Whether a row satisfies the text part of this filter.
    /// Always true for predicates already applied in SQL.
    pub fn matches<E: Entity>(&self, row: &E) -> bool {
        // Needles are lowercased at construction
        let folded = |column: &str| row.text(column).map(str::to_lowercase);

        match self {
            Filter::Flag { .. } | Filter::References { .. } => true,
            Filter::EqualsIgnoreCase { column, value } => {
                folded(*column).is_some_and(|text| text == *value)
            }
            Filter::ContainsIgnoreCase { column, value } => {
                folded(*column).is_some_and(|text| text.contains(value.as_str()))
            }
            Filter::AnyContainsIgnoreCase { columns, value } => columns
                .iter()
                .any(|column| folded(*column).is_some_and(|text| text.contains(value.as_str()))),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::models::Category;

    fn category(name: &str, description: Option<&str>) -> Category {
        Category {
            id: 1,
            name: name.to_string(),
            description: description.map(str::to_string),
            is_active: true,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    #[test]
    fn test_flag() {
        let (sql, binds) = Filter::flag("is_active", true).to_sql().unwrap();
        assert_eq!(sql, "is_active = ?");
        assert_eq!(binds, vec![Bind::Bool(true)]);
    }

    #[test]
    fn test_references() {
        let (sql, binds) = Filter::references("category_id", 4).to_sql().unwrap();
        assert_eq!(sql, "category_id = ?");
        assert_eq!(binds, vec![Bind::Int(4)]);
    }

    #[test]
    fn test_text_filters_are_not_rendered() {
        assert!(Filter::equals_ignore_case("name", "x").to_sql().is_none());
        assert!(Filter::contains_ignore_case("name", "x").to_sql().is_none());
        assert!(Filter::any_contains_ignore_case(&["name"], "x").to_sql().is_none());
    }

    #[test]
    fn test_equals_ignore_case() {
        let row = category("Science", None);
        assert!(Filter::equals_ignore_case("name", "SCIENCE").matches(&row));
        assert!(!Filter::equals_ignore_case("name", "Sci").matches(&row));
    }

    #[test]
    fn test_non_ascii_case_folding() {
        let row = category("Économie", Some("Ökonomie und Politik"));
        assert!(Filter::equals_ignore_case("name", "éCONOMIE").matches(&row));
        assert!(Filter::contains_ignore_case("name", "ÉCON").matches(&row));
        assert!(Filter::any_contains_ignore_case(&["name", "description"], "ökonomie").matches(&row));
    }

    #[test]
    fn test_contains_keeps_wildcards_literal() {
        let row = category("100% Cotton", None);
        assert!(Filter::contains_ignore_case("name", "100%").matches(&row));
        assert!(!Filter::contains_ignore_case("name", "1_0").matches(&row));
    }

    #[test]
    fn test_null_column_never_matches() {
        let row = category("Poetry", None);
        assert!(!Filter::contains_ignore_case("description", "").matches(&row));
        assert!(Filter::any_contains_ignore_case(&["name", "description"], "poe").matches(&row));
    }

    #[test]
    fn test_sql_filters_always_match_in_memory() {
        let row = category("Poetry", None);
        assert!(Filter::flag("is_active", false).matches(&row));
        assert!(Filter::references("category_id", 9).matches(&row));
    }
}
