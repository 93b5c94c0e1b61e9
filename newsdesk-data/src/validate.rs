//! Pure checks applied to request input before any data access.

use std::str::FromStr;

use newsdesk_core::AppError;

/// Parse a path identifier.
///
/// Only non-empty ASCII digit strings are identifiers. A digit string too
/// large for the store's 64-bit integer is [`AppError::OutOfRange`];
/// anything else is [`AppError::InvalidInput`].
pub fn parse_id(token: &str) -> Result<i64, AppError> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::InvalidInput);
    }
    token.parse::<i64>().map_err(|_| AppError::OutOfRange)
}

/// Treat `?key=` the same as an absent key.
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Allow-listed sort keys for the article collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortColumn {
    Author,
    Title,
    ArticleId,
    Topic,
    #[default]
    CreatedAt,
    Votes,
    CommentCount,
}

impl SortColumn {
    pub const ALL: [SortColumn; 7] = [
        SortColumn::Author,
        SortColumn::Title,
        SortColumn::ArticleId,
        SortColumn::Topic,
        SortColumn::CreatedAt,
        SortColumn::Votes,
        SortColumn::CommentCount,
    ];

    /// The query-string spelling.
    pub fn key(self) -> &'static str {
        match self {
            SortColumn::Author => "author",
            SortColumn::Title => "title",
            SortColumn::ArticleId => "article_id",
            SortColumn::Topic => "topic",
            SortColumn::CreatedAt => "created_at",
            SortColumn::Votes => "votes",
            SortColumn::CommentCount => "comment_count",
        }
    }

    /// The SQL expression the key sorts by.
    pub fn expr(self) -> &'static str {
        match self {
            SortColumn::Author => "articles.author",
            SortColumn::Title => "articles.title",
            SortColumn::ArticleId => "articles.article_id",
            SortColumn::Topic => "articles.topic",
            SortColumn::CreatedAt => "articles.created_at",
            SortColumn::Votes => "articles.votes",
            SortColumn::CommentCount => "comment_count",
        }
    }

    /// Resolve an optional `sort_by` value, defaulting to `created_at`.
    pub fn resolve(raw: Option<&str>) -> Result<Self, AppError> {
        non_empty(raw).map_or(Ok(SortColumn::default()), str::parse)
    }
}

impl FromStr for SortColumn {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortColumn::ALL
            .into_iter()
            .find(|col| col.key() == s)
            .ok_or(AppError::InvalidSortColumn)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn is_ascending(self) -> bool {
        matches!(self, SortOrder::Asc)
    }

    /// Resolve an optional `order` value, defaulting to descending.
    pub fn resolve(raw: Option<&str>) -> Result<Self, AppError> {
        non_empty(raw).map_or(Ok(SortOrder::default()), str::parse)
    }
}

impl FromStr for SortOrder {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("asc") {
            Ok(SortOrder::Asc)
        } else if s.eq_ignore_ascii_case("desc") {
            Ok(SortOrder::Desc)
        } else {
            Err(AppError::InvalidSortOrder)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_digit_strings() {
        assert_eq!(parse_id("1"), Ok(1));
        assert_eq!(parse_id("0042"), Ok(42));
        assert_eq!(parse_id("0"), Ok(0));
    }

    #[test]
    fn non_numeric_ids_are_invalid_input() {
        for token in ["", "abc", "1a", "-1", "+1", "1.5", " 1", "1e3"] {
            assert_eq!(parse_id(token), Err(AppError::InvalidInput), "token {token:?}");
        }
    }

    #[test]
    fn oversized_ids_are_out_of_range() {
        assert_eq!(parse_id("9223372036854775807"), Ok(i64::MAX));
        assert_eq!(parse_id("9223372036854775808"), Err(AppError::OutOfRange));
        assert_eq!(parse_id("99999999999999999999999"), Err(AppError::OutOfRange));
    }

    #[test]
    fn sort_column_allow_list() {
        for col in SortColumn::ALL {
            assert_eq!(SortColumn::resolve(Some(col.key())), Ok(col));
        }
        assert_eq!(SortColumn::resolve(None), Ok(SortColumn::CreatedAt));
        assert_eq!(SortColumn::resolve(Some("")), Ok(SortColumn::CreatedAt));
    }

    #[test]
    fn sort_column_rejects_everything_else() {
        for raw in ["body", "Votes", "votes; DROP TABLE articles", "articles.votes", "1"] {
            assert_eq!(
                SortColumn::resolve(Some(raw)),
                Err(AppError::InvalidSortColumn),
                "sort_by {raw:?}"
            );
        }
    }

    #[test]
    fn order_is_case_insensitive_with_desc_default() {
        assert_eq!(SortOrder::resolve(None), Ok(SortOrder::Desc));
        assert_eq!(SortOrder::resolve(Some("ASC")), Ok(SortOrder::Asc));
        assert_eq!(SortOrder::resolve(Some("Desc")), Ok(SortOrder::Desc));
        assert_eq!(SortOrder::resolve(Some("sideways")), Err(AppError::InvalidSortOrder));
    }
}
