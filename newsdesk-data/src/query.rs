/// A fluent builder for parameterized SELECT queries.
///
/// Identifiers (tables, columns, join keys, sort expressions) are validated
/// against a conservative pattern; values only ever reach the statement as
/// `?` placeholders with a matching entry in the returned parameter list.
///
/// # Example
///
/// ```ignore
/// let (sql, params) = QueryBuilder::new("articles")
///     .column("articles.article_id")
///     .count_as("comments.comment_id", "comment_count")
///     .left_join("comments", "comments.article_id", "articles.article_id")
///     .where_eq_opt("articles.topic", topic)
///     .group_by("articles.article_id")
///     .order_by("comment_count", false)
///     .build_select()?;
/// ```
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    table: String,
    projection: Vec<Projection>,
    joins: Vec<Join>,
    conditions: Vec<Condition>,
    group_by: Vec<String>,
    order: Vec<(String, bool)>,
}

/// A value bound to a `?` placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlParam {
    Text(String),
    Int(i64),
}

impl std::fmt::Display for SqlParam {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SqlParam::Text(s) => f.write_str(s),
            SqlParam::Int(i) => write!(f, "{i}"),
        }
    }
}

impl From<&str> for SqlParam {
    fn from(value: &str) -> Self {
        SqlParam::Text(value.to_string())
    }
}

impl From<String> for SqlParam {
    fn from(value: String) -> Self {
        SqlParam::Text(value)
    }
}

impl From<i64> for SqlParam {
    fn from(value: i64) -> Self {
        SqlParam::Int(value)
    }
}

#[derive(Debug, Clone)]
enum Projection {
    Column(String),
    Count { column: String, alias: String },
}

#[derive(Debug, Clone)]
struct Join {
    table: String,
    left: String,
    right: String,
}

#[derive(Debug, Clone)]
enum Condition {
    Eq(String, SqlParam),
}

impl QueryBuilder {
    pub fn new(table: &str) -> Self {
        Self {
            table: table.to_string(),
            projection: Vec::new(),
            joins: Vec::new(),
            conditions: Vec::new(),
            group_by: Vec::new(),
            order: Vec::new(),
        }
    }

    pub fn column(mut self, column: &str) -> Self {
        self.projection.push(Projection::Column(column.to_string()));
        self
    }

    pub fn columns(self, columns: &[&str]) -> Self {
        columns.iter().fold(self, |q, col| q.column(col))
    }

    /// Project `COUNT(column) AS alias`.
    pub fn count_as(mut self, column: &str, alias: &str) -> Self {
        self.projection.push(Projection::Count {
            column: column.to_string(),
            alias: alias.to_string(),
        });
        self
    }

    /// `LEFT JOIN table ON left = right`.
    pub fn left_join(mut self, table: &str, left: &str, right: &str) -> Self {
        self.joins.push(Join {
            table: table.to_string(),
            left: left.to_string(),
            right: right.to_string(),
        });
        self
    }

    pub fn where_eq(mut self, column: &str, value: impl Into<SqlParam>) -> Self {
        self.conditions
            .push(Condition::Eq(column.to_string(), value.into()));
        self
    }

    /// Add an equality predicate only when a value is supplied.
    pub fn where_eq_opt<V: Into<SqlParam>>(self, column: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.where_eq(column, v),
            None => self,
        }
    }

    pub fn group_by(mut self, column: &str) -> Self {
        self.group_by.push(column.to_string());
        self
    }

    pub fn order_by(mut self, column: &str, ascending: bool) -> Self {
        self.order.push((column.to_string(), ascending));
        self
    }

    /// Build the SELECT, returning `(sql, bind_values)`.
    pub fn build_select(&self) -> Result<(String, Vec<SqlParam>), QueryError> {
        let table = checked(&self.table, "table")?;
        let projection = self.projection_list()?;

        let mut sql = format!("SELECT {projection} FROM {table}");
        let mut params = Vec::new();
        self.append_joins(&mut sql)?;
        self.append_where(&mut sql, &mut params)?;
        self.append_group_by(&mut sql)?;
        self.append_order(&mut sql)?;
        Ok((sql, params))
    }

    fn projection_list(&self) -> Result<String, QueryError> {
        if self.projection.is_empty() {
            return Ok("*".to_string());
        }
        let mut out = Vec::with_capacity(self.projection.len());
        for item in &self.projection {
            match item {
                Projection::Column(col) => out.push(checked(col, "column")?.to_string()),
                Projection::Count { column, alias } => {
                    let column = checked(column, "column")?;
                    let alias = checked(alias, "alias")?;
                    out.push(format!("COUNT({column}) AS {alias}"));
                }
            }
        }
        Ok(out.join(", "))
    }

    fn append_joins(&self, sql: &mut String) -> Result<(), QueryError> {
        for join in &self.joins {
            let table = checked(&join.table, "table")?;
            let left = checked(&join.left, "column")?;
            let right = checked(&join.right, "column")?;
            sql.push_str(&format!(" LEFT JOIN {table} ON {left} = {right}"));
        }
        Ok(())
    }

    fn append_where(&self, sql: &mut String, params: &mut Vec<SqlParam>) -> Result<(), QueryError> {
        if self.conditions.is_empty() {
            return Ok(());
        }
        let mut clauses = Vec::with_capacity(self.conditions.len());
        for cond in &self.conditions {
            match cond {
                Condition::Eq(col, val) => {
                    let col = checked(col, "column")?;
                    clauses.push(format!("{col} = ?"));
                    params.push(val.clone());
                }
            }
        }
        sql.push_str(" WHERE ");
        sql.push_str(&clauses.join(" AND "));
        Ok(())
    }

    fn append_group_by(&self, sql: &mut String) -> Result<(), QueryError> {
        if self.group_by.is_empty() {
            return Ok(());
        }
        let mut cols = Vec::with_capacity(self.group_by.len());
        for col in &self.group_by {
            cols.push(checked(col, "column")?);
        }
        sql.push_str(" GROUP BY ");
        sql.push_str(&cols.join(", "));
        Ok(())
    }

    fn append_order(&self, sql: &mut String) -> Result<(), QueryError> {
        if self.order.is_empty() {
            return Ok(());
        }
        let mut clauses = Vec::with_capacity(self.order.len());
        for (col, asc) in &self.order {
            let col = checked(col, "column")?;
            if *asc {
                clauses.push(format!("{col} ASC"));
            } else {
                clauses.push(format!("{col} DESC"));
            }
        }
        sql.push_str(" ORDER BY ");
        sql.push_str(&clauses.join(", "));
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    InvalidIdentifier { kind: &'static str, ident: String },
}

impl std::fmt::Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryError::InvalidIdentifier { kind, ident } => {
                write!(f, "Invalid {kind} identifier: {ident}")
            }
        }
    }
}

impl std::error::Error for QueryError {}

fn checked<'a>(ident: &'a str, kind: &'static str) -> Result<&'a str, QueryError> {
    if is_valid_identifier(ident) {
        Ok(ident)
    } else {
        Err(QueryError::InvalidIdentifier {
            kind,
            ident: ident.to_string(),
        })
    }
}

fn is_valid_identifier(ident: &str) -> bool {
    !ident.is_empty() && ident.split('.').all(is_valid_segment)
}

fn is_valid_segment(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
