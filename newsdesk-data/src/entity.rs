/// A table the data layer can address by primary key.
///
/// # Example
///
/// ```ignore
/// impl Entity for Comment {
///     fn table_name() -> &'static str { "comments" }
///     fn id_column() -> &'static str { "comment_id" }
///     fn columns() -> &'static [&'static str] { &["comment_id", "body", "votes"] }
///     fn missing_message() -> &'static str { "Comment does not exist" }
/// }
/// ```
pub trait Entity: Send + Sync + Unpin + 'static {
    fn table_name() -> &'static str;
    fn id_column() -> &'static str;
    fn columns() -> &'static [&'static str];

    /// Message answered with 404 when a lookup by id matches nothing.
    fn missing_message() -> &'static str;
}
