use serde_json::Value;

#[derive(Debug)]
pub enum PathToken {
    Field(String),
    Index(usize),
    Len,
}

/// Split `articles[0].author` / `comments.len()` into path tokens.
pub fn tokenize_path(path: &str) -> Vec<PathToken> {
    let mut tokens = Vec::new();
    for segment in path.split('.') {
        if segment.is_empty() {
            continue;
        }
        if segment == "len()" {
            tokens.push(PathToken::Len);
            continue;
        }
        match segment.find('[') {
            Some(bracket) => {
                let field = &segment[..bracket];
                if !field.is_empty() {
                    tokens.push(PathToken::Field(field.to_string()));
                }
                let mut rest = &segment[bracket..];
                while let Some(start) = rest.find('[') {
                    let end = rest.find(']').expect("unclosed bracket in JSON path");
                    let index = rest[start + 1..end]
                        .parse()
                        .expect("non-numeric array index in JSON path");
                    tokens.push(PathToken::Index(index));
                    rest = &rest[end + 1..];
                }
            }
            None => tokens.push(PathToken::Field(segment.to_string())),
        }
    }
    tokens
}

/// Resolve a path against a JSON document. Missing steps yield `Null`.
pub fn resolve_path(root: &Value, path: &str) -> Value {
    let mut current = root.clone();
    for token in tokenize_path(path) {
        current = match token {
            PathToken::Field(name) => current.get(&name).cloned().unwrap_or(Value::Null),
            PathToken::Index(idx) => current.get(idx).cloned().unwrap_or(Value::Null),
            PathToken::Len => match &current {
                Value::Array(items) => Value::from(items.len()),
                Value::Object(fields) => Value::from(fields.len()),
                other => panic!("len() applied to non-collection in \"{path}\": {other}"),
            },
        };
    }
    current
}
