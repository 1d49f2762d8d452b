//! Form bodies arrive flat (`listing[title]=Cabin`); validation works on a
//! nested document, so bracket keys are folded into JSON objects here.
use serde_json::{Map, Value};

/// Form key carrying an overriding HTTP method.
pub const METHOD_OVERRIDE_KEY: &str = "_method";

/// Split `a[b][c]` into `["a", "b", "c"]`. Malformed brackets keep the raw key.
fn key_path(key: &str) -> Vec<&str> {
    let Some(open) = key.find('[') else {
        return vec![key];
    };

    let mut path = vec![&key[..open]];
    let mut rest = &key[open..];
    while let Some(stripped) = rest.strip_prefix('[') {
        match stripped.find(']') {
            Some(close) => {
                path.push(&stripped[..close]);
                rest = &stripped[close + 1..];
            }
            None => return vec![key],
        }
    }

    if !rest.is_empty() || path.iter().any(|segment| segment.is_empty()) {
        return vec![key];
    }
    path
}

fn insert(target: &mut Map<String, Value>, path: &[&str], value: String) {
    match path {
        [] => {}
        [last] => {
            target.insert((*last).to_string(), Value::String(value));
        }
        [head, tail @ ..] => {
            let entry = target
                .entry((*head).to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            // A scalar already sitting at this key is replaced by the nested form
            if !entry.is_object() {
                *entry = Value::Object(Map::new());
            }
            if let Value::Object(inner) = entry {
                insert(inner, tail, value);
            }
        }
    }
}

/// Build the nested document for a decoded form body. Later pairs win.
pub fn nest(pairs: Vec<(String, String)>) -> Value {
    let mut root = Map::new();
    for (key, value) in pairs {
        let path = key_path(&key);
        insert(&mut root, &path, value);
    }
    Value::Object(root)
}

/// The overriding method named in the document, upper-cased.
pub fn method_override(document: &Value) -> Option<String> {
    document
        .get(METHOD_OVERRIDE_KEY)
        .and_then(Value::as_str)
        .map(|method| method.trim().to_ascii_uppercase())
        .filter(|method| !method.is_empty())
}
