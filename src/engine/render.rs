//! Two-pass rendering: section expansion, then placeholder substitution

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde_json::Value;

use super::resolve::{resolve_path, stringify};

/// `{{#name}}`
static SECTION_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{#([A-Za-z0-9_]+)\}\}").expect("valid section regex"));

/// `{{path.to.value}}`
static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\{([A-Za-z0-9_]+(?:\.[A-Za-z0-9_]+)*)\}\}").expect("valid placeholder regex")
});

/// `{{.}}` or a bare `{{key}}` inside a section body
static ITEM_PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{(\.|[A-Za-z0-9_]+)\}\}").expect("valid item regex"));

/// A piece of output produced by section expansion.
///
/// `Pending` text still goes through placeholder substitution. `Final` text
/// came from data values and is emitted untouched.
#[derive(Debug, PartialEq)]
enum Fragment {
    Pending(String),
    Final(String),
}

#[derive(Debug, Default)]
struct Fragments(Vec<Fragment>);

impl Fragments {
    /// Appends template text, joining it to a preceding pending run so a
    /// marker split by a dropped section is seen whole by the second pass.
    fn push_pending(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        match self.0.last_mut() {
            Some(Fragment::Pending(last)) => last.push_str(text),
            _ => self.0.push(Fragment::Pending(text.to_string())),
        }
    }

    fn push_final(&mut self, text: String) {
        if !text.is_empty() {
            self.0.push(Fragment::Final(text));
        }
    }
}

/// Renders `template` against `data`.
///
/// Sections are expanded first so their bodies see the per-element scope;
/// the remaining placeholders are then resolved against the root of `data`.
/// Rendering never fails: unresolved placeholders are kept verbatim and
/// sections over anything but a sequence disappear.
///
/// # Examples
/// ```
/// use demogen::engine::render;
/// use serde_json::json;
///
/// let data = json!({"name": "Resort", "badges": ["Popular", "New"]});
/// let out = render("{{name}}: {{#badges}}[{{.}}]{{/badges}} {{missing}}", &data);
/// assert_eq!(out, "Resort: [Popular][New] {{missing}}");
/// ```
pub fn render(template: &str, data: &Value) -> String {
    let fragments = expand_sections(template, data);

    let mut output = String::with_capacity(template.len());
    for fragment in fragments.0 {
        match fragment {
            Fragment::Pending(text) => output.push_str(&substitute(&text, data)),
            Fragment::Final(text) => output.push_str(&text),
        }
    }
    output
}

/// First pass. Pairs each `{{#name}}` with the first following `{{/name}}`.
/// A start marker with no end marker stays as literal text.
fn expand_sections(template: &str, data: &Value) -> Fragments {
    let mut fragments = Fragments::default();
    let mut cursor = 0;
    let mut search_from = 0;

    while let Some(caps) = SECTION_START.captures_at(template, search_from) {
        let (Some(start), Some(name)) = (caps.get(0), caps.get(1)) else {
            break;
        };
        let end_marker = format!("{{{{/{}}}}}", name.as_str());
        let body_start = start.end();

        match template[body_start..].find(&end_marker) {
            Some(offset) => {
                let body_end = body_start + offset;
                fragments.push_pending(&template[cursor..start.start()]);
                expand_section(
                    name.as_str(),
                    &template[body_start..body_end],
                    data,
                    &mut fragments,
                );
                cursor = body_end + end_marker.len();
                search_from = cursor;
            }
            None => {
                tracing::trace!(section = name.as_str(), "Unmatched section start marker");
                search_from = body_start;
            }
        }
    }

    fragments.push_pending(&template[cursor..]);
    fragments
}

fn expand_section(name: &str, body: &str, data: &Value, fragments: &mut Fragments) {
    let Some(Value::Array(items)) = resolve_path(data, name) else {
        tracing::trace!(section = name, "Section target is not a sequence, dropping");
        return;
    };

    for item in items {
        expand_item(body, item, fragments);
    }
}

/// Renders one copy of a section body with `item` as the scope for `{{.}}`
/// and, when `item` is a mapping, for bare single-segment placeholders.
fn expand_item(body: &str, item: &Value, fragments: &mut Fragments) {
    let mut cursor = 0;

    for caps in ITEM_PLACEHOLDER.captures_iter(body) {
        let (Some(marker), Some(key)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        fragments.push_pending(&body[cursor..marker.start()]);
        cursor = marker.end();

        match (key.as_str(), item) {
            (".", _) => fragments.push_final(stringify(item)),
            // Misses inside a mapping element stay literal; the outer
            // context is never consulted for element-scoped keys.
            (key, Value::Object(map)) => fragments.push_final(
                map.get(key)
                    .map(stringify)
                    .unwrap_or_else(|| marker.as_str().to_string()),
            ),
            // Primitive elements have no properties; the placeholder is
            // resolved against the root in the second pass.
            _ => fragments.push_pending(marker.as_str()),
        }
    }

    fragments.push_pending(&body[cursor..]);
}

/// Second pass. Replaces every dotted-path placeholder that resolves against
/// the root of `data`; unresolved placeholders are kept verbatim.
fn substitute(text: &str, data: &Value) -> String {
    PLACEHOLDER
        .replace_all(text, |caps: &Captures| match resolve_path(data, &caps[1]) {
            Some(value) => stringify(value),
            None => caps[0].to_string(),
        })
        .into_owned()
}
