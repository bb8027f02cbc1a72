// {{{PLACEHOLDER}}} substitution for the embedded templates

use std::collections::HashMap;

const OPEN: &str = "{{{";
const CLOSE: &str = "}}}";

/// Replace every `{{{KEY}}}` in `template` in a single pass.
///
/// Substituted values are never rescanned, so a review that happens to
/// contain `{{{...}}}` cannot pull in another slot. Unknown keys are left
/// in place.
pub fn fill(template: &str, values: &HashMap<&str, String>) -> String {
    let mut out = String::with_capacity(template.len() * 2);
    let mut rest = template;

    while let Some(start) = rest.find(OPEN) {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + OPEN.len()..];

        match after_open.find(CLOSE) {
            Some(end) => {
                let key = &after_open[..end];
                match values.get(key) {
                    Some(value) => out.push_str(value),
                    None => {
                        out.push_str(OPEN);
                        out.push_str(key);
                        out.push_str(CLOSE);
                    }
                }
                rest = &after_open[end + CLOSE.len()..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}
