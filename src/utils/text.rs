//! Small string helpers shared by the generators, config summary and publisher.

/// Capitalize the first letter of every alphabetic run and lowercase the rest,
/// so `"blush pink"` becomes `"Blush Pink"` and `"rose & peony"` becomes `"Rose & Peony"`.
pub fn title_case(src: &str) -> String {
    let mut out = String::with_capacity(src.len());
    let mut prev_alpha = false;
    for c in src.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

/// First `max` characters of `src`. Counts chars, not bytes.
pub fn truncate_chars(src: &str, max: usize) -> String {
    match src.char_indices().nth(max) {
        Some((idx, _)) => src[..idx].to_string(),
        None => src.to_string(),
    }
}

/// Render a secret for logs: `MISSING`, `SET`, or `abcd…wxyz` when long enough.
pub fn mask_secret(value: Option<&str>) -> String {
    match value {
        None | Some("") => "MISSING".to_string(),
        Some(v) if v.chars().count() > 10 => {
            let head: String = v.chars().take(4).collect();
            let tail: String = v.chars().rev().take(4).collect::<Vec<_>>().into_iter().rev().collect();
            format!("{}…{}", head, tail)
        }
        Some(_) => "SET".to_string(),
    }
}

/// Strip a surrounding Markdown code fence (```json ... ```), if present.
pub fn strip_code_fence(src: &str) -> &str {
    let trimmed = src.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(body) = rest.strip_suffix("```") else {
        return trimmed;
    };
    // Drop the info string (e.g. `json`) on the opening line.
    match body.split_once('\n') {
        Some((_lang, inner)) => inner.trim(),
        None => body.trim(),
    }
}
