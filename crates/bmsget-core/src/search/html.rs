//! Minimal HTML slicing for the ranking site's tables.
//!
//! The pages we read are plain server-rendered tables, so a handful of
//! case-insensitive substring searches go further than a full parser.

fn ascii_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// Content between the first tag matching `open_pat` and `close_pat`,
/// case-insensitive on the patterns. `open_pat` may stop mid-tag
/// (e.g. `<table class="ranking"`); the slice starts after the tag's `>`.
pub fn slice_between_ci<'a>(s: &'a str, open_pat: &str, close_pat: &str) -> Option<&'a str> {
    let lc = ascii_lower(s);
    let open = ascii_lower(open_pat);
    let close = ascii_lower(close_pat);
    let o = lc.find(&open)?;
    let after = s[o..].find('>')? + o + 1;
    let cr = lc[after..].find(&close)?;
    Some(&s[after..after + cr])
}

/// Byte range of the next `<o ...>...</o>` block at or after `from`.
pub fn next_tag_block_ci(s: &str, open_tag: &str, close_tag: &str, from: usize) -> Option<(usize, usize)> {
    let lc = ascii_lower(s);
    let open = ascii_lower(open_tag);
    let close = ascii_lower(close_tag);
    let start = lc.get(from..)?.find(&open)? + from;
    let open_end = s[start..].find('>')? + start + 1;
    let end_rel = lc[open_end..].find(&close)?;
    Some((start, open_end + end_rel + close_tag.len()))
}

/// Drop tags, decode the common entities, collapse whitespace.
pub fn text_content(s: &str) -> String {
    let mut stripped = String::with_capacity(s.len());
    let mut in_tag = false;
    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => stripped.push(ch),
            _ => {}
        }
    }
    let decoded = stripped
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&");

    let mut out = String::with_capacity(decoded.len());
    let mut prev_space = false;
    for ch in decoded.chars() {
        if ch.is_whitespace() {
            if !prev_space {
                out.push(' ');
                prev_space = true;
            }
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
    out.trim().to_string()
}

/// `href` attribute value of the first `<a>` inside `s`.
pub fn first_anchor_href(s: &str) -> Option<String> {
    let lc = ascii_lower(s);
    let a = lc.find("<a")?;
    let tag_end = s[a..].find('>')? + a;
    let tag = &s[a..tag_end];
    let hp = ascii_lower(tag).find("href=")?;
    let val = &tag[hp + "href=".len()..];
    let mut chars = val.chars();
    match chars.next() {
        Some(quote @ ('"' | '\'')) => {
            let rest = &val[1..];
            let end = rest.find(quote)?;
            Some(rest[..end].to_string())
        }
        Some(_) => {
            let end = val
                .find(|c: char| c.is_whitespace() || c == '>')
                .unwrap_or(val.len());
            Some(val[..end].to_string())
        }
        None => None,
    }
}

/// Resolve `href` against `base` the way a browser would, for the two
/// relative forms the site actually uses.
pub fn resolve_url(base: &str, href: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        return href.to_string();
    }
    if let Some(rest) = href.strip_prefix('/') {
        // Authority-relative: keep scheme://host
        if let Some(scheme_end) = base.find("://") {
            let host_end = base[scheme_end + 3..]
                .find('/')
                .map(|i| scheme_end + 3 + i)
                .unwrap_or(base.len());
            return format!("{}/{}", &base[..host_end], rest);
        }
    }
    // Path-relative: replace the last path segment of base
    match base.rfind('/') {
        Some(i) if i > base.find("://").map(|s| s + 2).unwrap_or(0) => {
            format!("{}/{}", &base[..i], href)
        }
        _ => format!("{}/{}", base, href),
    }
}
