//! BMS chart file parsing.

use encoding_rs::SHIFT_JIS;

/// One parsed local chart.
///
/// `identity` is the lowercase hex MD5 of the raw file bytes. It is the
/// join key against difficulty-table entries and the beatoraja song
/// database; the title is never used for matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartRecord {
    pub title: String,
    pub identity: String,
}

impl ChartRecord {
    /// Parse chart bytes: decode Shift-JIS, pick up the `#TITLE` header,
    /// hash the raw bytes for the identity.
    pub fn parse(bytes: &[u8]) -> Self {
        let (text, _, _) = SHIFT_JIS.decode(bytes);
        let title = extract_title(&text);
        let identity = format!("{:x}", md5::compute(bytes));
        Self { title, identity }
    }
}

/// Find the `#TITLE` declaration. The tag match is ASCII-case-insensitive
/// and later declarations overwrite earlier ones; a chart with no title
/// yields an empty string.
fn extract_title(text: &str) -> String {
    let mut title = String::new();
    for raw_line in text.lines() {
        let line = raw_line.trim_start().trim_end_matches(['\r', '\n']);
        let Some(rest) = line.strip_prefix('#') else {
            continue;
        };
        // get() rather than slicing: the decoded text may put a
        // multibyte character right after the '#'
        let Some(tag) = rest.get(..5) else {
            continue;
        };
        if !tag.eq_ignore_ascii_case("title") {
            continue;
        }
        let mut parts = line.splitn(2, char::is_whitespace);
        let _tag = parts.next();
        if let Some(value) = parts.next() {
            let value = value.trim_start();
            // A whitespace-only value is no value; it must not clobber
            // a title from an earlier line
            if !value.is_empty() {
                title = value.to_string();
            }
        }
    }
    title
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_title() {
        let chart = ChartRecord::parse(b"#PLAYER 1\n#TITLE Wonder [ANOTHER]\n#BPM 150\n");
        assert_eq!(chart.title, "Wonder [ANOTHER]");
    }

    #[test]
    fn test_parse_title_case_insensitive_tag() {
        let chart = ChartRecord::parse(b"#title lowercase song\n");
        assert_eq!(chart.title, "lowercase song");
    }

    #[test]
    fn test_parse_missing_title() {
        let chart = ChartRecord::parse(b"#PLAYER 1\n#BPM 150\n");
        assert_eq!(chart.title, "");
    }

    #[test]
    fn test_parse_last_title_wins() {
        let chart = ChartRecord::parse(b"#TITLE first\n#TITLE second\n");
        assert_eq!(chart.title, "second");
    }

    #[test]
    fn test_parse_subtitle_not_matched() {
        let chart = ChartRecord::parse(b"#SUBTITLE [ANOTHER]\n");
        assert_eq!(chart.title, "");
    }

    #[test]
    fn test_parse_blank_title_does_not_clobber_earlier_one() {
        let chart = ChartRecord::parse(b"#TITLE real\n#TITLE  \n");
        assert_eq!(chart.title, "real");
    }

    #[test]
    fn test_parse_bare_title_tag() {
        // "#TITLE" with no value keeps the empty title
        let chart = ChartRecord::parse(b"#TITLE\n");
        assert_eq!(chart.title, "");
    }

    #[test]
    fn test_parse_shift_jis_title() {
        // "曲" (U+66F2) in Shift-JIS is 0x8B 0xC8
        let mut bytes = b"#TITLE ".to_vec();
        bytes.extend_from_slice(&[0x8B, 0xC8]);
        bytes.push(b'\n');
        let chart = ChartRecord::parse(&bytes);
        assert_eq!(chart.title, "曲");
    }

    #[test]
    fn test_identity_is_md5_of_bytes() {
        let chart = ChartRecord::parse(b"#TITLE x\n");
        assert_eq!(chart.identity.len(), 32);
        assert_eq!(chart.identity, format!("{:x}", md5::compute(b"#TITLE x\n")));
    }
}
