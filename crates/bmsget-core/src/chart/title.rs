//! Canonical title inference.

/// Longest common leading substring, by character, across all titles.
///
/// Chart variants of one song usually differ only in a trailing
/// difficulty tag ("Song [ANOTHER]", "Song [HYPER]"), so the shared
/// prefix is a workable canonical title. This is a plain prefix match,
/// not word-aware: the result can end mid-word or keep the opening
/// bracket of the tag ("Song ["). Trimming that residue is up to the
/// caller. An empty input yields an empty string, meaning no canonical
/// title could be inferred.
pub fn common_title_prefix<S: AsRef<str>>(titles: &[S]) -> String {
    let Some(first) = titles.first() else {
        return String::new();
    };
    let mut prefix: Vec<char> = first.as_ref().chars().collect();

    for title in &titles[1..] {
        let mut matched = 0;
        for (a, b) in prefix.iter().zip(title.as_ref().chars()) {
            if *a != b {
                break;
            }
            matched += 1;
        }
        prefix.truncate(matched);
        if prefix.is_empty() {
            break;
        }
    }
    prefix.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_titles_returned_unchanged() {
        let titles = ["Same Song", "Same Song", "Same Song"];
        assert_eq!(common_title_prefix(&titles), "Same Song");
    }

    #[test]
    fn test_single_title_is_its_own_prefix() {
        assert_eq!(common_title_prefix(&["Only One"]), "Only One");
    }

    #[test]
    fn test_empty_input_yields_empty_string() {
        let titles: [&str; 0] = [];
        assert_eq!(common_title_prefix(&titles), "");
    }

    #[test]
    fn test_shared_leading_run() {
        assert_eq!(common_title_prefix(&["Foo [A]", "Foo [B]"]), "Foo [");
    }

    #[test]
    fn test_no_shared_prefix() {
        assert_eq!(common_title_prefix(&["Alpha", "Beta"]), "");
    }

    #[test]
    fn test_prefix_no_longer_than_shortest_input() {
        let titles = ["Wonder", "Wonder [ANOTHER]"];
        assert_eq!(common_title_prefix(&titles), "Wonder");
    }

    #[test]
    fn test_multibyte_titles() {
        assert_eq!(common_title_prefix(&["冥 [A]", "冥 [B]"]), "冥 [");
    }
}
