use unicode_segmentation::UnicodeSegmentation;

pub(crate) fn grapheme_count(text: &str) -> usize {
    UnicodeSegmentation::graphemes(text, true).count()
}

/// Byte index where grapheme `grapheme_index` starts, or `text.len()`.
pub(crate) fn grapheme_byte_index(text: &str, grapheme_index: usize) -> usize {
    UnicodeSegmentation::grapheme_indices(text, true)
        .nth(grapheme_index)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_clusters_not_chars() {
        assert_eq!(grapheme_count("👩🏽‍🔧"), 1);
        assert_eq!(grapheme_count("e\u{301}x"), 2);
        assert_eq!(grapheme_count(""), 0);
    }

    #[test]
    fn byte_index_lands_on_cluster_boundaries() {
        let text = "a👩🏽‍🔧b";
        assert_eq!(grapheme_byte_index(text, 0), 0);
        assert_eq!(grapheme_byte_index(text, 1), 1);
        assert_eq!(grapheme_byte_index(text, 2), text.len() - 1);
        assert_eq!(grapheme_byte_index(text, 9), text.len());
    }
}
