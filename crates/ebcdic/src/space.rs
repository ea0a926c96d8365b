//! Word-separator classification.

/// Reports whether `ch` separates words.
///
/// The set is frozen: ASCII `\t \n \x0B \x0C \r` and space, U+0085, U+00A0,
/// U+1680, U+2000 through U+200A, U+2028, U+2029, U+202F, U+205F and U+3000.
/// This is the Unicode `White_Space` property, spelled out so that behavior
/// does not move with the host's Unicode tables.
#[must_use]
pub const fn is_space(ch: char) -> bool {
    if (ch as u32) <= 0xFF {
        return matches!(
            ch,
            ' ' | '\t' | '\n' | '\u{000B}' | '\u{000C}' | '\r' | '\u{0085}' | '\u{00A0}'
        );
    }
    matches!(
        ch,
        '\u{2000}'..='\u{200A}'
            | '\u{1680}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
    )
}
