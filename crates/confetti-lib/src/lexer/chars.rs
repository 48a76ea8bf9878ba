//! Character classes of the language.

const LINE_TERMINATORS: [char; 7] = [
    '\u{000A}', '\u{000B}', '\u{000C}', '\u{000D}', '\u{0085}', '\u{2028}', '\u{2029}',
];

const RESERVED: [char; 5] = ['"', '#', ';', '{', '}'];

pub fn is_line_terminator(c: char) -> bool {
    LINE_TERMINATORS.contains(&c)
}

/// Any scalar with the Unicode `White_Space` property that is not a line terminator.
pub fn is_whitespace(c: char) -> bool {
    !is_line_terminator(c) && c.is_whitespace()
}

pub fn is_control(cp: u32) -> bool {
    let in_range = cp <= 0x1F || (0x7F..=0x9F).contains(&cp);
    in_range
        && char::from_u32(cp).is_some_and(|c| !is_line_terminator(c) && !c.is_whitespace())
}

pub fn is_surrogate(cp: u32) -> bool {
    (0xD800..=0xDFFF).contains(&cp)
}

/// Planes 4 through 14 have no assigned characters.
pub fn is_unassigned(cp: u32) -> bool {
    (0x40000..=0xEFFFF).contains(&cp)
}

pub fn is_forbidden_codepoint(cp: u32) -> bool {
    is_control(cp) || is_surrogate(cp) || cp > 0x10FFFF || is_unassigned(cp)
}

pub fn is_forbidden(c: char) -> bool {
    is_forbidden_codepoint(c as u32)
}

pub fn is_reserved(c: char, expression_arguments: bool) -> bool {
    RESERVED.contains(&c) || (expression_arguments && c == '(')
}

/// Whether `c` may appear unescaped in an unquoted argument.
pub fn is_argument_char(c: char, expression_arguments: bool) -> bool {
    !is_whitespace(c) && !is_line_terminator(c) && !is_reserved(c, expression_arguments)
}
