//! String helpers shared by the domain.

/// Upper-case the first letter of every word.
///
/// ## Word boundaries
///
/// | Character                          | Boundary? |
/// |------------------------------------|-----------|
/// | ASCII letter, digit, `_`           | no        |
/// | any other ASCII (space, `-`, `'`…) | yes       |
/// | non-ASCII letter or digit          | no        |
/// | non-ASCII whitespace               | yes       |
/// | anything else                      | no        |
///
/// ## Examples
///
/// | Input        | Output       |
/// |--------------|--------------|
/// | "billing"    | "Billing"    |
/// | "v2api"      | "V2api"      |
/// | "user store" | "User Store" |
/// | "élan"       | "Élan"       |
/// | "ßeta"       | "ßeta"       |
/// | "ǆemal"      | "ǅemal"      |
///
/// Only the first letter of a word changes; the rest is copied as-is. The
/// mapping is one character to one character: letters whose upper case
/// expands (`ß` → `SS`) are kept, and the Latin digraphs take their title
/// case form.
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    // Start of input counts as a boundary.
    let mut prev_is_boundary = true;

    for c in input.chars() {
        if prev_is_boundary {
            out.push(to_title(c));
        } else {
            out.push(c);
        }
        prev_is_boundary = is_word_boundary(c);
    }

    out
}

fn to_title(c: char) -> char {
    match c {
        '\u{01C4}'..='\u{01C6}' => '\u{01C5}', // Ǆ ǅ ǆ
        '\u{01C7}'..='\u{01C9}' => '\u{01C8}', // Ǉ ǈ ǉ
        '\u{01CA}'..='\u{01CC}' => '\u{01CB}', // Ǌ ǋ ǌ
        '\u{01F1}'..='\u{01F3}' => '\u{01F2}', // Ǳ ǲ ǳ
        _ => {
            let mut upper = c.to_uppercase();
            match (upper.next(), upper.next()) {
                (Some(single), None) => single,
                _ => c,
            }
        }
    }
}

fn is_word_boundary(c: char) -> bool {
    if c.is_ascii() {
        return !(c.is_ascii_alphanumeric() || c == '_');
    }
    if c.is_alphabetic() || c.is_numeric() {
        return false;
    }
    c.is_whitespace()
}
