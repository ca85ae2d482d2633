use tracing::debug;

const ZERO_WIDTH_SPACE: char = '\u{200B}';
const MIN_WIDTH: usize = 20;

pub fn remove_invisible_characters(input: &str) -> String {
    input.replace(ZERO_WIDTH_SPACE, "")
}

/// True when `input` holds a tag (`<p`, `</p`, `<!--`) or an entity (`&amp;`, `&#8203;`).
pub fn has_markup(input: &str) -> bool {
    let bytes = input.as_bytes();
    bytes.iter().enumerate().any(|(i, &b)| match b {
        b'<' => matches!(bytes.get(i + 1), Some(c) if c.is_ascii_alphabetic() || *c == b'/' || *c == b'!'),
        b'&' => is_entity(&bytes[i + 1..]),
        _ => false,
    })
}

fn is_entity(rest: &[u8]) -> bool {
    let (body, numeric) = match rest.strip_prefix(b"#") {
        Some(num) => match num.first() {
            Some(b'x') | Some(b'X') => (&num[1..], true),
            _ => (num, true),
        },
        None => (rest, false),
    };

    let len = body
        .iter()
        .take_while(|c| if numeric { c.is_ascii_hexdigit() } else { c.is_ascii_alphanumeric() })
        .count();
    len > 0 && body.get(len) == Some(&b';')
}

/// Render a problem statement as plain text.
///
/// Never fails: if the renderer rejects the markup, the raw input is used.
pub fn html_to_text(html: &str, width: usize) -> String {
    if !has_markup(html) {
        return remove_invisible_characters(html);
    }

    let text = match html2text::from_read(html.as_bytes(), width.max(MIN_WIDTH)) {
        Ok(text) => text,
        Err(e) => {
            debug!(error = %e, "html rendering failed, keeping raw content");
            html.to_string()
        }
    };

    remove_invisible_characters(&text)
}
