/// Unquote a string literal made of one or more adjacent parts and
/// concatenate the results.
pub fn unquote<S: AsRef<str>>(parts: &[S]) -> String {
    parts.iter().map(|part| unquote_part(part.as_ref())).collect()
}

/// Unquote a single Dart string literal: strip the `r` prefix and matching
/// quotes, then resolve escapes unless the literal is raw.
pub fn unquote_part(literal: &str) -> String {
    let (raw, quoted) = match literal.strip_prefix('r') {
        Some(rest) => (true, rest),
        None => (false, literal),
    };

    let Some(quote) = quoted.chars().next().filter(|c| *c == '\'' || *c == '"') else {
        return quoted.to_string();
    };
    let single = quote.to_string();
    let triple = single.repeat(3);

    let body = if quoted.len() >= 6 && quoted.starts_with(&triple) && quoted.ends_with(&triple) {
        strip_leading_blank_line(&quoted[3..quoted.len() - 3])
    } else if quoted.len() >= 2 && quoted.ends_with(quote) {
        &quoted[1..quoted.len() - 1]
    } else {
        // Unterminated
        &quoted[1..]
    };

    if raw {
        body.to_string()
    } else {
        resolve_escapes(body)
    }
}

// A multi-line string drops its first line when that line is blank
fn strip_leading_blank_line(body: &str) -> &str {
    let trimmed = body.trim_start_matches([' ', '\t']);
    trimmed
        .strip_prefix("\r\n")
        .or_else(|| trimmed.strip_prefix('\n'))
        .unwrap_or(body)
}

fn resolve_escapes(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }

        match chars.next() {
            None => out.push('\\'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('b') => out.push('\u{8}'),
            Some('f') => out.push('\u{c}'),
            Some('v') => out.push('\u{b}'),
            Some('x') => {
                let digits: String = take_hex(&mut chars, 2);
                push_code_point(&mut out, 'x', &digits, digits.len() == 2);
            }
            Some('u') => {
                if chars.peek() == Some(&'{') {
                    chars.next();
                    let digits = take_hex(&mut chars, 6);
                    let closed = chars.peek() == Some(&'}');
                    if closed {
                        chars.next();
                    }
                    push_code_point(&mut out, 'u', &digits, closed && !digits.is_empty());
                } else {
                    let digits = take_hex(&mut chars, 4);
                    push_code_point(&mut out, 'u', &digits, digits.len() == 4);
                }
            }
            // `\'`, `\"`, `\$`, `\\` and any other escaped character stand
            // for themselves
            Some(other) => out.push(other),
        }
    }

    out
}

fn take_hex(chars: &mut std::iter::Peekable<std::str::Chars<'_>>, max: usize) -> String {
    let mut digits = String::new();
    while digits.len() < max {
        match chars.peek() {
            Some(c) if c.is_ascii_hexdigit() => {
                digits.push(*c);
                chars.next();
            }
            _ => break,
        }
    }
    digits
}

fn push_code_point(out: &mut String, marker: char, digits: &str, valid: bool) {
    let decoded = valid
        .then(|| u32::from_str_radix(digits, 16).ok())
        .flatten()
        .and_then(char::from_u32);
    match decoded {
        Some(c) => out.push(c),
        None => {
            out.push(marker);
            out.push_str(digits);
        }
    }
}
