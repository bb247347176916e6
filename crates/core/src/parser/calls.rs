use crate::interfaces::{Argument, ArgumentKind, CallSite, RawLiteral};

use super::lexer::{Token, TokenKind, tokenize};

/// Keywords that may be followed by `(` without forming a call
const CONTROL_KEYWORDS: &[&str] = &["if", "for", "while", "switch", "catch", "return", "await"];

enum Frame {
    Group,
    Call(PendingCall),
}

struct PendingCall {
    callee: String,
    start: usize,
    arg_start: usize,
    arguments: Vec<Argument>,
}

impl PendingCall {
    fn push_argument(&mut self, source: &str, tokens: &[Token]) {
        let (Some(first), Some(last)) = (tokens.first(), tokens.last()) else {
            // Trailing comma
            return;
        };

        let (name, value) = match tokens {
            [label, colon, rest @ ..]
                if label.kind == TokenKind::Identifier && colon.is_punct(':') =>
            {
                (Some(label.text(source).to_string()), rest)
            }
            _ => (None, tokens),
        };

        let is_plain_literal = !value.is_empty()
            && value
                .iter()
                .all(|t| t.kind == TokenKind::String { interpolated: false });
        let kind = if is_plain_literal {
            ArgumentKind::StringLiteral(RawLiteral::new(
                value.iter().map(|t| t.text(source).to_string()).collect(),
            ))
        } else {
            ArgumentKind::Other
        };

        self.arguments.push(Argument {
            name,
            kind,
            span: first.span.start..last.span.end,
        });
    }

    fn finish(mut self, source: &str, tokens: &[Token], end: usize) -> CallSite {
        self.push_argument(source, tokens);
        CallSite {
            callee: self.callee,
            span: self.start..end,
            arguments: self.arguments,
        }
    }
}

/// Find every call expression in `source`, ordered by start offset with
/// outer calls before the calls nested inside them.
pub fn find_calls(source: &str) -> Vec<CallSite> {
    let tokens = tokenize(source);
    calls_in_tokens(source, &tokens)
}

fn calls_in_tokens(source: &str, tokens: &[Token]) -> Vec<CallSite> {
    let mut stack: Vec<Frame> = Vec::new();
    let mut calls = Vec::new();

    for (idx, token) in tokens.iter().enumerate() {
        match token.kind {
            TokenKind::Punct('(') => {
                let frame = match callee_before(source, tokens, idx) {
                    Some(callee) => Frame::Call(PendingCall {
                        callee: callee.text(source).to_string(),
                        start: callee.span.start,
                        arg_start: idx + 1,
                        arguments: Vec::new(),
                    }),
                    None => Frame::Group,
                };
                stack.push(frame);
            }
            TokenKind::Punct('[') | TokenKind::Punct('{') => stack.push(Frame::Group),
            TokenKind::Punct(',') => {
                if let Some(Frame::Call(call)) = stack.last_mut() {
                    let start = call.arg_start;
                    call.push_argument(source, &tokens[start..idx]);
                    call.arg_start = idx + 1;
                }
            }
            TokenKind::Punct(')') | TokenKind::Punct(']') | TokenKind::Punct('}') => {
                if let Some(Frame::Call(call)) = stack.pop() {
                    let start = call.arg_start;
                    calls.push(call.finish(source, &tokens[start..idx], token.span.end));
                }
            }
            _ => {}
        }
    }

    // Unclosed calls run to the end of input
    while let Some(frame) = stack.pop() {
        if let Frame::Call(call) = frame {
            let start = call.arg_start;
            calls.push(call.finish(source, &tokens[start..], source.len()));
        }
    }

    calls.sort_by_key(|call| (call.span.start, std::cmp::Reverse(call.span.end)));
    calls
}

fn callee_before<'t>(source: &str, tokens: &'t [Token], paren: usize) -> Option<&'t Token> {
    let callee = tokens.get(paren.checked_sub(1)?)?;
    if callee.kind != TokenKind::Identifier {
        return None;
    }
    if CONTROL_KEYWORDS.contains(&callee.text(source)) {
        return None;
    }
    // Qualified calls such as `runner.test(...)` are not plain calls
    if paren >= 2 && tokens[paren - 2].is_punct('.') {
        return None;
    }
    Some(callee)
}

/// The innermost call to `callee` whose span contains `offset`
pub fn enclosing_call<'c>(
    calls: &'c [CallSite],
    offset: usize,
    callee: &str,
) -> Option<&'c CallSite> {
    calls
        .iter()
        .filter(|call| call.callee == callee && call.contains(offset))
        .min_by_key(|call| call.span.len())
}

/// Whether the source declares a top-level `main` function
pub fn declares_main(source: &str) -> bool {
    let tokens = tokenize(source);
    let mut depth = 0usize;
    for (idx, token) in tokens.iter().enumerate() {
        match token.kind {
            TokenKind::Punct('{') => depth += 1,
            TokenKind::Punct('}') => depth = depth.saturating_sub(1),
            TokenKind::Identifier if depth == 0 && token.text(source) == "main" => {
                let followed_by_paren = tokens.get(idx + 1).is_some_and(|t| t.is_punct('('));
                let qualified = idx > 0 && tokens[idx - 1].is_punct('.');
                if followed_by_paren && !qualified {
                    return true;
                }
            }
            _ => {}
        }
    }
    false
}
