// Copyright (c) 2025 relcat Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Identifier and literal quoting shared by the dialects

/// Wrap `name` in `quote`, doubling any embedded quote character
pub(crate) fn quote_identifier(name: &str, quote: char) -> String {
    let mut out = String::with_capacity(name.len() + 2);
    out.push(quote);
    for ch in name.chars() {
        if ch == quote {
            out.push(quote);
        }
        out.push(ch);
    }
    out.push(quote);
    out
}

/// Standard single-quoted string literal
pub(crate) fn quote_literal(value: &str) -> String {
    quote_identifier(value, '\'')
}
