#![no_std]

//! # Calc Core
//!
//! Single-pass arithmetic evaluator for the GlyphOS calculator.
//!
//! ## Philosophy
//!
//! - **One fold, no precedence**: Operators apply strictly left to right as they arrive
//! - **Total**: Every input evaluates to a value; malformed input degrades, never errors
//! - **Deterministic**: Wrapping 64-bit arithmetic, no platform-dependent overflow
//!
//! ## Non-Goals
//!
//! - Operator precedence, parentheses, unary minus, or decimals
//! - A tokenizer or syntax tree (there is deliberately no intermediate form)

/// Evaluate an expression with strict left-to-right operator application
///
/// Digits accumulate into the current operand. Each of `+`, `-`, `*`, `/`
/// folds the pending operator (initially `+`) into the running result and
/// becomes pending itself with a fresh operand. Every other character is
/// ignored. The final pending operator is applied once at end of input.
/// Division by zero leaves the running result unchanged.
pub fn evaluate(expr: &str) -> i64 {
    let mut result: i64 = 0;
    let mut current: i64 = 0;
    let mut pending = b'+';

    for ch in expr.chars() {
        match ch {
            '0'..='9' => {
                let digit = (ch as u8 - b'0') as i64;
                current = current.wrapping_mul(10).wrapping_add(digit);
            }
            '+' | '-' | '*' | '/' => {
                result = apply(result, pending, current);
                pending = ch as u8;
                current = 0;
            }
            _ => {}
        }
    }

    apply(result, pending, current)
}

fn apply(result: i64, op: u8, operand: i64) -> i64 {
    match op {
        b'+' => result.wrapping_add(operand),
        b'-' => result.wrapping_sub(operand),
        b'*' => result.wrapping_mul(operand),
        b'/' if operand != 0 => result.wrapping_div(operand),
        _ => result,
    }
}
