//! Single-comparison condition evaluation.
//!
//! A condition is one `name OP literal` expression. Evaluation never
//! fails: undefined variables, missing operators and non-numeric
//! operands under an ordering operator all degrade to `false` so that
//! authoring mistakes route the script down the false branch instead
//! of aborting playback.

use crate::value::VariableStore;

// Multi-character operators first, otherwise "<" would match inside "<=".
const OPERATORS: [&str; 6] = ["==", "!=", "<=", ">=", "<", ">"];

pub fn evaluate(condition: &str, store: &VariableStore) -> bool {
    let Some(op) = OPERATORS.iter().find(|op| condition.contains(**op)) else {
        log::error!("condition '{}' has no comparison operator", condition);
        return false;
    };

    let Some((left, right)) = condition.split_once(op) else {
        return false;
    };
    let name = left.trim();
    let literal = right.trim();
    if name.is_empty() || literal.is_empty() {
        log::error!("condition '{}' is missing an operand", condition);
        return false;
    }

    // Undefined variables are false, not an error.
    let Some(value) = store.get(name) else {
        return false;
    };
    let stored = value.to_string();

    match *op {
        "==" => stored.eq_ignore_ascii_case(literal),
        "!=" => !stored.eq_ignore_ascii_case(literal),
        _ => {
            let (Ok(lhs), Ok(rhs)) = (stored.trim().parse::<i64>(), literal.parse::<i64>())
            else {
                log::error!(
                    "non-integer operands for '{}' in condition '{}'",
                    op,
                    condition
                );
                return false;
            };
            match *op {
                "<" => lhs < rhs,
                "<=" => lhs <= rhs,
                ">" => lhs > rhs,
                ">=" => lhs >= rhs,
                _ => false,
            }
        }
    }
}
