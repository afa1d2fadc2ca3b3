//! Prompt helpers: ask a question, parse the answer.

use shop_core::error::ValidationError;
use shop_core::validation::{validate_quantity, ValidationResult};
use shop_core::ProductId;

use crate::console::Console;
use crate::error::{ShellError, ShellResult};

/// Writes `question` and reads the answer. End of input is `InputClosed`.
pub fn ask<C: Console + ?Sized>(console: &mut C, question: &str) -> ShellResult<String> {
    console.write(question)?;
    console.read_line()?.ok_or(ShellError::InputClosed)
}

/// Parses a product id as typed at a prompt.
pub fn parse_product_id(raw: &str) -> ValidationResult<ProductId> {
    raw.trim()
        .parse::<u32>()
        .map(ProductId::new)
        .map_err(|_| ValidationError::NotANumber {
            field: "product id".to_string(),
            value: raw.trim().to_string(),
        })
}

/// Parses a quantity and requires it to be positive.
pub fn parse_quantity(raw: &str) -> ValidationResult<i64> {
    let quantity = raw
        .trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::NotANumber {
            field: "quantity".to_string(),
            value: raw.trim().to_string(),
        })?;

    validate_quantity(quantity)?;
    Ok(quantity)
}

/// `yes` in any letter case.
pub fn is_yes(raw: &str) -> bool {
    raw.trim().eq_ignore_ascii_case("yes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::TextConsole;
    use std::io::Cursor;

    #[test]
    fn test_parse_product_id() {
        assert_eq!(parse_product_id(" 7 "), Ok(ProductId::new(7)));
        assert!(parse_product_id("seven").is_err());
        assert!(parse_product_id("-1").is_err());
        assert!(parse_product_id("").is_err());
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("3"), Ok(3));
        assert_eq!(
            parse_quantity("x"),
            Err(ValidationError::NotANumber {
                field: "quantity".to_string(),
                value: "x".to_string()
            })
        );
        assert_eq!(
            parse_quantity("0"),
            Err(ValidationError::MustBePositive {
                field: "quantity".to_string()
            })
        );
        assert!(parse_quantity("-2").is_err());
    }

    #[test]
    fn test_is_yes() {
        assert!(is_yes("yes"));
        assert!(is_yes("YES "));
        assert!(!is_yes("y"));
        assert!(!is_yes("no"));
        assert!(!is_yes(""));
    }

    #[test]
    fn test_ask_reports_closed_input() {
        let mut console = TextConsole::new(Cursor::new("42\n"), Vec::new());
        assert_eq!(ask(&mut console, "id? ").unwrap(), "42");
        assert!(matches!(
            ask(&mut console, "id? "),
            Err(ShellError::InputClosed)
        ));

        let output = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(output, "id? id? ");
    }
}
