//! Formatting utilities for terminal output

use crate::core::{Code, Color, Feedback};
use colored::{ColoredString, Colorize};

/// Paint a color name in its own color
#[must_use]
pub fn paint_color(color: Color) -> ColoredString {
    match color {
        Color::Red => color.name().red(),
        Color::Green => color.name().green(),
        Color::Blue => color.name().blue(),
        Color::Orange => color.name().truecolor(255, 140, 0),
        Color::Yellow => color.name().yellow(),
        Color::Purple => color.name().magenta(),
    }
}

/// Render a code as a colored, comma-separated list
#[must_use]
pub fn format_code(code: &Code) -> String {
    code.colors()
        .iter()
        .map(|&c| paint_color(c).to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render feedback as a peg row: ● per exact, ○ per partial, · per miss
///
/// # Examples
/// ```
/// use mastermind_solver::core::Feedback;
/// use mastermind_solver::output::formatters::feedback_pegs;
///
/// assert_eq!(feedback_pegs(Feedback::new(2, 1), 4), "●●○·");
/// ```
#[must_use]
pub fn feedback_pegs(feedback: Feedback, code_length: usize) -> String {
    let exact = usize::from(feedback.exact());
    let partial = usize::from(feedback.partial());
    let misses = code_length.saturating_sub(exact + partial);

    format!(
        "{}{}{}",
        "●".repeat(exact),
        "○".repeat(partial),
        "·".repeat(misses)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pegs_all_exact() {
        assert_eq!(feedback_pegs(Feedback::new(4, 0), 4), "●●●●");
    }

    #[test]
    fn pegs_all_misses() {
        assert_eq!(feedback_pegs(Feedback::new(0, 0), 4), "····");
    }

    #[test]
    fn pegs_mixed() {
        assert_eq!(feedback_pegs(Feedback::new(1, 2), 4), "●○○·");
    }

    #[test]
    fn format_code_lists_every_peg() {
        let code = Code::new(vec![Color::Red, Color::Blue]);
        let rendered = format_code(&code);

        // Color escapes aside, both names must appear in order
        assert!(rendered.contains("red"));
        assert!(rendered.contains("blue"));
        assert!(rendered.find("red").unwrap() < rendered.find("blue").unwrap());
    }
}
