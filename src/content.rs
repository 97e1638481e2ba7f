//! Static learning content: keyword tables, autocomplete suggestions,
//! keyword tips, the cheat sheet, curated code examples, and quiz questions.
//!
//! Everything here is immutable and known at compile time. The tip map is
//! the only table that needs hashing; it is built once at startup via
//! [`keyword_tips`] and owned by the application for its whole lifetime.

use rustc_hash::FxHashMap;

/// The reserved words of Python 3, in `keyword.kwlist` order.
///
/// Used for whole-word syntax highlighting.
pub const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break",
    "class", "continue", "def", "del", "elif", "else", "except", "finally",
    "for", "from", "global", "if", "import", "in", "is", "lambda", "nonlocal",
    "not", "or", "pass", "raise", "return", "try", "while", "with", "yield",
];

/// Autocomplete candidates: the keyword list plus common builtins, sorted.
pub const SUGGESTIONS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break",
    "class", "continue", "def", "del", "dict", "elif", "else", "enumerate",
    "except", "finally", "float", "for", "from", "global", "if", "import",
    "in", "input", "int", "is", "lambda", "len", "list", "nonlocal", "not",
    "open", "or", "pass", "print", "raise", "range", "return", "set", "str",
    "try", "tuple", "while", "with", "yield",
];

/// Shown in the helper panel when the current word has no tip.
pub const TIP_FALLBACK: &str = "Select a keyword to see a tip.";

/// Build the keyword -> tip mapping displayed by the helper panel.
pub fn keyword_tips() -> FxHashMap<&'static str, &'static str> {
    [
        ("for", "Iterate over items in a sequence. Syntax: for item in sequence:"),
        ("while", "Repeat a block while a condition remains True."),
        ("def", "Define a function. Use parentheses for parameters."),
        ("class", "Define a class that bundles data and behaviour."),
        ("with", "Context manager for managing resources, e.g. files."),
        ("print", "Display text or variables. Useful for debugging."),
        ("import", "Bring modules or objects into the current namespace."),
        ("list", "Mutable ordered collection. Use [] to define literals."),
        ("dict", "Mapping of keys to values. Literal syntax uses {key: value}."),
    ]
    .into_iter()
    .collect()
}

/// Reference text for the Cheat Sheet tab.
pub const CHEAT_SHEET: &str = "\
🐍 Python Cheat Sheet
--------------------
• print(value, ...): display output.
• input(prompt): ask the user for data.
• for item in sequence: iterate over items.
• if condition: create decision branches.
• list comprehensions: [expr for item in iterable].
• with open('file.txt') as handle: manage file resources safely.
• Modules are imported with `import math` or `from math import sqrt`.
• Virtual environments keep project dependencies isolated.
• Use `help(object)` in the console for built-in documentation.";

/// Curated examples listed in the Examples tab, sorted by name.
///
/// Selecting one replaces the whole buffer with its source.
pub const CODE_EXAMPLES: &[(&str, &str)] = &[
    (
        "FizzBuzz",
        "\
for number in range(1, 21):
    if number % 15 == 0:
        print('FizzBuzz')
    elif number % 3 == 0:
        print('Fizz')
    elif number % 5 == 0:
        print('Buzz')
    else:
        print(number)",
    ),
    (
        "Guess",
        "\
import random

secret = random.randint(1, 10)
while True:
    guess = int(input('Guess between 1 and 10: '))
    if guess == secret:
        print('You guessed it!')
        break
    print('Too high!' if guess > secret else 'Too low!')",
    ),
    ("Hello", "print('Hello, Python adventurer!')"),
];

/// A single quiz question with its expected answer and explanation.
#[derive(Debug, Clone, Copy)]
pub struct QuizQuestion {
    pub prompt: &'static str,
    pub answer: &'static str,
    pub explanation: &'static str,
}

/// The fixed ordered question list, cycled modulo its length.
pub const QUIZ_QUESTIONS: &[QuizQuestion] = &[
    QuizQuestion {
        prompt: "What keyword starts a function definition?",
        answer: "def",
        explanation: "Functions begin with the `def` keyword followed by the name.",
    },
    QuizQuestion {
        prompt: "Which built-in converts text to an integer?",
        answer: "int",
        explanation: "`int(value)` parses a string or number into an integer.",
    },
    QuizQuestion {
        prompt: "What statement lets you loop while a condition is true?",
        answer: "while",
        explanation: "Use `while condition:` to run a block until the condition fails.",
    },
];

/// Body of the Python Tips popup.
pub const TIPS: &str = "\
✨ Productivity Tips
--------------------
• Press Ctrl+Space for autocomplete suggestions.
• Use Shift+F5 to run only the selected portion of code.
• Explore the Examples tab for curated snippets.
• Keep an eye on the helper panel for keyword hints.
• Experiment freely—the console output does not affect your files.";

/// Body of the About popup.
pub const ABOUT: &str =
    "A friendly playground for experimenting with Python and learning the basics.";

/// Filter the suggestion set down to entries starting with `prefix`.
///
/// An empty prefix matches every suggestion.
pub fn filter_suggestions(prefix: &str) -> Vec<&'static str> {
    SUGGESTIONS
        .iter()
        .copied()
        .filter(|s| s.starts_with(prefix))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggestions_sorted_and_unique() {
        for pair in SUGGESTIONS.windows(2) {
            assert!(pair[0] < pair[1], "{} should sort before {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_suggestions_cover_keywords() {
        for kw in PYTHON_KEYWORDS {
            assert!(SUGGESTIONS.contains(kw), "missing keyword {}", kw);
        }
    }

    #[test]
    fn test_filter_by_prefix() {
        let matches = filter_suggestions("pri");
        assert!(matches.contains(&"print"));
        for m in &matches {
            assert!(m.starts_with("pri"), "{} does not start with pri", m);
        }
    }

    #[test]
    fn test_filter_empty_prefix_matches_everything() {
        assert_eq!(filter_suggestions("").len(), SUGGESTIONS.len());
    }

    #[test]
    fn test_filter_no_matches() {
        assert!(filter_suggestions("zzz").is_empty());
    }

    #[test]
    fn test_keyword_tips_lookup() {
        let tips = keyword_tips();
        assert!(tips.get("for").is_some_and(|t| t.contains("Iterate")));
        assert!(tips.get("format").is_none());
    }

    #[test]
    fn test_quiz_questions_complete() {
        assert!(!QUIZ_QUESTIONS.is_empty());
        for q in QUIZ_QUESTIONS {
            assert!(!q.prompt.is_empty());
            assert!(!q.answer.is_empty());
            assert!(!q.explanation.is_empty());
        }
    }

    #[test]
    fn test_examples_sorted_by_name() {
        for pair in CODE_EXAMPLES.windows(2) {
            assert!(pair[0].0 < pair[1].0);
        }
    }
}
