use std::io::{self, Write};

use crate::models::{Language, Question};

pub fn display_question(out: &mut impl Write, question: &Question, language: Language) -> io::Result<()> {
    writeln!(out, "\n{}", "=".repeat(60))?;
    writeln!(out, "  {}. {}", question.question_frontend_id, question.title)?;
    writeln!(out, "{}\n", "=".repeat(60))?;

    writeln!(out, "Difficulty: {}", question.difficulty)?;
    writeln!(out, "Examples: {}", question.example_inputs.len())?;
    writeln!(
        out,
        "Snippets: {} available, using {}",
        question.snippets.len(),
        language.snippet_label()
    )?;
    writeln!(out)
}
