use std::io::{BufRead, Write};

use crate::error::{Error, Result};
use crate::models::Language;

fn read_answer(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    let n = input.read_line(&mut line).map_err(Error::Terminal)?;
    if n == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

pub fn language_menu() -> String {
    let options: String = Language::ALL
        .iter()
        .map(|l| format!("[{}:{}]", l.snippet_label(), l.choice()))
        .collect();
    format!("Which language do you want to use?{}", options)
}

pub fn choose_language(input: &mut impl BufRead, output: &mut impl Write) -> Result<Language> {
    writeln!(output, "{}", language_menu()).map_err(Error::Terminal)?;
    output.flush().map_err(Error::Terminal)?;

    let answer = read_answer(input)?.ok_or_else(|| {
        Error::Terminal(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            "no language selected",
        ))
    })?;

    Language::from_choice(&answer).ok_or(Error::InvalidChoice(answer))
}

pub fn confirm_index(input: &mut impl BufRead, output: &mut impl Write) -> Result<bool> {
    writeln!(output, "Link the solution to the Repo Readme?[y/N]").map_err(Error::Terminal)?;
    output.flush().map_err(Error::Terminal)?;

    Ok(matches!(read_answer(input)?.as_deref(), Some("y") | Some("Y")))
}
