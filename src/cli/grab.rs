use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use tracing::warn;

use super::prompt;
use crate::client::QuestionClient;
use crate::display::display_question;
use crate::editor::open_in_editor;
use crate::error::{Error, Result};
use crate::graphql::extract_slug;
use crate::index::{append_record, relative_link, IndexRecord};
use crate::models::config::UserConfig;
use crate::models::Question;
use crate::scaffold::{select_snippet, SolutionFile};
use crate::transform::html_to_text;

#[derive(Debug)]
pub struct GrabOutcome {
    pub solution: PathBuf,
    pub snippet_found: bool,
    pub indexed: bool,
}

pub fn grab_problem(link: &str, user_config: &UserConfig) -> Result<()> {
    let client = QuestionClient::from_config(user_config)?;
    let stdin = io::stdin();

    run_pipeline(
        link,
        user_config,
        &mut stdin.lock(),
        &mut io::stdout(),
        Path::new("."),
        |slug| client.fetch_question(slug),
    )?;
    Ok(())
}

/// Prompts read from `input`, messages go to `output`, files land under `root`.
pub fn run_pipeline<F>(
    link: &str,
    user_config: &UserConfig,
    input: &mut impl BufRead,
    output: &mut impl Write,
    root: &Path,
    fetch: F,
) -> Result<GrabOutcome>
where
    F: FnOnce(&str) -> Result<Question>,
{
    let slug = extract_slug(link)?;
    let language = prompt::choose_language(input, output)?;

    let question = fetch(slug)?;
    display_question(output, &question, language).map_err(Error::Terminal)?;

    let text = html_to_text(&question.content_html, user_config.wrap_width);
    let (code, snippet_found) = match select_snippet(&question.snippets, language.snippet_label()) {
        Ok(snippet) => (snippet.code.as_str(), true),
        Err(e) => {
            warn!(error = %e, "continuing with an empty code section");
            writeln!(output, "code snippet not found for this problem.").map_err(Error::Terminal)?;
            ("", false)
        }
    };

    let solution = SolutionFile::compose(language, &question, link, &user_config.author, &text, code);
    let written = solution.write(root)?;

    writeln!(output, "Launching terminal application...").map_err(Error::Terminal)?;
    if let Err(e) = open_in_editor(&user_config.editor, &written) {
        warn!(error = %e, "editor did not exit cleanly");
        writeln!(output, "Error: {}", e).map_err(Error::Terminal)?;
    }

    if !prompt::confirm_index(input, output)? {
        writeln!(output, "Bye.").map_err(Error::Terminal)?;
        return Ok(GrabOutcome {
            solution: written,
            snippet_found,
            indexed: false,
        });
    }

    let index_file = Path::new(&user_config.index_file);
    let record = IndexRecord {
        frontend_id: question.question_frontend_id.clone(),
        title: question.title.clone(),
        source_link: link.to_string(),
        language: language.snippet_label().to_string(),
        relative_path: relative_link(index_file, &solution.path),
        difficulty: question.difficulty.clone(),
    };
    append_record(&root.join(index_file), &record)?;

    writeln!(output, "Done.").map_err(Error::Terminal)?;
    Ok(GrabOutcome {
        solution: written,
        snippet_found,
        indexed: true,
    })
}
