use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::Question;

/// Index of the slug in `https://leetcode.com/problems/<slug>/...` split on '/'.
const SLUG_SEGMENT: usize = 4;

#[derive(Debug, Serialize)]
pub struct GraphQlRequest {
    pub query: String,
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    data: Option<ResponseData>,
    #[serde(default)]
    errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Deserialize)]
struct ResponseData {
    question: Option<Question>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

pub fn extract_slug(link: &str) -> Result<&str> {
    let path = link
        .trim()
        .split(|c: char| c == '?' || c == '#')
        .next()
        .unwrap_or("");

    let slug = path
        .split('/')
        .nth(SLUG_SEGMENT)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| Error::InvalidLink(link.to_string()))?;

    // The slug is spliced into the query text, so keep it to safe characters.
    if !slug
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(Error::InvalidLink(link.to_string()));
    }

    Ok(slug)
}

pub fn build_query(slug: &str) -> String {
    format!(
        r#"
    {{
        question(titleSlug: "{}") {{
            questionFrontendId
            questionTitle
            content
            difficulty
            exampleTestcaseList
            codeSnippets {{
                lang
                code
            }}
        }}
    }}"#,
        slug
    )
}

pub fn build_request(slug: &str) -> GraphQlRequest {
    GraphQlRequest {
        query: build_query(slug),
    }
}

pub fn decode_response(body: &str, slug: &str) -> Result<Question> {
    let response: GraphQlResponse = serde_json::from_str(body)?;

    if let Some(question) = response.data.and_then(|d| d.question) {
        return Ok(question);
    }

    match response.errors.and_then(|errs| errs.into_iter().next()) {
        Some(err) => Err(Error::GraphQl(err.message)),
        None => Err(Error::QuestionNotFound(slug.to_string())),
    }
}
