use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CodeSnippet {
    #[serde(rename = "lang")]
    pub language: String,
    pub code: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub question_frontend_id: String,
    #[serde(rename = "questionTitle")]
    pub title: String,
    /// Problem statement as HTML.
    #[serde(rename = "content", default, deserialize_with = "null_as_default")]
    pub content_html: String,
    pub difficulty: String,
    #[serde(rename = "exampleTestcaseList", default, deserialize_with = "null_as_default")]
    pub example_inputs: Vec<String>,
    #[serde(rename = "codeSnippets", default, deserialize_with = "null_as_default")]
    pub snippets: Vec<CodeSnippet>,
}

// Paid-only questions come back with null content and snippets.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
