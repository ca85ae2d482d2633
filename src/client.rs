use reqwest::blocking::Client;
use reqwest::header::{REFERER, USER_AGENT};
use tracing::{debug, info};

use crate::error::Result;
use crate::graphql::{build_request, decode_response};
use crate::models::config::UserConfig;
use crate::models::Question;

pub struct QuestionClient {
    client: Client,
    endpoint: String,
    referer: String,
    user_agent: String,
}

impl QuestionClient {
    pub fn from_config(config: &UserConfig) -> Result<Self> {
        // No timeout: the request blocks until the service answers.
        let client = Client::builder()
            .timeout(None::<std::time::Duration>)
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            referer: config.referer.clone(),
            user_agent: config.user_agent.clone(),
        })
    }

    pub fn fetch_question(&self, slug: &str) -> Result<Question> {
        info!(slug, endpoint = %self.endpoint, "fetching question");

        let request = build_request(slug);
        debug!(query = %request.query, "GraphQL request");

        let body = self
            .client
            .post(self.endpoint.as_str())
            .header(REFERER, self.referer.as_str())
            .header(USER_AGENT, self.user_agent.as_str())
            .json(&request)
            .send()?
            .error_for_status()?
            .text()?;

        debug!(size = body.len(), "response received");
        decode_response(&body, slug)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::error::Error;
    use crate::graphql::build_query;

    const QUESTION_BODY: &str = r#"{"data": {"question": {
        "questionFrontendId": "1",
        "questionTitle": "Two Sum",
        "content": "<p>Given an array of integers <code>nums</code>.</p>",
        "difficulty": "Easy",
        "exampleTestcaseList": ["[2,7,11,15]\n9"],
        "codeSnippets": [{"lang": "Go", "code": "func twoSum(nums []int, target int) []int {\n}"}]
    }}}"#;

    fn test_config(server: &MockServer) -> UserConfig {
        UserConfig {
            endpoint: format!("{}/graphql", server.uri()),
            referer: "https://leetcode.com".to_string(),
            user_agent: "leetgrab-test/1.0".to_string(),
            ..UserConfig::default()
        }
    }

    /// The blocking client owns its own runtime, so it must be built and dropped off the async executor.
    async fn fetch(server: &MockServer, slug: &'static str) -> Result<Question> {
        let config = test_config(server);
        tokio::task::spawn_blocking(move || QuestionClient::from_config(&config)?.fetch_question(slug))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_fetch_sends_query_and_headers() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/graphql"))
            .and(header("content-type", "application/json"))
            .and(header("referer", "https://leetcode.com"))
            .and(header("user-agent", "leetgrab-test/1.0"))
            .and(body_json(json!({ "query": build_query("two-sum") })))
            .respond_with(ResponseTemplate::new(200).set_body_string(QUESTION_BODY))
            .expect(1)
            .mount(&server)
            .await;

        let question = fetch(&server, "two-sum").await.unwrap();

        assert_eq!(question.question_frontend_id, "1");
        assert_eq!(question.title, "Two Sum");
        assert_eq!(question.snippets[0].language, "Go");
        assert_eq!(question.example_inputs, vec!["[2,7,11,15]\n9".to_string()]);
    }

    #[tokio::test]
    async fn test_server_error_is_network_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("oops"))
            .mount(&server)
            .await;

        let err = fetch(&server, "two-sum").await.unwrap_err();
        assert!(matches!(err, Error::Network(_)), "got {:?}", err);
    }

    #[tokio::test]
    async fn test_unknown_slug_goes_through_decoder() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"data": {"question": null}}"#))
            .mount(&server)
            .await;

        let err = fetch(&server, "no-such-problem").await.unwrap_err();
        assert!(matches!(err, Error::QuestionNotFound(ref s) if s == "no-such-problem"));
    }

    #[tokio::test]
    async fn test_non_json_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>blocked</html>"))
            .mount(&server)
            .await;

        let err = fetch(&server, "two-sum").await.unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }
}
