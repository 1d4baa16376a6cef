pub mod leetcode_client;
pub mod llm_client;

#[cfg(test)]
pub(crate) mod test_server;

pub use leetcode_client::{decode_question_response, LeetCodeClient, QuestionBank};
pub use llm_client::{ChatBackend, LlmClient};
