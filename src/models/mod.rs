pub mod language;
pub mod problem;
pub mod question;

pub use problem::{CodeSnippet, Difficulty, Example, Problem, Solution};
pub use question::{GraphQlResponse, QuestionData, QuestionDetail, TopicTag};
