use crate::core::models::Joke;

#[derive(Debug, Clone)]
pub enum TaskResult {
    JokesFetched(Result<Vec<Joke>, String>),
    ApiConnection(bool),
    LoadingMessage(String),
}

impl TaskResult {
    pub fn task_type(&self) -> &'static str {
        match self {
            TaskResult::JokesFetched(_) => "jokes_fetched",
            TaskResult::ApiConnection(_) => "api_connection",
            TaskResult::LoadingMessage(_) => "loading_message",
        }
    }
}
