use std::{
    sync::{
        mpsc,
        Arc,
    },
    thread,
};

use tokio::runtime::Runtime;

use super::TaskResult;
use crate::core::{
    fetcher::fetch_unique_jokes,
    source::DadJokeClient,
};

/// Runs fetches off the GUI thread. Each task posts its outcome over a
/// channel that the app drains once per frame with `poll_results`.
pub struct TaskManager {
    runtime: Arc<Runtime>,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
}

impl TaskManager {
    pub fn new() -> Self {
        let runtime = Arc::new(Runtime::new().expect("Failed to create TaskManager runtime"));

        let (sender, receiver) = mpsc::channel();

        Self { runtime, receiver, sender }
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }

        results
    }

    fn task_context(&self) -> (mpsc::Sender<TaskResult>, Arc<Runtime>) {
        (self.sender.clone(), self.runtime.clone())
    }

    /// Collects a batch of unique jokes in the background. Progress messages
    /// stream back while the loop runs; the finished batch (or the error that
    /// aborted it) arrives as `TaskResult::JokesFetched`.
    pub fn fetch_jokes(&self, client: DadJokeClient, target_count: usize) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let progress_sender = sender.clone();
            let progress = Box::new(move |message: String| {
                let _ = progress_sender.send(TaskResult::LoadingMessage(message));
            });

            let result = runtime.block_on(async {
                fetch_unique_jokes(&client, target_count, Some(progress))
                    .await
                    .map_err(|e| e.to_string())
            });

            let _ = sender.send(TaskResult::JokesFetched(result));
        });
    }

    pub fn check_api_connection(&self, client: DadJokeClient) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let online = runtime.block_on(async { client.ping().await.is_ok() });

            let _ = sender.send(TaskResult::ApiConnection(online));
        });
    }
}
