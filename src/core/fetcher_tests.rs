#[cfg(test)]
mod tests {
    use std::{
        collections::{
            HashSet,
            VecDeque,
        },
        sync::{
            atomic::{
                AtomicUsize,
                Ordering,
            },
            Arc,
            Mutex,
        },
    };

    use crate::core::{
        fetcher::{
            fetch_unique_jokes,
            ProgressFn,
        },
        source::{
            JokeSource,
            SourceJoke,
        },
        JokeboxError,
    };

    /// Replays a fixed script of responses, counting how many requests the
    /// fetch loop actually issued.
    struct ScriptedSource {
        responses: Mutex<VecDeque<Result<SourceJoke, String>>>,
        requests: AtomicUsize,
    }

    impl ScriptedSource {
        fn new(script: Vec<Result<SourceJoke, String>>) -> Self {
            Self {
                responses: Mutex::new(script.into_iter().collect()),
                requests: AtomicUsize::new(0),
            }
        }

        fn request_count(&self) -> usize {
            self.requests.load(Ordering::SeqCst)
        }
    }

    impl JokeSource for ScriptedSource {
        async fn fetch_one(&self) -> Result<SourceJoke, JokeboxError> {
            self.requests.fetch_add(1, Ordering::SeqCst);

            let next = self.responses.lock().unwrap().pop_front();
            match next {
                Some(Ok(joke)) => Ok(joke),
                Some(Err(message)) => Err(JokeboxError::Custom(message)),
                None => panic!("scripted source ran out of responses"),
            }
        }
    }

    fn joke(id: &str) -> Result<SourceJoke, String> {
        Ok(SourceJoke { id: id.to_string(), joke: format!("joke {id}") })
    }

    #[tokio::test]
    async fn collects_exactly_the_target_count_of_distinct_jokes() {
        let source = ScriptedSource::new(vec![joke("a"), joke("b"), joke("c")]);

        let jokes = fetch_unique_jokes(&source, 3, None).await.unwrap();

        assert_eq!(jokes.len(), 3);
        let ids: HashSet<&str> = jokes.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids.len(), 3);
        assert!(jokes.iter().all(|j| j.votes == 0));
    }

    #[tokio::test]
    async fn discards_duplicates_and_keeps_requesting() {
        let source =
            ScriptedSource::new(vec![joke("1"), joke("1"), joke("2"), joke("3"), joke("4")]);

        let jokes = fetch_unique_jokes(&source, 4, None).await.unwrap();

        assert_eq!(source.request_count(), 5);
        let ids: Vec<&str> = jokes.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4"]);
        assert!(jokes.iter().all(|j| j.votes == 0));
    }

    #[tokio::test]
    async fn sits_through_a_run_of_duplicates_until_a_fresh_id_arrives() {
        let mut script = vec![joke("a")];
        script.extend((0..10).map(|_| joke("a")));
        script.push(joke("b"));
        let source = ScriptedSource::new(script);

        let jokes = fetch_unique_jokes(&source, 2, None).await.unwrap();

        assert_eq!(source.request_count(), 12);
        assert_eq!(jokes[0].id, "a");
        assert_eq!(jokes[1].id, "b");
    }

    #[tokio::test]
    async fn a_source_error_aborts_the_whole_fetch() {
        let source =
            ScriptedSource::new(vec![joke("a"), Err("connection reset".to_string()), joke("b")]);

        let result = fetch_unique_jokes(&source, 3, None).await;

        assert!(result.is_err());
        assert_eq!(source.request_count(), 2);
    }

    #[tokio::test]
    async fn reports_progress_only_for_jokes_that_were_kept() {
        let source = ScriptedSource::new(vec![joke("a"), joke("a"), joke("b")]);
        let messages = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&messages);
        let progress: ProgressFn = Box::new(move |message| sink.lock().unwrap().push(message));

        fetch_unique_jokes(&source, 2, Some(progress)).await.unwrap();

        let messages = messages.lock().unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0], "Collected 1 of 2 jokes...");
        assert_eq!(messages[1], "Collected 2 of 2 jokes...");
    }
}
