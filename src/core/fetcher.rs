use std::collections::HashSet;

use crate::core::{
    models::Joke,
    source::JokeSource,
    JokeboxError,
};

pub type ProgressFn = Box<dyn Fn(String) + Send>;

/// Collects `target_count` jokes with pairwise distinct ids from `source`,
/// one request at a time.
///
/// The source occasionally hands back a joke it has already served; those are
/// discarded and the request is simply repeated. There is no cap on how many
/// duplicates the loop will sit through, so a degenerate source stalls the
/// fetch rather than failing it. Any transport or decode error aborts the
/// whole operation; jokes collected so far are discarded.
pub async fn fetch_unique_jokes<S: JokeSource>(
    source: &S,
    target_count: usize,
    progress: Option<ProgressFn>,
) -> Result<Vec<Joke>, JokeboxError> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut jokes: Vec<Joke> = Vec::with_capacity(target_count);

    while jokes.len() < target_count {
        let fetched = source.fetch_one().await?;

        if !seen.insert(fetched.id.clone()) {
            println!("Duplicate joke {} from the source, requesting another", fetched.id);
            continue;
        }

        jokes.push(Joke { id: fetched.id, text: fetched.joke, votes: 0 });

        if let Some(report) = &progress {
            report(format!("Collected {} of {} jokes...", jokes.len(), target_count));
        }
    }

    Ok(jokes)
}
