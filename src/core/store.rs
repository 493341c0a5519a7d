use crate::core::models::Joke;

/// Holds the batch collected by the last completed fetch together with the
/// vote tallies. Jokes stay in arrival order; `sorted_view` derives the
/// display order without touching it.
#[derive(Debug, Default, Clone)]
pub struct VoteStore {
    jokes: Vec<Joke>,
}

impl VoteStore {
    pub fn new() -> Self {
        Self { jokes: Vec::new() }
    }

    /// Wholesale replacement, used when a fetch completes. Old jokes and
    /// their votes are gone.
    pub fn replace(&mut self, jokes: Vec<Joke>) {
        self.jokes = jokes;
    }

    pub fn jokes(&self) -> &[Joke] {
        &self.jokes
    }

    pub fn len(&self) -> usize {
        self.jokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jokes.is_empty()
    }

    /// Adjusts the tally of the joke with `id` by `delta`, without clamping.
    /// An id that is not in the store is a no-op, not an error.
    pub fn apply_vote(&mut self, id: &str, delta: i32) {
        if let Some(joke) = self.jokes.iter_mut().find(|j| j.id == id) {
            joke.votes += delta;
        }
    }

    /// Vote-descending projection for rendering, recomputed on every call.
    /// The sort is stable, so tied jokes keep their arrival order.
    pub fn sorted_view(&self) -> Vec<Joke> {
        let mut view = self.jokes.clone();
        view.sort_by(|a, b| b.votes.cmp(&a.votes));
        view
    }
}

#[cfg(test)]
mod tests {
    use super::VoteStore;
    use crate::core::models::Joke;

    fn joke(id: &str, votes: i32) -> Joke {
        Joke { id: id.to_string(), text: format!("joke {id}"), votes }
    }

    #[test]
    fn votes_accumulate() {
        let mut store = VoteStore::new();
        store.replace(vec![joke("x", 0)]);

        store.apply_vote("x", 1);
        store.apply_vote("x", 1);

        assert_eq!(store.jokes()[0].votes, 2);
    }

    #[test]
    fn votes_are_not_clamped_at_zero() {
        let mut store = VoteStore::new();
        store.replace(vec![joke("x", 0)]);

        store.apply_vote("x", -1);

        assert_eq!(store.jokes()[0].votes, -1);
    }

    #[test]
    fn voting_an_unknown_id_changes_nothing() {
        let mut store = VoteStore::new();
        store.replace(vec![joke("x", 3), joke("y", -2)]);
        let before = store.jokes().to_vec();

        store.apply_vote("nope", 1);

        assert_eq!(store.jokes(), before.as_slice());
    }

    #[test]
    fn sorted_view_is_stable_on_ties() {
        let mut store = VoteStore::new();
        store.replace(vec![joke("a", 2), joke("b", 2), joke("c", 5)]);

        let view = store.sorted_view();

        let ids: Vec<&str> = view.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn sorted_view_leaves_the_store_untouched() {
        let mut store = VoteStore::new();
        store.replace(vec![joke("a", 0), joke("b", 7)]);

        let _ = store.sorted_view();

        let ids: Vec<&str> = store.jokes().iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }
}
