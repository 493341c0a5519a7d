use crate::core::{
    models::Joke,
    store::VoteStore,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchState {
    Idle,
    Loading,
}

/// Owns the joke collection and the refresh state machine. All mutation goes
/// through the entry points here; the GUI only reads.
///
/// A fresh board starts in `Loading` because whoever constructs it kicks off
/// the first fetch immediately.
#[derive(Debug)]
pub struct JokeBoard {
    store: VoteStore,
    state: FetchState,
}

impl JokeBoard {
    pub fn new() -> Self {
        Self { store: VoteStore::new(), state: FetchState::Loading }
    }

    pub fn state(&self) -> FetchState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == FetchState::Loading
    }

    pub fn has_jokes(&self) -> bool {
        !self.store.is_empty()
    }

    /// Requests a new batch. Returns false while a fetch is already in
    /// flight: the second trigger is ignored, so two fetches never race.
    pub fn request_refresh(&mut self) -> bool {
        if self.is_loading() {
            return false;
        }

        self.state = FetchState::Loading;
        true
    }

    /// A completed fetch replaces the whole collection.
    pub fn finish_fetch(&mut self, jokes: Vec<Joke>) {
        self.store.replace(jokes);
        self.state = FetchState::Idle;
    }

    /// A failed fetch leaves the collection as it was before the attempt.
    pub fn fail_fetch(&mut self) {
        self.state = FetchState::Idle;
    }

    pub fn vote(&mut self, id: &str, delta: i32) {
        self.store.apply_vote(id, delta);
    }

    pub fn sorted_jokes(&self) -> Vec<Joke> {
        self.store.sorted_view()
    }
}

impl Default for JokeBoard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{
        FetchState,
        JokeBoard,
    };
    use crate::core::models::Joke;

    fn batch(ids: &[&str]) -> Vec<Joke> {
        ids.iter()
            .map(|id| Joke { id: id.to_string(), text: format!("joke {id}"), votes: 0 })
            .collect()
    }

    #[test]
    fn a_new_board_is_loading_its_first_batch() {
        let board = JokeBoard::new();

        assert_eq!(board.state(), FetchState::Loading);
        assert!(!board.has_jokes());
    }

    #[test]
    fn refresh_is_ignored_while_a_fetch_is_in_flight() {
        let mut board = JokeBoard::new();

        assert!(!board.request_refresh());

        board.finish_fetch(batch(&["a"]));
        assert!(board.request_refresh());
        assert!(!board.request_refresh());
    }

    #[test]
    fn a_completed_fetch_replaces_the_collection() {
        let mut board = JokeBoard::new();
        board.finish_fetch(batch(&["a", "b"]));
        board.vote("a", 1);

        board.request_refresh();
        board.finish_fetch(batch(&["c"]));

        let ids: Vec<String> = board.sorted_jokes().into_iter().map(|j| j.id).collect();
        assert_eq!(ids, vec!["c"]);
        assert_eq!(board.state(), FetchState::Idle);
    }

    #[test]
    fn a_failed_fetch_keeps_the_previous_batch() {
        let mut board = JokeBoard::new();
        board.finish_fetch(batch(&["a", "b"]));
        board.vote("b", 1);

        board.request_refresh();
        board.fail_fetch();

        assert_eq!(board.state(), FetchState::Idle);
        let jokes = board.sorted_jokes();
        assert_eq!(jokes.len(), 2);
        assert_eq!(jokes[0].id, "b");
        assert_eq!(jokes[0].votes, 1);
    }
}
