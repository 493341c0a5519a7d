pub mod board;
pub mod errors;
pub mod fetcher;
pub mod models;
pub mod source;
pub mod store;
pub mod tasks;

mod fetcher_tests;

pub use board::{
    FetchState,
    JokeBoard,
};
pub use errors::JokeboxError;
pub use models::Joke;
pub use store::VoteStore;
