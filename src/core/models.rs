#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Joke {
    pub id: String,   // Opaque identifier from the source, unique per joke
    pub text: String, // The joke itself
    pub votes: i32,   // Running tally, unclamped (may go negative)
}
