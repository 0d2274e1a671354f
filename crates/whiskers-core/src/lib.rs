// Whiskers domain types
//
// Storage-agnostic entities shared by the storage layer and the HTTP server:
// - Event: a calendar entry as exposed over the JSON API
// - VoteTally: in-memory up/down counters for the fixed set of cat images

pub mod event;
pub mod votes;

pub use event::{Event, DEFAULT_USER};
pub use votes::{ImageVotes, VoteDirection, VoteTally, KNOWN_IMAGES};
