// Image vote tallies
// Decision: parking_lot lock around a fixed-size array, one slot per known image
//
// Tallies start at zero for every process and are never persisted.

use parking_lot::RwLock;
use serde::Serialize;

/// Image identifiers that can be voted on, in display order.
pub const KNOWN_IMAGES: [&str; 3] = ["image1", "image2", "image3"];

/// Direction of a single vote
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteDirection {
    Up,
    Down,
}

impl VoteDirection {
    /// Parse a direction path segment. Anything other than `up`/`down` is rejected.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "up" => Some(VoteDirection::Up),
            "down" => Some(VoteDirection::Down),
            _ => None,
        }
    }

    fn delta(self) -> i64 {
        match self {
            VoteDirection::Up => 1,
            VoteDirection::Down => -1,
        }
    }
}

impl std::fmt::Display for VoteDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VoteDirection::Up => write!(f, "up"),
            VoteDirection::Down => write!(f, "down"),
        }
    }
}

/// Current count for one image
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ImageVotes {
    pub image_id: &'static str,
    pub count: i64,
}

/// In-memory vote counters for [`KNOWN_IMAGES`]
///
/// Counters are unbounded in both directions; repeated down votes go negative.
#[derive(Debug, Default)]
pub struct VoteTally {
    counts: RwLock<[i64; KNOWN_IMAGES.len()]>,
}

impl VoteTally {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(image_id: &str) -> Option<usize> {
        KNOWN_IMAGES.iter().position(|known| *known == image_id)
    }

    /// Apply a vote and return the new count.
    ///
    /// Returns `None` without touching any counter when the image is unknown.
    pub fn vote(&self, image_id: &str, direction: VoteDirection) -> Option<i64> {
        let slot = Self::slot(image_id)?;
        let mut counts = self.counts.write();
        counts[slot] += direction.delta();
        Some(counts[slot])
    }

    pub fn get(&self, image_id: &str) -> Option<i64> {
        Self::slot(image_id).map(|slot| self.counts.read()[slot])
    }

    /// All counters in [`KNOWN_IMAGES`] order.
    pub fn snapshot(&self) -> Vec<ImageVotes> {
        let counts = self.counts.read();
        KNOWN_IMAGES
            .iter()
            .zip(counts.iter())
            .map(|(image_id, count)| ImageVotes {
                image_id: *image_id,
                count: *count,
            })
            .collect()
    }
}
