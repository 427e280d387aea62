use serde::{Deserialize, Serialize};

/// The viewer's like status for one article, as last known to the client.
///
/// `liked_by_me` and `likes_count` only change together, through the methods
/// below.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LikeState {
    pub liked_by_me: bool,
    pub likes_count: i64,
    /// A toggle request is in flight.
    pub busy: bool,
}

/// Rollback point taken before an optimistic update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeSnapshot {
    liked_by_me: bool,
    likes_count: i64,
}

impl LikeState {
    pub fn new(liked_by_me: bool, likes_count: i64) -> Self {
        Self {
            liked_by_me,
            likes_count,
            busy: false,
        }
    }

    /// Count as shown to the viewer; never negative.
    pub fn displayed_count(&self) -> i64 {
        self.likes_count.max(0)
    }

    pub fn snapshot(&self) -> LikeSnapshot {
        LikeSnapshot {
            liked_by_me: self.liked_by_me,
            likes_count: self.likes_count,
        }
    }

    pub fn restore(&mut self, snapshot: LikeSnapshot) {
        self.liked_by_me = snapshot.liked_by_me;
        self.likes_count = snapshot.likes_count;
    }

    /// Predict the result of a toggle.
    pub fn apply_optimistic(&mut self) {
        self.liked_by_me = !self.liked_by_me;
        self.likes_count += if self.liked_by_me { 1 } else { -1 };
    }

    /// Adopt the server's answer.
    pub fn reconcile(&mut self, confirmed: LikeToggleResponse) {
        self.liked_by_me = confirmed.liked;
        self.likes_count = confirmed.total_likes;
    }
}

/// Authoritative answer of the like endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeToggleResponse {
    pub liked: bool,
    pub total_likes: i64,
}
