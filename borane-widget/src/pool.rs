use rand::Rng;

use crate::error::WidgetError;

/// Replies used when no pool is configured.
pub const DEFAULT_REPLIES: &[&str] = &[
    "I see, tell me more about the problem 👀",
    "That sounds tricky. Did you try checking API docs?",
    // ASCII apostrophe in "Let's", not U+2019
    "Interesting! Let's try breaking it down step by step 🔍",
    "Hmm, maybe rate limiting is the issue 🤔",
];

/// Fixed, ordered set of canned bot replies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponsePool {
    replies: Vec<String>,
}

impl ResponsePool {
    /// Builds a pool from `replies`, keeping their order.
    ///
    /// Every entry becomes a bot message, so entries are stored trimmed
    /// and blank entries are refused.
    pub fn new<I, S>(replies: I) -> Result<Self, WidgetError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let replies: Vec<String> = replies
            .into_iter()
            .map(|r| r.as_ref().trim().to_string())
            .collect();
        if replies.is_empty() {
            return Err(WidgetError::EmptyPool);
        }
        if let Some(idx) = replies.iter().position(|r| r.is_empty()) {
            return Err(WidgetError::BlankReply(idx));
        }
        Ok(Self { replies })
    }

    pub fn replies(&self) -> &[String] {
        &self.replies
    }

    pub fn len(&self) -> usize {
        self.replies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.replies.is_empty()
    }

    pub fn contains(&self, text: &str) -> bool {
        self.replies.iter().any(|r| r == text)
    }

    /// Draws one reply with a uniform index. Draws are independent.
    pub fn pick<R: Rng>(&self, rng: &mut R) -> &str {
        let idx = rng.gen_range(0..self.replies.len());
        &self.replies[idx]
    }
}

impl Default for ResponsePool {
    fn default() -> Self {
        Self {
            replies: DEFAULT_REPLIES.iter().map(|r| r.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn default_pool_has_four_replies_in_order() {
        let pool = ResponsePool::default();
        assert_eq!(pool.len(), 4);
        assert_eq!(pool.replies()[0], "I see, tell me more about the problem 👀");
        assert_eq!(pool.replies()[3], "Hmm, maybe rate limiting is the issue 🤔");
    }

    #[test]
    fn empty_pool_rejected() {
        let err = ResponsePool::new(Vec::<String>::new()).unwrap_err();
        assert_eq!(err, WidgetError::EmptyPool);
    }

    #[test]
    fn blank_reply_rejected() {
        let err = ResponsePool::new(["ok", "  "]).unwrap_err();
        assert_eq!(err, WidgetError::BlankReply(1));
    }

    #[test]
    fn pick_always_returns_pool_entry() {
        let pool = ResponsePool::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            assert!(pool.contains(pool.pick(&mut rng)));
        }
    }

    #[test]
    fn pick_reaches_every_entry() {
        let pool = ResponsePool::default();
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = vec![false; pool.len()];
        for _ in 0..500 {
            let reply = pool.pick(&mut rng);
            let idx = pool.replies().iter().position(|r| r == reply).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn same_seed_same_sequence() {
        let pool = ResponsePool::default();
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        let first: Vec<String> = (0..20).map(|_| pool.pick(&mut a).to_string()).collect();
        let second: Vec<String> = (0..20).map(|_| pool.pick(&mut b).to_string()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn entries_are_stored_trimmed() {
        let pool = ResponsePool::new([" hi ", "\tthere\n"]).unwrap();
        assert_eq!(pool.replies(), ["hi", "there"]);
        assert!(pool.contains("hi"));
        assert!(!pool.contains(" hi "));
    }

    #[test]
    fn single_entry_pool() {
        let pool = ResponsePool::new(["only"]).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(pool.pick(&mut rng), "only");
    }
}
