use std::time::Duration;

/// Build statistics
#[derive(Debug, Default, Clone, PartialEq)]
pub struct BuildStats {
    /// Number of posts rendered
    pub posts: usize,
    /// Number of posts listed on the index (dated posts)
    pub listed_posts: usize,
    /// Number of standalone pages rendered
    pub pages: usize,
    /// Bytes copied from the static directory
    pub static_bytes: u64,
    pub duration: Duration,
}
