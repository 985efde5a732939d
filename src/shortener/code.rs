use rand::RngExt;
use std::sync::atomic::{AtomicUsize, Ordering};

pub const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
pub const CODE_LENGTH: usize = 6;

/// Source of candidate short codes. Candidates are not guaranteed unique.
pub trait RandomCodeSource: Send + Sync {
    fn next_code(&self) -> String;
}

/// Uniform random codes drawn from the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngCodeSource;

impl RandomCodeSource for ThreadRngCodeSource {
    fn next_code(&self) -> String {
        let mut rng = rand::rng();
        (0..CODE_LENGTH)
            .map(|_| CODE_ALPHABET[rng.random_range(0..CODE_ALPHABET.len())] as char)
            .collect()
    }
}

/// Replays a fixed list of codes, wrapping around at the end.
#[derive(Debug)]
pub struct SequenceCodeSource {
    codes: Vec<String>,
    cursor: AtomicUsize,
}

impl SequenceCodeSource {
    /// # Panics
    ///
    /// Panics if `codes` is empty.
    pub fn new<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let codes: Vec<String> = codes.into_iter().map(Into::into).collect();
        assert!(!codes.is_empty(), "SequenceCodeSource needs at least one code");
        Self {
            codes,
            cursor: AtomicUsize::new(0),
        }
    }
}

impl RandomCodeSource for SequenceCodeSource {
    fn next_code(&self) -> String {
        let idx = self.cursor.fetch_add(1, Ordering::Relaxed) % self.codes.len();
        self.codes[idx].clone()
    }
}

/// True if `code` has the shape of a generated short code.
pub fn is_valid_code(code: &str) -> bool {
    code.len() == CODE_LENGTH && code.bytes().all(|b| CODE_ALPHABET.contains(&b))
}
