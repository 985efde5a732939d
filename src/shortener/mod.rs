pub mod allocator;
pub mod code;
pub mod error;
pub mod resolver;
pub mod stats;

#[cfg(test)]
mod testing;

pub use allocator::Allocator;
pub use code::{is_valid_code, RandomCodeSource, SequenceCodeSource, ThreadRngCodeSource};
pub use error::{ErrorResponse, ShortenerError};
pub use resolver::Resolver;
pub use stats::Stats;
