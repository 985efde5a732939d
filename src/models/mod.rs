pub mod url;

pub use url::{ListQuery, Mapping, MappingStats, ShortenRequest, ShortenResponse};
