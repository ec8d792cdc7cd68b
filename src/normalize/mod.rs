pub mod normalizer;

pub use normalizer::{LowercaseNormalizer, Normalized, Normalizer};
