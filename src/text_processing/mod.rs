pub mod normalization;

pub use normalization::{normalize, NormalizationResult};
