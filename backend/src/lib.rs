//! Beam Random - Rust Engine
//!
//! Deterministic random number generation for charged-particle accelerator
//! Monte Carlo (scattering, noise injection, distribution generation).
//!
//! # Architecture
//!
//! - **rng**: The ACG generator, its static tables and checkpoints
//! - **distributions**: Integer ranges and continuous/discrete samplers
//! - **stream**: Per-consumer generator + sampler state
//! - **config**: Serializable generator configuration
//!
//! # Critical Invariants
//!
//! 1. Same seed + same size → same sequence, on every platform
//! 2. One generator per consumer; generators are never shared
//! 3. Invalid ranges and parameters are rejected, never clamped

// Module declarations
pub mod config;
pub mod distributions;
pub mod rng;
pub mod stream;

// Re-exports for convenience
pub use config::{ConfigError, GeneratorConfig};
pub use distributions::{
    DistributionError, DistributionSpec, NegativeExponential, Normal, Poisson, RandomInteger,
    RangeError, Sampler, TruncatedNormal, Uniform, Weibull,
};
pub use rng::{Acg, AcgSnapshot, CheckpointError, RandomSource};
pub use stream::{RandomStream, StreamSnapshot};
