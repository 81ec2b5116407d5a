//! Procedural ASCII art from a simplified 2D Perlin noise field.
//!
//! Permutation table → noise field → grid sampler → palette renderer.

pub mod ascii_art;
pub mod config;
pub mod error_codes;
pub mod generator;
pub mod logging;
pub mod noise_field;
pub mod palette;
pub mod palette_render;
pub mod permutation;
pub mod sampler;

pub use ascii_art::{AsciiArt, AsciiArtMetadata};
pub use generator::{
    generate, generate_ascii, generate_with_rng, generate_with_table, GenerateOptions,
};
pub use palette::Palette;
pub use permutation::PermutationTable;
pub use sampler::{NoiseGrid, Scale};
