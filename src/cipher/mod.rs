//! Caesar cipher and letter-frequency cryptanalysis.
//!
//! A shift cipher over the ASCII alphabet plus the chi-squared
//! frequency machinery that breaks it: observed letter frequencies are
//! scored against reference English frequencies, and the shift whose
//! decoding scores lowest wins.

mod caesar;
mod frequency;

pub use caesar::{auto_decode, brute_force, transform, AutoDecoded};
pub use frequency::{english_chi_squared, letter_frequencies, ENGLISH_FREQUENCIES};
