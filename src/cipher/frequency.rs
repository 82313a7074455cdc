//! Letter-frequency extraction and chi-squared scoring.

/// Reference English letter frequencies, in percent, A through Z.
pub const ENGLISH_FREQUENCIES: [f64; 26] = [
    8.17, 1.49, 2.78, 4.25, 12.70, 2.23, 2.02, 6.09, 6.97, 0.15, 0.77, 4.03, 2.41, 6.75, 7.51,
    1.93, 0.10, 5.99, 6.33, 9.06, 2.76, 0.98, 2.36, 0.15, 1.97, 0.07,
];

/// Observed letter frequencies of a text, in percent, A through Z.
///
/// Case-insensitive; non-ASCII-alphabetic characters are ignored. A
/// text with no letters yields all zeros.
pub fn letter_frequencies(text: &str) -> [f64; 26] {
    let mut counts = [0u64; 26];
    let mut total = 0u64;
    for ch in text.chars() {
        if ch.is_ascii_alphabetic() {
            counts[(ch.to_ascii_uppercase() as u8 - b'A') as usize] += 1;
            total += 1;
        }
    }

    let mut frequencies = [0.0; 26];
    if total > 0 {
        for (frequency, &count) in frequencies.iter_mut().zip(counts.iter()) {
            *frequency = count as f64 / total as f64 * 100.0;
        }
    }
    frequencies
}

/// Chi-squared distance between observed frequencies and English.
///
/// `sum((observed - expected)^2 / expected)` over all 26 letters; lower
/// means closer to English letter statistics.
pub fn english_chi_squared(observed: &[f64; 26]) -> f64 {
    observed
        .iter()
        .zip(ENGLISH_FREQUENCIES.iter())
        .map(|(&o, &e)| (o - e) * (o - e) / e)
        .sum()
}
