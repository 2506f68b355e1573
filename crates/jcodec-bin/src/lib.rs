//! Shared plumbing for the `compressor` and `decompressor` binaries.

use log::LevelFilter;

/// Install the workspace's logger, honoring `-v`/`-vv` and falling back to
/// `RUST_LOG` when neither flag is set.
///
/// `verbosity` is the number of times `-v` was passed: 0 keeps the default
/// (warnings and errors only), 1 raises it to info, 2 or more to debug.
pub fn init_logger(verbosity: u8) {
    let default_level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug
    };

    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_env("RUST_LOG")
        .init();
}

/// Percentage by which `output_len` is smaller than `input_len`, matching
/// the source tool's `fsize()`-based compression ratio report.
pub fn compression_ratio(input_len: u64, output_len: u64) -> f64 {
    if input_len == 0 {
        return 0.0;
    }
    (1.0 - output_len as f64 / input_len as f64) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_is_zero_when_sizes_match() {
        assert!((compression_ratio(100, 100) - 0.0).abs() < 1e-9);
    }

    #[test]
    fn ratio_is_positive_when_output_is_smaller() {
        assert!(compression_ratio(1000, 250) > 0.0);
    }

    #[test]
    fn ratio_handles_an_empty_input_without_dividing_by_zero() {
        assert_eq!(compression_ratio(0, 0), 0.0);
    }
}
