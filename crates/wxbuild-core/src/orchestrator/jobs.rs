//! Build parallelism.

/// Parallelism used when the CPU count can't be determined.
pub const DEFAULT_JOBS: usize = 4;

/// Parse the output of a CPU query utility (`sysctl -n hw.ncpu`, `nproc`).
///
/// Only a single positive integer is accepted.
pub fn parse_cpu_count(output: &str) -> Option<usize> {
    output.trim().parse::<usize>().ok().filter(|&n| n > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cpu_count() {
        assert_eq!(parse_cpu_count("8\n"), Some(8));
        assert_eq!(parse_cpu_count("  12  "), Some(12));
    }

    #[test]
    fn test_parse_cpu_count_rejects_garbage() {
        assert_eq!(parse_cpu_count(""), None);
        assert_eq!(parse_cpu_count("0"), None);
        assert_eq!(parse_cpu_count("-2"), None);
        assert_eq!(parse_cpu_count("sysctl: unknown oid 'hw.ncpu'"), None);
    }
}
