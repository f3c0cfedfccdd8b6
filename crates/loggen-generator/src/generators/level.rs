//! Severity levels.

use rand::Rng;
use std::fmt;

/// Severity printed after the timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// All levels, in ascending severity.
    pub const ALL: [LogLevel; 4] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
    ];

    /// Choose a level with equal probability.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    #[test]
    fn test_display() {
        assert_eq!(LogLevel::Debug.to_string(), "DEBUG");
        assert_eq!(LogLevel::Info.to_string(), "INFO");
        assert_eq!(LogLevel::Warn.to_string(), "WARN");
        assert_eq!(LogLevel::Error.to_string(), "ERROR");
    }

    #[test]
    fn test_random_is_roughly_uniform() {
        let mut rng = StdRng::seed_from_u64(42);
        let trials = 40_000;

        let mut counts: HashMap<LogLevel, u32> = HashMap::new();
        for _ in 0..trials {
            *counts.entry(LogLevel::random(&mut rng)).or_default() += 1;
        }

        assert_eq!(counts.len(), 4);
        // Expected 10_000 each; allow a generous 10% band.
        for level in LogLevel::ALL {
            let count = counts[&level];
            assert!(
                (9_000..=11_000).contains(&count),
                "{level} drawn {count} times"
            );
        }
    }
}
