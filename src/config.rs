use crate::step::Algorithm;

/// Default per-frame delay in hundredths of a second.
pub const DEFAULT_DELAY_CS: u16 = 8;

/// Default playback repeat count; 0 loops forever.
pub const DEFAULT_LOOP: u16 = 0;

/// Animation-wide encoding parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EncodeConfig {
    /// How many times playback repeats; 0 means loop forever.
    pub loop_count: u16,
    /// Display time per frame in hundredths of a second (the GIF unit).
    pub delay_cs: u16,
}

impl Default for EncodeConfig {
    fn default() -> Self {
        Self {
            loop_count: DEFAULT_LOOP,
            delay_cs: DEFAULT_DELAY_CS,
        }
    }
}

/// Parse a repeat-count option as received from the surrounding
/// collaborator. Absent or unparsable values fall back to the default
/// rather than surfacing an error.
pub fn parse_loop(raw: Option<&str>) -> u16 {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(DEFAULT_LOOP)
}

/// Parse a per-frame delay option; same fallback policy as [`parse_loop`].
pub fn parse_delay(raw: Option<&str>) -> u16 {
    raw.and_then(|s| s.trim().parse().ok())
        .unwrap_or(DEFAULT_DELAY_CS)
}

/// One animation run as described by the caller, e.g. a JSON job file.
///
/// `loop_count` and `delay` are carried as the raw option strings so the
/// lenient parsing above applies no matter where the values came from.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct RunSpec {
    #[serde(default)]
    pub algorithm: Algorithm,
    #[serde(default, rename = "loop")]
    pub loop_count: Option<String>,
    #[serde(default)]
    pub delay: Option<String>,
    /// Seed for the shuffled input; a random seed is drawn when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl RunSpec {
    pub fn encode_config(&self) -> EncodeConfig {
        EncodeConfig {
            loop_count: parse_loop(self.loop_count.as_deref()),
            delay_cs: parse_delay(self.delay.as_deref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unparsable_delay_falls_back_to_eight() {
        assert_eq!(parse_delay(Some("notanumber")), 8);
        assert_eq!(parse_delay(Some("")), 8);
        assert_eq!(parse_delay(Some("-3")), 8);
        assert_eq!(parse_delay(Some("12")), 12);
    }

    #[test]
    fn absent_loop_falls_back_to_forever() {
        assert_eq!(parse_loop(None), 0);
        assert_eq!(parse_loop(Some("two")), 0);
        assert_eq!(parse_loop(Some("4")), 4);
    }

    #[test]
    fn run_spec_json_roundtrip() {
        let spec = RunSpec {
            algorithm: Algorithm::ThreeWay,
            loop_count: Some("2".to_string()),
            delay: Some("notanumber".to_string()),
            seed: Some(9),
        };
        let s = serde_json::to_string(&spec).unwrap();
        let de: RunSpec = serde_json::from_str(&s).unwrap();
        assert_eq!(de.algorithm, Algorithm::ThreeWay);
        assert_eq!(
            de.encode_config(),
            EncodeConfig {
                loop_count: 2,
                delay_cs: 8,
            }
        );
    }

    #[test]
    fn empty_spec_uses_documented_defaults() {
        let de: RunSpec = serde_json::from_str("{}").unwrap();
        assert_eq!(de.algorithm, Algorithm::Lomuto);
        assert_eq!(de.encode_config(), EncodeConfig::default());
    }
}
