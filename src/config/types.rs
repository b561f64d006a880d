// Configuration type definitions

use std::time::Duration;

use serde::Deserialize;

/// Overlay configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OverlayConfig {
    /// Delay between opening the overlay and focusing its input
    #[serde(default = "default_focus_delay_ms")]
    pub focus_delay_ms: u64,
    #[serde(default = "default_close_on_scrim")]
    pub close_on_scrim: bool,
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

fn default_focus_delay_ms() -> u64 {
    50
}

fn default_close_on_scrim() -> bool {
    true
}

fn default_placeholder() -> String {
    "Search documentation...".to_string()
}

impl OverlayConfig {
    pub fn focus_delay(&self) -> Duration {
        Duration::from_millis(self.focus_delay_ms)
    }
}

impl Default for OverlayConfig {
    fn default() -> Self {
        OverlayConfig {
            focus_delay_ms: default_focus_delay_ms(),
            close_on_scrim: default_close_on_scrim(),
            placeholder: default_placeholder(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub overlay: OverlayConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // Any focus delay written to the file is carried through unchanged
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_focus_delay_parsing(delay in 0u64..10_000) {
            let toml_content = format!(r#"
[overlay]
focus_delay_ms = {}
"#, delay);

            let config: Result<Config, _> = toml::from_str(&toml_content);
            prop_assert!(config.is_ok(), "Failed to parse focus delay: {}", delay);

            let config = config.unwrap();
            prop_assert_eq!(config.overlay.focus_delay_ms, delay);
            prop_assert_eq!(config.overlay.focus_delay(), Duration::from_millis(delay));
        }
    }

    // Missing fields fall back to their defaults independently of each other
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_missing_fields_use_defaults(
            include_section in prop::bool::ANY,
            include_delay in prop::bool::ANY,
            include_scrim in prop::bool::ANY
        ) {
            let mut toml_content = String::new();
            if include_section {
                toml_content.push_str("[overlay]\n");
                if include_delay {
                    toml_content.push_str("focus_delay_ms = 200\n");
                }
                if include_scrim {
                    toml_content.push_str("close_on_scrim = false\n");
                }
            }

            let config: Result<Config, _> = toml::from_str(&toml_content);
            prop_assert!(config.is_ok(), "Failed to parse config with missing fields");

            let overlay = config.unwrap().overlay;
            let expected_delay = if include_section && include_delay { 200 } else { 50 };
            let expected_scrim = !(include_section && include_scrim);
            prop_assert_eq!(overlay.focus_delay_ms, expected_delay);
            prop_assert_eq!(overlay.close_on_scrim, expected_scrim);
            prop_assert_eq!(overlay.placeholder, "Search documentation...");
        }
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
