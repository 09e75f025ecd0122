//! Property-based tests for configuration system.

use super::merger::ConfigMerger;
use super::schema::{Config, HoursConfig, OutputFormat};
use super::validator::ConfigValidator;
use proptest::prelude::*;

fn time_strategy() -> impl Strategy<Value = String> {
    (0u16..24, 0u16..60).prop_map(|(h, m)| format!("{h:02}:{m:02}"))
}

fn hours_strategy() -> impl Strategy<Value = HoursConfig> {
    (
        prop::option::of(time_strategy()),
        prop::option::of(time_strategy()),
        prop::option::of(1u16..=240),
    )
        .prop_map(|(open, close, step_minutes)| HoursConfig {
            open,
            close,
            step_minutes,
        })
}

fn format_strategy() -> impl Strategy<Value = OutputFormat> {
    prop_oneof![
        Just(OutputFormat::Table),
        Just(OutputFormat::Json),
        Just(OutputFormat::Csv),
    ]
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(1u32..100),
        prop::option::of(hours_strategy()),
        prop::option::of("[a-z]{1,10}:v[0-9]"),
        prop::option::of(1u64..60),
        prop::option::of(format_strategy()),
        prop::option::of(any::<bool>()),
    )
        .prop_map(
            |(max_tables, hours, storage_key, wait, output_format, disable_autoinit)| Config {
                max_tables,
                hours,
                storage_key,
                maximum_lock_wait_seconds: wait,
                output_format,
                disable_autoinit,
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // A value set in the higher-precedence source always wins
    #[test]
    fn merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut result = low.clone();
        ConfigMerger::merge_into(&mut result, &high);

        prop_assert_eq!(result.max_tables, high.max_tables.or(low.max_tables));
        prop_assert_eq!(result.storage_key.as_ref(), high.storage_key.as_ref().or(low.storage_key.as_ref()));
        prop_assert_eq!(result.output_format, high.output_format.or(low.output_format));
        prop_assert_eq!(result.disable_autoinit, high.disable_autoinit.or(low.disable_autoinit));

        let step = high.hours.as_ref().and_then(|h| h.step_minutes)
            .or_else(|| low.hours.as_ref().and_then(|h| h.step_minutes));
        prop_assert_eq!(result.hours.as_ref().and_then(|h| h.step_minutes), step);
    }

    // Merging a config into itself changes nothing
    #[test]
    fn merge_is_idempotent(config in config_strategy()) {
        let mut result = config.clone();
        ConfigMerger::merge_into(&mut result, &config);
        prop_assert_eq!(result, config);
    }

    // YAML round trip preserves the config
    #[test]
    fn yaml_round_trip(config in config_strategy()) {
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        prop_assert_eq!(parsed, config);
    }

    // Validation accepts exactly the configs whose schedule can be built
    #[test]
    fn validation_matches_schedule(config in config_strategy()) {
        let valid = ConfigValidator::validate(&config).is_ok();
        prop_assert_eq!(valid, config.schedule().is_ok());
    }
}
