//! Property-based tests for the configuration system.

use super::merger::ConfigMerger;
use super::options::IndexerOptions;
use super::schema::Config;
use proptest::prelude::*;

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of("data-[a-z]{1,10}"),
        prop::option::of("[/.:-]{1,2}"),
        prop::option::of(any::<bool>()),
        prop::option::of("[\\[(:_]{1,2}"),
        prop::option::of("[\\])]{0,1}"),
    )
        .prop_map(
            |(input_attribute, separator, force_index, index_prefix, index_suffix)| Config {
                input_attribute,
                separator,
                force_index,
                index_prefix,
                index_suffix,
                ..Default::default()
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        max_shrink_iters: 2000,
        .. ProptestConfig::default()
    })]

    // Merging preserves non-None values from the higher layer
    #[test]
    fn config_merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut result = low.clone();
        ConfigMerger::merge_into(&mut result, &high);

        prop_assert_eq!(result.separator, high.separator.or(low.separator));
        prop_assert_eq!(result.force_index, high.force_index.or(low.force_index));
        prop_assert_eq!(result.index_prefix, high.index_prefix.or(low.index_prefix));
        prop_assert_eq!(result.index_suffix, high.index_suffix.or(low.index_suffix));
    }

    // Merging a config into itself changes nothing
    #[test]
    fn config_merge_idempotent(config in config_strategy()) {
        let mut result = config.clone();
        ConfigMerger::merge_into(&mut result, &config);
        prop_assert_eq!(result, config);
    }

    // Any index written with a valid grammar splits back into base and index
    #[test]
    fn valid_grammar_splits_formatted_segments(
        config in config_strategy(),
        base in "[a-zA-Z][a-zA-Z0-9-]{0,12}",
        index in 0usize..10_000,
    ) {
        if let Ok(options) = IndexerOptions::from_config(&config) {
            let segment = options.format_segment(&base, index);
            prop_assert_eq!(options.split_segment(&segment), (base.as_str(), Some(index)));
        }
    }
}
