#![cfg(feature = "serde")]

use ai_search::GraphSearchConfig;

#[test]
fn graph_search_config_roundtrips_via_serde() {
    let config = GraphSearchConfig::default().with_max_expansions(512);

    let json = serde_json::to_string(&config).expect("serialize config");
    let back: GraphSearchConfig = serde_json::from_str(&json).expect("deserialize config");

    assert_eq!(config, back);
    assert_eq!(back.max_expansions, Some(512));
}
