use rstest::rstest;
use rust_decimal::Decimal;

use agrobrand::models::{LookupStatus, MarketChoice};
use agrobrand::pricing::{PriceResolver, PriceTable, SynonymMap};

use super::{date, record, sample_table};

fn resolver() -> PriceResolver {
    PriceResolver::new(
        SynonymMap::with_defaults(),
        vec![
            "Akure".to_string(),
            "Ibadan".to_string(),
            "Lagos".to_string(),
        ],
    )
}

#[rstest]
#[case("tomatoes", 2800, "Erekesan Market, Akure")]
#[case("Tomatoes", 2800, "Erekesan Market, Akure")]
#[case("catfish", 2200, "Shasha Market, Akure")]
#[case("YAM", 1500, "Oja Oba, Akure")]
fn verbatim_labels_resolve_to_the_exact_row(
    #[case] label: &str,
    #[case] price: i64,
    #[case] market: &str,
) {
    let result = resolver().resolve(label, &sample_table());

    assert_eq!(result.status, LookupStatus::Found);
    assert_eq!(result.price, Some(Decimal::from(price)));
    assert_eq!(result.market_label.as_deref(), Some(market));
}

#[test]
fn latest_date_always_wins() {
    // The 2025-05-10 Erekesan row beats the older, pricier Shasha row.
    let table = PriceTable::from_records(vec![
        record("Tomatoes", "Shasha Market", "kg", 3000, date(2025, 5, 1)),
        record("Tomatoes", "Erekesan Market", "kg", 2800, date(2025, 5, 10)),
    ]);
    let result = resolver().resolve("tomatoes", &table);

    assert_eq!(result.status, LookupStatus::Found);
    assert_eq!(result.market_label.as_deref(), Some("Erekesan Market"));
    assert_eq!(result.observation_date, Some(date(2025, 5, 10)));
    assert_eq!(result.price, Some(Decimal::from(2800)));
}

#[test]
fn market_priority_breaks_same_date_ties() {
    // Akure and Lagos rows on the same date: Akure is first in the
    // preference order and must always win.
    let table = PriceTable::from_records(vec![
        record("Catfish", "Mile 12, Lagos", "kg", 2100, date(2025, 5, 8)),
        record("Catfish", "Shasha Market, Akure", "kg", 2200, date(2025, 5, 8)),
    ]);

    for _ in 0..5 {
        let result = resolver().resolve("catfish", &table);
        assert_eq!(result.market_label.as_deref(), Some("Shasha Market, Akure"));
        assert_eq!(result.market_choice, Some(MarketChoice::Preferred));
    }
}

#[test]
fn too_generic_wins_over_literal_table_row() {
    let table = PriceTable::from_records(vec![record(
        "Fruit",
        "Shasha Market, Akure",
        "basket",
        900,
        date(2025, 5, 1),
    )]);
    let result = resolver().resolve("fruit", &table);

    assert_eq!(result.status, LookupStatus::TooGeneric);
}

#[test]
fn unknown_label_is_product_not_found() {
    let result = resolver().resolve("gravel", &sample_table());
    assert_eq!(result.status, LookupStatus::ProductNotFound);
}

#[test]
fn empty_table_is_data_unavailable() {
    let result = resolver().resolve("tomatoes", &PriceTable::from_records(vec![]));
    assert_eq!(result.status, LookupStatus::DataUnavailable);
}

#[test]
fn synonym_chain_reaches_substring_matches() {
    let table = PriceTable::from_records(vec![record(
        "Dried Catfish Pieces",
        "Erekesan Market, Akure",
        "kg",
        3500,
        date(2025, 5, 6),
    )]);
    // "fish" -> "Catfish" (canonical), which substring-matches the row.
    let result = resolver().resolve("fish", &table);

    assert_eq!(result.status, LookupStatus::Found);
    assert_eq!(result.product_name.as_deref(), Some("Dried Catfish Pieces"));
}

#[test]
fn no_preferred_market_falls_back_deterministically() {
    let table = PriceTable::from_records(vec![
        record("Cocoa", "Ondo State Cooperatives", "tonne", 1_500_000, date(2025, 5, 6)),
        record("Cocoa", "Abuja Exchange", "tonne", 1_550_000, date(2025, 5, 6)),
    ]);
    let result = resolver().resolve("cocoa", &table);

    assert_eq!(result.market_label.as_deref(), Some("Ondo State Cooperatives"));
    assert_eq!(result.market_choice, Some(MarketChoice::Fallback));
}
