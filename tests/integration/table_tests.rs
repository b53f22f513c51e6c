use rust_decimal::Decimal;

use agrobrand::pricing::PriceTable;

use super::{date, temp_csv};

#[test]
fn loads_reference_table_from_disk() {
    let file = temp_csv(
        "date,market,product,unit,price\n\
         2025-05-01,\"Shasha Market, Akure\",Tomatoes,kg,3000\n\
         2025-05-10,\"Erekesan Market, Akure\",Tomatoes,kg,\"\u{20a6}2,800\"\n",
    );

    let table = PriceTable::from_path(file.path()).unwrap();

    assert_eq!(table.len(), 2);
    assert_eq!(table.records()[1].price, Decimal::from(2800));
    assert_eq!(table.records()[1].observation_date, date(2025, 5, 10));
}

#[test]
fn aliased_headers_load_the_same_table() {
    let file = temp_csv(
        "observation_date,location,commodity,uom,unit_price\n\
         01/05/2025,Oja Oba,Yam,tuber,1500\n",
    );

    let table = PriceTable::from_path(file.path()).unwrap();

    assert_eq!(table.len(), 1);
    let rec = &table.records()[0];
    assert_eq!(rec.product_name, "Yam");
    assert_eq!(rec.market_name, "Oja Oba");
    assert_eq!(rec.observation_date, date(2025, 5, 1));
}

#[test]
fn malformed_rows_are_dropped_not_fatal() {
    let file = temp_csv(
        "date,market,product,unit,price\n\
         2025-05-01,Shasha Market,Tomatoes,kg,3000\n\
         2025-05-02,Shasha Market,Catfish,kg,market closed\n\
         not-a-date,Shasha Market,Yam,tuber,1500\n",
    );

    let table = PriceTable::from_path(file.path()).unwrap();

    assert_eq!(table.len(), 1);
    assert_eq!(table.rows_read(), 3);
    assert_eq!(table.row_errors().len(), 2);
}

#[test]
fn missing_file_is_a_clear_error() {
    let result = PriceTable::from_path("/nonexistent/reference.csv");

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("reference table"));
}
