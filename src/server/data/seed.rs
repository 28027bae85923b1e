//! Sample data loaded at startup when the store is empty.

use entity::sea_orm_active_enums::BeerStyle;
use rust_decimal::Decimal;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, TransactionTrait};

use crate::server::{
    data::{beer::BeerRepository, customer::CustomerRepository},
    model::{beer::BeerParams, customer::CustomerParams},
};

pub fn sample_beers() -> Vec<BeerParams> {
    vec![
        BeerParams {
            version: None,
            beer_name: "Galaxy Cat".to_string(),
            beer_style: BeerStyle::PaleAle,
            upc: "12356".to_string(),
            quantity_on_hand: Some(122),
            price: Decimal::new(1299, 2),
        },
        BeerParams {
            version: None,
            beer_name: "Crank".to_string(),
            beer_style: BeerStyle::PaleAle,
            upc: "12356222".to_string(),
            quantity_on_hand: Some(392),
            price: Decimal::new(1199, 2),
        },
        BeerParams {
            version: None,
            beer_name: "Sunshine City".to_string(),
            beer_style: BeerStyle::Ipa,
            upc: "12356".to_string(),
            quantity_on_hand: Some(144),
            price: Decimal::new(1399, 2),
        },
    ]
}

pub fn sample_customers() -> Vec<CustomerParams> {
    (1..=3)
        .map(|n| CustomerParams {
            version: None,
            name: format!("Customer {}", n),
            email: Some(format!("customer{}@example.com", n)),
        })
        .collect()
}

/// Inserts the sample beers and customers into empty tables.
///
/// Each table is only seeded when it holds no rows, so restarts never duplicate data.
///
/// # Returns
/// - `Ok(())` - Seeding finished (or was not needed)
/// - `Err(DbErr)` - Database error; nothing is committed
pub async fn seed_database(db: &DatabaseConnection) -> Result<(), DbErr> {
    let txn = db.begin().await?;

    if entity::prelude::Beer::find().count(&txn).await? == 0 {
        let repo = BeerRepository::new(&txn);
        for params in sample_beers() {
            repo.create(params).await?;
        }
        tracing::info!("Seeded sample beers");
    }

    if entity::prelude::Customer::find().count(&txn).await? == 0 {
        let repo = CustomerRepository::new(&txn);
        for params in sample_customers() {
            repo.create(params).await?;
        }
        tracing::info!("Seeded sample customers");
    }

    txn.commit().await
}
