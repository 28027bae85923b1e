use super::*;

/// Tests the case-insensitive name filter.
///
/// Verifies that filtering by "IPA" matches names containing "ipa" in any case
/// and nothing else.
///
/// Expected: Ok with only the matching beers
#[tokio::test]
async fn filters_by_name_case_insensitively() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Hazy IPA", "Session ipa", "Galaxy Cat", "Dipa Double"] {
        factory::beer::BeerFactory::new(db)
            .beer_name(name)
            .build()
            .await?;
    }

    let repo = BeerRepository::new(db);
    let filter = BeerFilter {
        beer_name: Some("IPA".to_string()),
        ..Default::default()
    };
    let (beers, total) = repo.get_paginated(&filter, PageRequest::default()).await?;

    assert_eq!(total, 3);
    assert!(beers
        .iter()
        .all(|b| b.beer_name.to_lowercase().contains("ipa")));

    Ok(())
}

/// Tests that the name filter folds ASCII case only and treats wildcards literally.
///
/// Expected: "äpfel" misses "Äpfel Weisse", "Äpfel" hits it, "p_h" hits only "Hop_Head"
#[tokio::test]
async fn name_filter_is_ascii_case_insensitive_substring() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Äpfel Weisse", "Hop_Head", "Hop Head"] {
        factory::beer::BeerFactory::new(db)
            .beer_name(name)
            .build()
            .await?;
    }

    let repo = BeerRepository::new(db);
    let names = |beer_name: &str| BeerFilter {
        beer_name: Some(beer_name.to_string()),
        ..Default::default()
    };

    let (_, total) = repo.get_paginated(&names("äpfel"), PageRequest::default()).await?;
    assert_eq!(total, 0);

    let (beers, _) = repo.get_paginated(&names("Äpfel WEISSE"), PageRequest::default()).await?;
    assert_eq!(beers.len(), 1);
    assert_eq!(beers[0].beer_name, "Äpfel Weisse");

    let (beers, _) = repo.get_paginated(&names("p_h"), PageRequest::default()).await?;
    assert_eq!(beers.len(), 1);
    assert_eq!(beers[0].beer_name, "Hop_Head");

    let (_, total) = repo.get_paginated(&names("%"), PageRequest::default()).await?;
    assert_eq!(total, 0);

    Ok(())
}

/// Tests filtering by style together with name.
///
/// Expected: Ok with only the beer matching both criteria
#[tokio::test]
async fn filters_by_style_and_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::beer::BeerFactory::new(db)
        .beer_name("Hazy IPA")
        .beer_style(BeerStyle::Ipa)
        .build()
        .await?;
    factory::beer::BeerFactory::new(db)
        .beer_name("Not an IPA")
        .beer_style(BeerStyle::Stout)
        .build()
        .await?;

    let repo = BeerRepository::new(db);
    let filter = BeerFilter {
        beer_name: Some("ipa".to_string()),
        beer_style: Some(BeerStyle::Ipa),
        show_inventory: true,
    };
    let (beers, total) = repo.get_paginated(&filter, PageRequest::default()).await?;

    assert_eq!(total, 1);
    assert_eq!(beers[0].beer_name, "Hazy IPA");

    Ok(())
}

/// Tests paging through beers ordered by name.
///
/// Expected: Ok with the second page holding the third name and total 3
#[tokio::test]
async fn pages_results_in_name_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Charlie", "Alpha", "Bravo"] {
        factory::beer::BeerFactory::new(db)
            .beer_name(name)
            .build()
            .await?;
    }

    let repo = BeerRepository::new(db);
    let (beers, total) = repo
        .get_paginated(&BeerFilter::default(), PageRequest::new(Some(2), Some(2)))
        .await?;

    assert_eq!(total, 3);
    assert_eq!(beers.len(), 1);
    assert_eq!(beers[0].beer_name, "Charlie");

    Ok(())
}
