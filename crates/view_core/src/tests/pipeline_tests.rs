use super::*;

fn country(name: &str, region: &str, population: u64, area: f64) -> Country {
    Country {
        name: name.to_string(),
        region: region.to_string(),
        population,
        area,
        flag_url: format!("https://flagcdn.com/w320/{}.png", name.to_lowercase()),
    }
}

/// 41 records: five in Europe (Azerbaijan among them), the rest spread
/// across Asia and Africa.
fn sample_dataset() -> Vec<Country> {
    let mut countries = vec![
        country("Albania", "Europe", 2_837_743, 28_748.0),
        country("Andorra", "Europe", 77_265, 468.0),
        country("Azerbaijan", "Europe", 10_110_116, 86_600.0),
        country("Austria", "Europe", 8_917_205, 83_871.0),
        country("Belgium", "Europe", 11_555_997, 30_528.0),
        country("Afghanistan", "Asia", 40_218_234, 652_230.0),
        country("Algeria", "Africa", 44_700_000, 2_381_741.0),
        country("Angola", "Africa", 32_866_268, 1_246_700.0),
    ];
    for i in countries.len()..41 {
        let region = if i % 2 == 0 { "Asia" } else { "Africa" };
        countries.push(country(
            &format!("Land {i:02}"),
            region,
            (i as u64) * 1_000,
            (i as f64) * 10.0,
        ));
    }
    countries
}

fn names(countries: &[&Country]) -> Vec<String> {
    countries.iter().map(|country| country.name.clone()).collect()
}

#[test]
fn no_controls_keeps_fetched_order_minus_exclusion() {
    let dataset = sample_dataset();
    let filtered = filter_countries(&dataset, &ViewState::default(), &ViewOptions::default());

    assert_eq!(filtered.len(), 40);
    let expected: Vec<String> = dataset
        .iter()
        .filter(|country| country.name != "Azerbaijan")
        .map(|country| country.name.clone())
        .collect();
    assert_eq!(names(&filtered), expected);
}

#[test]
fn search_is_case_insensitive_substring() {
    let dataset = sample_dataset();
    let state = ViewState {
        search_text: "AN".to_string(),
        ..ViewState::default()
    };

    let filtered = filter_countries(&dataset, &state, &ViewOptions::default());
    assert!(!filtered.is_empty());
    for country in &filtered {
        assert!(
            country.name.to_lowercase().contains("an"),
            "{} should match",
            country.name
        );
    }
    assert!(names(&filtered).contains(&"Andorra".to_string()));
    assert!(names(&filtered).contains(&"Afghanistan".to_string()));
    assert!(!names(&filtered).contains(&"Belgium".to_string()));
}

#[test]
fn search_matches_non_ascii_names() {
    let dataset = vec![
        country("Åland Islands", "Europe", 28_875, 1_580.0),
        country("Côte d'Ivoire", "Africa", 26_378_275, 322_463.0),
    ];
    let state = ViewState {
        search_text: "åland".to_string(),
        ..ViewState::default()
    };

    let filtered = filter_countries(&dataset, &state, &ViewOptions::default());
    assert_eq!(names(&filtered), vec!["Åland Islands"]);
}

#[test]
fn search_without_matches_is_empty() {
    let dataset = sample_dataset();
    let state = ViewState {
        search_text: "zzz".to_string(),
        ..ViewState::default()
    };

    assert!(filter_countries(&dataset, &state, &ViewOptions::default()).is_empty());
}

#[test]
fn region_filter_is_exact() {
    let dataset = sample_dataset();
    let state = ViewState {
        selected_region: Some("Europe".to_string()),
        ..ViewState::default()
    };

    let filtered = filter_countries(&dataset, &state, &ViewOptions::default());
    assert_eq!(
        names(&filtered),
        vec!["Albania", "Andorra", "Austria", "Belgium"]
    );
    assert!(filtered.iter().all(|country| country.region == "Europe"));

    let lowercase = ViewState {
        selected_region: Some("europe".to_string()),
        ..ViewState::default()
    };
    assert!(filter_countries(&dataset, &lowercase, &ViewOptions::default()).is_empty());
}

#[test]
fn empty_region_means_no_filter() {
    let dataset = sample_dataset();
    let state = ViewState {
        selected_region: Some(String::new()),
        ..ViewState::default()
    };

    assert_eq!(
        filter_countries(&dataset, &state, &ViewOptions::default()).len(),
        40
    );
}

#[test]
fn excluded_name_never_appears() {
    let dataset = sample_dataset();
    let states = [
        ViewState::default(),
        ViewState {
            search_text: "azer".to_string(),
            ..ViewState::default()
        },
        ViewState {
            selected_region: Some("Europe".to_string()),
            sort_key: SortKey::Area,
            ..ViewState::default()
        },
    ];

    for state in &states {
        let filtered = filter_countries(&dataset, state, &ViewOptions::default());
        assert!(
            filtered.iter().all(|country| country.name != "Azerbaijan"),
            "excluded name leaked for {state:?}"
        );
    }
}

#[test]
fn exclusion_can_be_disabled() {
    let dataset = sample_dataset();
    let options = ViewOptions {
        excluded_name: None,
        ..ViewOptions::default()
    };
    let state = ViewState {
        search_text: "azer".to_string(),
        ..ViewState::default()
    };

    assert_eq!(
        names(&filter_countries(&dataset, &state, &options)),
        vec!["Azerbaijan"]
    );
}

#[test]
fn population_sort_is_ascending() {
    let dataset = sample_dataset();
    let state = ViewState {
        selected_region: Some("Europe".to_string()),
        sort_key: SortKey::Population,
        ..ViewState::default()
    };

    let filtered = filter_countries(&dataset, &state, &ViewOptions::default());
    assert_eq!(
        names(&filtered),
        vec!["Andorra", "Albania", "Austria", "Belgium"]
    );
    assert!(filtered
        .windows(2)
        .all(|pair| pair[0].population <= pair[1].population));
}

#[test]
fn area_sort_is_ascending() {
    let dataset = sample_dataset();
    let state = ViewState {
        sort_key: SortKey::Area,
        ..ViewState::default()
    };

    let filtered = filter_countries(&dataset, &state, &ViewOptions::default());
    assert!(filtered.windows(2).all(|pair| pair[0].area <= pair[1].area));
    assert_eq!(filtered.last().map(|country| country.name.as_str()), Some("Algeria"));
}

#[test]
fn sort_is_stable_for_equal_keys() {
    let dataset = vec![
        country("Charlie", "Asia", 5, 1.0),
        country("Alpha", "Asia", 1, 1.0),
        country("Bravo", "Asia", 5, 1.0),
        country("Delta", "Asia", 5, 0.5),
    ];

    let by_population = filter_countries(
        &dataset,
        &ViewState {
            sort_key: SortKey::Population,
            ..ViewState::default()
        },
        &ViewOptions::default(),
    );
    assert_eq!(
        names(&by_population),
        vec!["Alpha", "Charlie", "Bravo", "Delta"]
    );

    let by_area = filter_countries(
        &dataset,
        &ViewState {
            sort_key: SortKey::Area,
            ..ViewState::default()
        },
        &ViewOptions::default(),
    );
    assert_eq!(names(&by_area), vec!["Delta", "Charlie", "Alpha", "Bravo"]);
}

#[test]
fn removed_names_are_skipped() {
    let dataset = sample_dataset();
    let mut state = ViewState::default();
    state.removed.insert("Andorra".to_string());

    let filtered = filter_countries(&dataset, &state, &ViewOptions::default());
    assert_eq!(filtered.len(), 39);
    assert!(!names(&filtered).contains(&"Andorra".to_string()));
}

#[test]
fn empty_dataset_filters_to_nothing() {
    let state = ViewState {
        search_text: "a".to_string(),
        sort_key: SortKey::Population,
        ..ViewState::default()
    };

    assert!(filter_countries(&[], &state, &ViewOptions::default()).is_empty());
}
