use rusqlite::Connection;
use spotfinder_core::db::{initialize_db_in_memory, open_db_in_memory};
use spotfinder_core::{
    search_by_address, AddressQuery, Location, LocationRepository, MatchMode,
    SqliteLocationRepository,
};
use std::collections::HashSet;

fn addresses(locations: &[Location]) -> Vec<&str> {
    locations.iter().map(|loc| loc.address.as_str()).collect()
}

fn insert_all(conn: &Connection, names: &[&str]) {
    let repo = SqliteLocationRepository::try_new(conn).unwrap();
    for name in names {
        repo.create_location(&Location::new(*name, 0.0, 0.0)).unwrap();
    }
}

#[test]
fn search_is_case_insensitive_and_unanchored() {
    let conn = open_db_in_memory().unwrap();
    insert_all(
        &conn,
        &["Union Station, Toronto", "Unionville Main Street", "Toronto Zoo"],
    );

    let hits = search_by_address(&conn, &AddressQuery::new("UNION")).unwrap();
    assert_eq!(
        addresses(&hits),
        vec!["Union Station, Toronto", "Unionville Main Street"]
    );

    let middle = search_by_address(&conn, &AddressQuery::new("main st")).unwrap();
    assert_eq!(addresses(&middle), vec!["Unionville Main Street"]);
}

#[test]
fn empty_text_matches_every_record_in_list_order() {
    let (conn, _) = initialize_db_in_memory().unwrap();
    let repo = SqliteLocationRepository::try_new(&conn).unwrap();

    let all = repo.list_locations().unwrap();
    let searched = repo.search_locations("").unwrap();
    assert_eq!(searched, all);
}

#[test]
fn search_matches_filtered_list_over_seed_data() {
    let (conn, _) = initialize_db_in_memory().unwrap();
    let repo = SqliteLocationRepository::try_new(&conn).unwrap();
    let all = repo.list_locations().unwrap();

    for text in ["toronto", "PARK", "go station", "'s", "zzz"] {
        let needle = text.to_lowercase();
        let expected: Vec<_> = all
            .iter()
            .filter(|loc| loc.address.to_lowercase().contains(&needle))
            .cloned()
            .collect();

        assert_eq!(repo.search_locations(text).unwrap(), expected, "query `{text}`");
    }
}

#[test]
fn literal_mode_treats_wildcards_as_text() {
    let conn = open_db_in_memory().unwrap();
    insert_all(&conn, &["100% Park", "1000 Park", "A_B Plaza", "AXB Plaza"]);

    let percent = search_by_address(&conn, &AddressQuery::new("0%")).unwrap();
    assert_eq!(addresses(&percent), vec!["100% Park"]);

    let underscore = search_by_address(&conn, &AddressQuery::new("_")).unwrap();
    assert_eq!(addresses(&underscore), vec!["A_B Plaza"]);
}

#[test]
fn pattern_mode_passes_wildcards_through() {
    let conn = open_db_in_memory().unwrap();
    insert_all(&conn, &["100% Park", "1000 Park", "A_B Plaza", "AXB Plaza"]);

    let query = AddressQuery {
        match_mode: MatchMode::Pattern,
        ..AddressQuery::new("A_B")
    };
    let hits = search_by_address(&conn, &query).unwrap();
    assert_eq!(addresses(&hits), vec!["AXB Plaza", "A_B Plaza"]);
}

#[test]
fn limit_caps_result_count() {
    let (conn, _) = initialize_db_in_memory().unwrap();

    let limited = AddressQuery {
        limit: Some(3),
        ..AddressQuery::new("park")
    };
    let hits = search_by_address(&conn, &limited).unwrap();
    assert_eq!(hits.len(), 3);

    let zero = AddressQuery {
        limit: Some(0),
        ..AddressQuery::new("park")
    };
    assert!(search_by_address(&conn, &zero).unwrap().is_empty());
}

#[test]
fn search_reflects_updates_and_deletes() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteLocationRepository::try_new(&conn).unwrap();
    let id = repo
        .create_location(&Location::new("Alpha Park", 1.0, 1.0))
        .unwrap();

    repo.update_location(&Location::with_id(id, "Beta Park", 1.0, 1.0))
        .unwrap();
    assert!(repo.search_locations("alpha").unwrap().is_empty());
    assert_eq!(repo.search_locations("beta").unwrap().len(), 1);

    repo.delete_location(id).unwrap();
    assert!(repo.search_locations("beta").unwrap().is_empty());
}

#[test]
fn search_results_have_no_duplicates() {
    let (conn, _) = initialize_db_in_memory().unwrap();
    let hits = search_by_address(&conn, &AddressQuery::new("a")).unwrap();

    let ids: HashSet<_> = hits.iter().map(|loc| loc.id).collect();
    assert_eq!(ids.len(), hits.len());
}
