//! Cross-catalog matching scenarios.
//!
//! Exercises the pipeline the way an orchestration layer drives it: raw
//! listings in, classified entities, priority ordering, filtering, and
//! best-match selection with counterpart recording on the way out.

use std::str::FromStr;

use storematch::{
    content_type_counts, find_best_match, match_catalogs, sort_by_type_priority, CatalogEntity,
    ContentType, MatchControls, MatchJob, MatchQuality, PlatformFilter, RawListing,
};

// ─── Fixtures ─────────────────────────────────────────────────────────────

fn listing(id: &str, name: &str, code: &str) -> RawListing {
    RawListing {
        id: id.to_string(),
        name: name.to_string(),
        url: format!("https://store.example.com/product/{id}"),
        base_price: None,
        discounted_price: None,
        discount_text: None,
        platforms: vec!["PS4".to_string(), "PS5".to_string()],
        raw_classification: if code.is_empty() {
            None
        } else {
            Some(code.to_string())
        },
        localized_classification: None,
        release_date: None,
    }
}

fn entity(id: &str, name: &str, code: &str) -> CatalogEntity {
    CatalogEntity::from_listing(listing(id, name, code))
}

/// The candidate page a search for "Assassin's Creed Valhalla" returns.
fn valhalla_results() -> Vec<CatalogEntity> {
    vec![
        entity("c1", "Assassin's Creed Valhalla Season Pass", "ADD_ON"),
        entity("c2", "Assassin's Creed Valhalla", "FULL_GAME"),
        entity("c3", "Assassin's Creed Valhalla Deluxe Edition", "EDITION"),
        entity("c4", "Helix Credits Large Pack (4,200)", ""),
    ]
}

// ─── Classification on intake ─────────────────────────────────────────────

#[test]
fn listings_arrive_classified() {
    let results = valhalla_results();
    let types: Vec<ContentType> = results.iter().map(|e| e.content_type).collect();
    assert_eq!(
        types,
        vec![
            ContentType::AddOn,
            ContentType::FullGame,
            ContentType::Edition,
            ContentType::VirtualCurrency,
        ],
        "every entity should leave intake with a resolved content type"
    );
}

#[test]
fn priced_listing_carries_discount_fields() {
    let mut raw = listing("p1", "Assassin's Creed Valhalla", "FULL_GAME");
    raw.base_price = Some("69,99 €".to_string());
    raw.discounted_price = Some("27,99 €".to_string());
    raw.discount_text = Some("-60%".to_string());
    raw.release_date = Some("2020-11-10".to_string());

    let entity = CatalogEntity::from_listing(raw);
    assert_eq!(entity.price, "27,99 €");
    assert_eq!(entity.original_price.as_deref(), Some("69,99 €"));
    assert_eq!(entity.discount_percent.as_deref(), Some("60"));
    assert_eq!(entity.release_date.as_deref(), Some("10.11.2020"));
}

// ─── Priority ordering and summaries ──────────────────────────────────────

#[test]
fn result_page_sorts_full_games_first() {
    let sorted = sort_by_type_priority(valhalla_results());
    let ids: Vec<&str> = sorted.iter().map(|e| e.identifier.as_str()).collect();
    assert_eq!(
        ids,
        vec!["c2", "c3", "c1", "c4"],
        "full game, then edition, then add-on, then currency"
    );
}

#[test]
fn histogram_counts_follow_priority_order() {
    let counts = content_type_counts(&valhalla_results());
    let keys: Vec<ContentType> = counts.keys().copied().collect();
    assert_eq!(
        keys,
        vec![
            ContentType::FullGame,
            ContentType::Edition,
            ContentType::AddOn,
            ContentType::VirtualCurrency,
        ]
    );
    assert!(counts.values().all(|&n| n == 1));
}

// ─── Platform filtering ───────────────────────────────────────────────────

#[test]
fn platform_filter_narrows_cross_gen_results() {
    let mut cross_gen = listing("x1", "Gran Turismo 7", "FULL_GAME");
    cross_gen.platforms = vec!["PS4".to_string(), "PS5".to_string()];
    let mut next_gen_only = listing("x2", "Demon's Souls", "FULL_GAME");
    next_gen_only.platforms = vec!["PS5".to_string()];

    let results = vec![
        CatalogEntity::from_listing(cross_gen),
        CatalogEntity::from_listing(next_gen_only),
    ];

    let ps4 = PlatformFilter::from_str("ps4").unwrap();
    let kept: Vec<&str> = results
        .iter()
        .filter(|e| ps4.matches(e))
        .map(|e| e.identifier.as_str())
        .collect();
    assert_eq!(kept, vec!["x1"]);

    let everything = PlatformFilter::from_str("both").unwrap();
    assert_eq!(results.iter().filter(|e| everything.matches(e)).count(), 2);
}

// ─── Best-match selection ─────────────────────────────────────────────────

#[test]
fn exact_full_game_wins_over_companion_content() {
    let reference = entity("r1", "Assassin's Creed Valhalla", "FULL_GAME");
    let mut candidates = valhalla_results();

    let (best, confidence) = find_best_match(&reference, &mut candidates);
    let best = best.expect("an exact full-game candidate must be accepted");
    assert_eq!(best.identifier, "c2");
    assert_eq!(confidence, 1.0, "stacked bonuses clamp to 1.0 on acceptance");

    let winner = &candidates[1];
    assert_eq!(winner.match_confidence, 1.0);
    assert_eq!(
        winner.matched_counterpart.as_ref().unwrap().identifier,
        "r1"
    );
    assert!(
        candidates[0].matched_counterpart.is_none(),
        "losing candidates must stay untouched"
    );
}

#[test]
fn near_title_edition_is_accepted_without_a_full_game() {
    let reference = entity("r1", "Cyberpunk 2077", "FULL_GAME");
    let mut candidates = vec![entity("c1", "Cyberpunk 2077: Phantom Liberty", "EDITION")];

    let (best, confidence) = find_best_match(&reference, &mut candidates);
    assert!(best.is_some());
    assert!(
        confidence > 0.6 && confidence < 0.7,
        "shared words and the numeric bonus lift this just past the threshold, got {confidence}"
    );
}

#[test]
fn distant_companion_content_is_rejected() {
    let reference = entity("r1", "Cyberpunk 2077", "FULL_GAME");
    let mut candidates = vec![entity(
        "c1",
        "Cyberpunk 2077: Phantom Liberty Soundtrack",
        "ADD_ON",
    )];

    let (best, confidence) = find_best_match(&reference, &mut candidates);
    assert!(best.is_none());
    assert_eq!(confidence, 0.0);
    assert!(candidates[0].matched_counterpart.is_none());
}

#[test]
fn empty_candidate_page_yields_no_match() {
    let reference = entity("r1", "Bloodborne", "FULL_GAME");
    let mut candidates: Vec<CatalogEntity> = vec![];
    assert_eq!(find_best_match(&reference, &mut candidates), (None, 0.0));
}

// ─── Interchange format ───────────────────────────────────────────────────

#[test]
fn matched_entity_round_trips_through_json() {
    let reference = entity("r1", "Assassin's Creed Valhalla", "FULL_GAME");
    let mut candidates = valhalla_results();
    find_best_match(&reference, &mut candidates);

    let winner = &candidates[1];
    let json = serde_json::to_string(winner).unwrap();
    let decoded: CatalogEntity = serde_json::from_str(&json).unwrap();
    assert_eq!(&decoded, winner);

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["displayName"], "Assassin's Creed Valhalla");
    assert_eq!(value["matchConfidence"], 1.0);
    assert_eq!(
        value["matchedCounterpart"]["displayName"],
        "Assassin's Creed Valhalla"
    );
    assert_eq!(value["matchedCounterpart"]["matchedCounterpart"], serde_json::Value::Null);
}

// ─── Sweeps ───────────────────────────────────────────────────────────────

#[test]
fn sweep_report_reflects_each_job() {
    let jobs = vec![
        MatchJob {
            reference: entity("r1", "Assassin's Creed Valhalla", "FULL_GAME"),
            candidates: valhalla_results(),
        },
        MatchJob {
            reference: entity("r2", "Bloodborne", "FULL_GAME"),
            candidates: vec![entity("c9", "Unrelated Farming Sim", "FULL_GAME")],
        },
    ];

    let report = match_catalogs(jobs, &MatchControls::default());
    assert_eq!(report.summary.total, 2);
    assert_eq!(report.summary.matched, 1);
    assert_eq!(report.summary.unmatched, 1);

    let hit = &report.records[0];
    assert_eq!(hit.reference.identifier, "r1");
    assert_eq!(hit.quality, Some(MatchQuality::Strong));

    let miss = &report.records[1];
    assert!(miss.best_index.is_none());
    assert!(
        !miss.near_misses.is_empty(),
        "rejected jobs should keep their closest candidates for review"
    );
}
