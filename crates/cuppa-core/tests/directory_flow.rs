//! End-to-end flow over the pure core: filter the catalog, open the
//! detail overlay for a result, dismiss it, and let the close run out.

use cuppa_core::{Cafe, CafeFilters, CloseRequest, OverlayPhase, OverlayState, parse_catalog};

const CATALOG: &str = r#"[
    {
        "id": 1,
        "name": "Login Lounge",
        "slug": "login-lounge",
        "location": "Camberley",
        "address": "1 High St, Camberley, GU15 3SY",
        "image": "img/cafe-img-1.jpg",
        "ratings": {
            "flat_white": 1,
            "cappuccino": 2,
            "americano": 3,
            "double_espresso": 3,
            "iced_latte": 2
        },
        "comments": []
    },
    {
        "id": 2,
        "name": "Mullans",
        "slug": "mullans",
        "location": "Frimley",
        "address": "34 High St, Frimley, GU16 7HG",
        "image": "img/cafe-img-1.jpg",
        "ratings": {
            "flat_white": 4,
            "cappuccino": 5,
            "americano": 4,
            "double_espresso": 5,
            "iced_latte": 3
        },
        "comments": []
    }
]"#;

fn restrict_location(filters: &mut CafeFilters, location: &str) {
    filters.locations = [location].into_iter().collect();
}

#[test]
fn filter_then_open_then_dismiss() {
    let cafes = parse_catalog(CATALOG).expect("catalog parses");

    // Restrict the location filter to Camberley, leave the rest seeded.
    let mut filters = CafeFilters::seeded(&cafes);
    restrict_location(&mut filters, "Camberley");
    let visible = filters.apply(&cafes);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].name, "Login Lounge");

    // Select the remaining card: the overlay mounts, then becomes visible
    // one tick later.
    let mut overlay: OverlayState<Cafe> = OverlayState::new();
    overlay.open(visible[0].clone());
    assert_eq!(overlay.phase(), OverlayPhase::Rendering);
    assert!(overlay.mark_visible());
    assert_eq!(overlay.phase(), OverlayPhase::Visible);
    assert_eq!(
        overlay.subject().map(|c| c.slug.as_str()),
        Some("login-lounge")
    );

    // Escape: close begins, the exit animation plays.
    let token = match overlay.request_close() {
        CloseRequest::Begun { fallback } => fallback,
        CloseRequest::Ignored => panic!("close should begin"),
    };
    assert_eq!(overlay.phase(), OverlayPhase::Closing);

    // The close duration elapses without a transition-end notification;
    // the fallback timer finishes the close and clears the subject.
    assert!(overlay.fallback_elapsed(token));
    assert_eq!(overlay.phase(), OverlayPhase::Closed);
    assert!(overlay.subject().is_none());
}

#[test]
fn reopen_during_close_targets_the_new_cafe() {
    let cafes = parse_catalog(CATALOG).expect("catalog parses");

    let mut overlay: OverlayState<Cafe> = OverlayState::new();
    overlay.open(cafes[0].clone());
    overlay.mark_visible();
    let stale = match overlay.request_close() {
        CloseRequest::Begun { fallback } => fallback,
        CloseRequest::Ignored => panic!("close should begin"),
    };

    // Before the fallback elapses the user picks the other café.
    overlay.open(cafes[1].clone());
    overlay.mark_visible();
    assert_eq!(overlay.phase(), OverlayPhase::Visible);
    assert_eq!(overlay.subject().map(|c| c.id), Some(2));

    // The interrupted close's timer never acts on the new subject.
    assert!(!overlay.fallback_elapsed(stale));
    assert_eq!(overlay.phase(), OverlayPhase::Visible);
    assert_eq!(overlay.subject().map(|c| c.id), Some(2));
}

#[test]
fn filters_never_reorder_or_mutate_the_catalog() {
    let cafes = parse_catalog(CATALOG).expect("catalog parses");
    let snapshot = cafes.clone();

    let filters = CafeFilters::seeded(&cafes);
    let all = filters.apply(&cafes);
    let ids: Vec<u32> = all.iter().map(|c| c.id).collect();
    assert_eq!(ids, [1, 2]);
    assert_eq!(cafes, snapshot);

    // Strict policy: an emptied attribute hides every café.
    let strict = CafeFilters {
        names: cuppa_core::SelectionSet::new(),
        ..filters
    };
    assert!(strict.apply(&cafes).is_empty());
    assert_eq!(cafes, snapshot);
}

#[test]
fn overall_rating_bucket_drives_the_rating_filter() {
    let cafes = parse_catalog(CATALOG).expect("catalog parses");
    // Login Lounge averages 2.2 -> "2 Stars"; Mullans averages 4.2 -> "4 Stars".
    let mut filters = CafeFilters::seeded(&cafes);
    filters.ratings = ["4 Stars"].into_iter().collect();
    let visible = filters.apply(&cafes);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].name, "Mullans");
}
