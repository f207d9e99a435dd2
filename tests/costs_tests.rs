use eventline::costs::{generate_cost_breakdown, guest_multiplier, quality_multiplier};
use eventline::models::VendorCategory;

#[test]
fn test_percentages_sum_to_exactly_100() {
    for event_type in ["Lebanese Wedding", "Corporate Conference", "Birthday Party", "Charity Gala"] {
        for guests in [10, 50, 100, 151, 200, 500] {
            let breakdown = generate_cost_breakdown(25_000.0, guests, event_type);
            let total: u32 = breakdown.iter().map(|i| i.percentage).sum();
            assert_eq!(total, 100, "{} with {} guests", event_type, guests);
        }
    }
}

#[test]
fn test_venue_share_by_event_type() {
    let venues_pct = |event_type: &str| {
        generate_cost_breakdown(10_000.0, 100, event_type)
            .into_iter()
            .find(|i| i.category == VendorCategory::Venues)
            .unwrap()
            .percentage
    };
    assert_eq!(venues_pct("Lebanese Wedding"), 35);
    assert_eq!(venues_pct("Corporate Conference"), 25);
    assert_eq!(venues_pct("Birthday Party"), 30);
}

#[test]
fn test_corporate_shifts_weight_to_entertainment() {
    let breakdown = generate_cost_breakdown(10_000.0, 100, "Corporate Conference");
    let pct = |cat: VendorCategory| {
        breakdown
            .iter()
            .find(|i| i.category == cat)
            .unwrap()
            .percentage
    };
    assert_eq!(pct(VendorCategory::Entertainment), 20);
    assert_eq!(pct(VendorCategory::PhotographyAndVideography), 8);
}

#[test]
fn test_guest_multiplier_bands() {
    assert_eq!(guest_multiplier(1, None), 0.8);
    assert_eq!(guest_multiplier(50, None), 0.8);
    assert_eq!(guest_multiplier(51, None), 1.0);
    assert_eq!(guest_multiplier(100, None), 1.0);
    assert_eq!(guest_multiplier(101, None), 1.3);
    assert_eq!(guest_multiplier(200, None), 1.3);
    assert_eq!(guest_multiplier(201, None), 1.6);
}

#[test]
fn test_large_event_boundary_is_strict() {
    // 150 guests is NOT large: no venue boost on top of the band.
    assert_eq!(guest_multiplier(150, Some(VendorCategory::Venues)), 1.3);
    // 151 is large.
    let boosted = guest_multiplier(151, Some(VendorCategory::Venues));
    assert!((boosted - 1.3 * 1.2).abs() < 1e-9);
}

#[test]
fn test_category_adjustments() {
    // Catering scales with headcount regardless of size.
    let catering = guest_multiplier(100, Some(VendorCategory::CateringAndSweets));
    assert!((catering - 1.1).abs() < 1e-9);

    // Photography is capped at 1.3 however big the event gets.
    assert_eq!(
        guest_multiplier(500, Some(VendorCategory::PhotographyAndVideography)),
        1.3
    );
    assert_eq!(
        guest_multiplier(40, Some(VendorCategory::PhotographyAndVideography)),
        0.8
    );

    // Entertainment gets a boost only when large.
    let ent = guest_multiplier(200, Some(VendorCategory::Entertainment));
    assert!((ent - 1.3 * 1.15).abs() < 1e-9);
    assert_eq!(guest_multiplier(100, Some(VendorCategory::Entertainment)), 1.0);
}

#[test]
fn test_quality_multiplier() {
    assert_eq!(quality_multiplier("Lebanese Wedding"), 1.4);
    assert_eq!(quality_multiplier("Corporate Conference"), 1.2);
    assert_eq!(quality_multiplier("Product Conference"), 1.2);
    assert_eq!(quality_multiplier("Birthday Party"), 1.0);
    assert_eq!(quality_multiplier("Charity Gala"), 1.0);
}

#[test]
fn test_recommended_never_below_estimated() {
    for event_type in ["Lebanese Wedding", "Corporate Conference", "Baby Shower"] {
        for guests in [30, 120, 300] {
            for item in generate_cost_breakdown(15_000.0, guests, event_type) {
                assert!(
                    item.recommended_cost >= item.estimated_cost,
                    "{} / {:?}",
                    event_type,
                    item.category
                );
                assert!(item.estimated_cost >= 0.0);
            }
        }
    }
}

#[test]
fn test_wedding_venue_allocation_values() {
    // 30000 budget, 200 guests: venues base 35% = 10500, band 1.3 with
    // the large-event venue boost 1.2 -> 16380; recommended x1.4.
    let breakdown = generate_cost_breakdown(30_000.0, 200, "Lebanese Wedding");
    let venues = breakdown
        .iter()
        .find(|i| i.category == VendorCategory::Venues)
        .unwrap();
    assert_eq!(venues.estimated_cost, 16_380.0);
    assert_eq!(venues.recommended_cost, 22_932.0);
}

#[test]
fn test_breakdown_rounds_to_whole_units() {
    for item in generate_cost_breakdown(9_999.0, 77, "Farewell Party") {
        assert_eq!(item.estimated_cost, item.estimated_cost.round());
        assert_eq!(item.recommended_cost, item.recommended_cost.round());
    }
}
