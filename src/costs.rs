//! Cost scaling and the percentage-based budget breakdown.
//!
//! All figures are derived from the same two multipliers: a banded guest
//! multiplier (with category-specific adjustments) applied to every cost,
//! and an event-type quality multiplier applied only to recommended
//! figures. Intermediate values stay unrounded; rounding to whole
//! currency units happens once at output.

use crate::catalog::{is_corporate, is_wedding, LARGE_EVENT_THRESHOLD};
use crate::models::{CostBreakdownItem, VendorCategory};

/// Banded guest multiplier with category adjustments layered on top.
///
/// The combination order matters and is fixed: band lookup, then the
/// category adjustment (boost or cap).
pub fn guest_multiplier(guest_count: u32, category: Option<VendorCategory>) -> f64 {
    let mut multiplier: f64 = if guest_count <= 50 {
        0.8
    } else if guest_count <= 100 {
        1.0
    } else if guest_count <= 200 {
        1.3
    } else {
        1.6
    };

    let large = guest_count > LARGE_EVENT_THRESHOLD;
    match category {
        Some(VendorCategory::Venues) if large => multiplier *= 1.2,
        // Food scales more directly with headcount.
        Some(VendorCategory::CateringAndSweets) => multiplier *= 1.1,
        // Photography is quality/duration-bound, not headcount-bound.
        Some(VendorCategory::PhotographyAndVideography) => multiplier = multiplier.min(1.3),
        Some(VendorCategory::Entertainment) if large => multiplier *= 1.15,
        _ => {}
    }

    multiplier
}

/// Event-type quality multiplier: weddings call for higher-end vendors,
/// corporate events for professional grade. Applied to recommended costs
/// only, never to estimates.
pub fn quality_multiplier(event_type: &str) -> f64 {
    if is_wedding(event_type) {
        1.4
    } else if is_corporate(event_type) {
        1.2
    } else {
        1.0
    }
}

/// Scales a base cost into rounded (estimated, recommended) figures.
pub fn scale_costs(
    base_cost: f64,
    guest_count: u32,
    event_type: &str,
    category: Option<VendorCategory>,
) -> (f64, f64) {
    let guest = guest_multiplier(guest_count, category);
    let quality = quality_multiplier(event_type);
    let estimated = (base_cost * guest).round();
    let recommended = (base_cost * guest * quality).round();
    (estimated, recommended)
}

struct CategoryShare {
    category: VendorCategory,
    percentage: u32,
    description: &'static str,
}

/// Generates the per-category budget allocation for an event.
///
/// Percentages always total exactly 100: whatever the explicit categories
/// leave uncovered goes to Miscellaneous.
pub fn generate_cost_breakdown(
    budget: f64,
    guest_count: u32,
    event_type: &str,
) -> Vec<CostBreakdownItem> {
    let wedding = is_wedding(event_type);
    let corporate = is_corporate(event_type);

    let mut shares = vec![
        CategoryShare {
            category: VendorCategory::Venues,
            percentage: if wedding {
                35
            } else if corporate {
                25
            } else {
                30
            },
            description: "Event venue rental, setup, and basic amenities",
        },
        CategoryShare {
            category: VendorCategory::CateringAndSweets,
            percentage: 25,
            description: "Food, beverages, and dessert services",
        },
        CategoryShare {
            category: VendorCategory::Entertainment,
            percentage: if wedding {
                15
            } else if corporate {
                20
            } else {
                18
            },
            description: "Music, performers, and entertainment activities",
        },
        CategoryShare {
            category: VendorCategory::PhotographyAndVideography,
            percentage: if wedding {
                12
            } else if corporate {
                8
            } else {
                10
            },
            description: "Professional photography and videography services",
        },
        CategoryShare {
            category: VendorCategory::Decoration,
            percentage: if wedding { 10 } else { 8 },
            description: "Floral arrangements, centerpieces, and decorative elements",
        },
        CategoryShare {
            category: VendorCategory::Transportation,
            percentage: 3,
            description: "Guest transportation and logistics",
        },
    ];

    let explicit_total: u32 = shares.iter().map(|s| s.percentage).sum();
    if explicit_total < 100 {
        shares.push(CategoryShare {
            category: VendorCategory::Miscellaneous,
            percentage: 100 - explicit_total,
            description: "Invitations, favors, emergency fund, and other expenses",
        });
    }

    shares
        .into_iter()
        .map(|share| {
            let base_cost = budget * f64::from(share.percentage) / 100.0;
            let (estimated_cost, recommended_cost) =
                scale_costs(base_cost, guest_count, event_type, Some(share.category));
            CostBreakdownItem {
                category: share.category,
                percentage: share.percentage,
                estimated_cost,
                recommended_cost,
                description: share.description.to_string(),
            }
        })
        .collect()
}
