//! Static lookup tables consulted by the loader and the ranker: the
//! per-status tag-priority matrix, the per-tag popular-task map, and the
//! title → image map.
//!
//! All of it is immutable configuration data, built once behind
//! `OnceLock` so vocabulary changes stay out of the ranking logic.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::vocab::{Status, Tag};

/// Sentinel rank for (status, tag) pairs missing from the priority
/// matrix and for tasks whose categories carry no rank at all.
/// Lower rank = more preferred, so unranked sorts last.
pub const UNRANKED: u32 = 999;

/// Placeholder image when a title has no entry in the image table.
pub const DEFAULT_IMAGE: &str =
    "https://images.pexels.com/photos/3184291/pexels-photo-3184291.jpeg";

// Per-status tag preference, rank 1 = most preferred.
const PARENTS_PRIORITIES: [(Tag, u32); 11] = [
    (Tag::ExpectingABaby, 1),
    (Tag::HealthAndFitness, 2),
    (Tag::LongWorkHours, 3),
    (Tag::LikesBrunch, 4),
    (Tag::LikesConcert, 5),
    (Tag::PetParent, 6),
    (Tag::NriExpats, 7),
    (Tag::FrequentTravel, 8),
    (Tag::MovingCities, 9),
    (Tag::PlanSocialGathering, 10),
    (Tag::GettingMarried, 11),
];

const SINGLE_PRIORITIES: [(Tag, u32); 11] = [
    (Tag::FrequentTravel, 1),
    (Tag::LongWorkHours, 2),
    (Tag::HealthAndFitness, 3),
    (Tag::LikesBrunch, 4),
    (Tag::PetParent, 5),
    (Tag::LikesConcert, 6),
    (Tag::MovingCities, 7),
    (Tag::NriExpats, 8),
    (Tag::PlanSocialGathering, 9),
    (Tag::GettingMarried, 10),
    (Tag::ExpectingABaby, 11),
];

const COUPLE_PRIORITIES: [(Tag, u32); 11] = [
    (Tag::GettingMarried, 1),
    (Tag::ExpectingABaby, 2),
    (Tag::FrequentTravel, 3),
    (Tag::LongWorkHours, 4),
    (Tag::LikesBrunch, 5),
    (Tag::LikesConcert, 6),
    (Tag::HealthAndFitness, 7),
    (Tag::PetParent, 8),
    (Tag::NriExpats, 9),
    (Tag::PlanSocialGathering, 10),
    (Tag::MovingCities, 11),
];

// Flagship task per category, promoted to the front of results when
// that category is selected.
const POPULAR_TASKS: [(Tag, &str); 11] = [
    (Tag::ExpectingABaby, "Plan baby shower"),
    (Tag::HealthAndFitness, "Find Personal Trainers"),
    (Tag::LongWorkHours, "Order office meals"),
    (Tag::LikesBrunch, "Book restaurant tables"),
    (Tag::LikesConcert, "Book hotel near concert"),
    (Tag::PetParent, "Book pet boarding"),
    (Tag::NriExpats, "Apply passport renewal"),
    (Tag::FrequentTravel, "Get travel itinerary"),
    (Tag::MovingCities, "Search rental homes"),
    (Tag::PlanSocialGathering, "Reserve event venue"),
    (Tag::GettingMarried, "Apply marriage certificate"),
];

const IMAGES: [(&str, &str); 30] = [
    ("Order protein bar", "/image_001_A_premium__unwrapped.png"),
    ("Order supplements", "/image_002_Top_down_flat_lay_of.png"),
    ("Book massage", "/image_004_Three_perfectly_smoo.png"),
    ("Plan meals", "/image_005_A_top_down_flat_lay_.png"),
    ("Find Personal Trainers", "/image_006_A_single__sleek_dumb.png"),
    ("Sports Event Bookings", "/image_007_Two_sleek__minimalis.png"),
    ("Gym Equipment Purchase", "/image_008_A_single__high_end_k.png"),
    ("Fitness Class Enquiry", "/image_009_A_clean__premium_run.png"),
    ("Find swimming pool", "/image_010_A_rolled_up__high_qu.png"),
    ("Send wedding gifts", "/image_011_A_pair_of_minimalist.png"),
    ("Book flight tickets", "/image_012_A_luxurious__elegant.png"),
    ("Plan honeymoon travel", "/image_013_A_minimalist__styliz.png"),
    ("Book wedding vendors", "/image_014_Two_interlocking__el.png"),
    ("Apply marriage certificate", "/image_015_A_minimalist_clipboa.png"),
    ("Manage wedding invites", "/image_016_An_elegant__high_qua.png"),
    ("Manage home setup", "/image_017_A_stack_of_premium__.png"),
    ("Apply PAN change", "/image_018_A_set_of_sleek__mini.png"),
    ("Plan wedding venue", "/image_019_An_official_looking_.png"),
    ("Hire household help", "/image_020_A_small__intricately.png"),
    ("Plan wedding food", "/image_022_A_small__elegant_men.png"),
    ("Coordinate wedding shoot", "/image_023_A_vintage_style__min.png"),
    ("Manage function timelines", "/image_024_A_sleek__modern_hour.png"),
    ("Register for workshops", "/58.png"),
    ("Plan baby shower", "/59.png"),
    ("Order prenatal meds", "/60.png"),
    ("Buy baby items", "/61.png"),
    ("Hire prenatal coach", "/62.png"),
    ("Find maternity items", "/63.png"),
    ("Book restaurant tables", "/64.png"),
    ("Fix electronics/devices", "/65.png"),
];

fn priority_table() -> &'static HashMap<(Status, Tag), u32> {
    static TABLE: OnceLock<HashMap<(Status, Tag), u32>> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut map = HashMap::new();
        for (tag, rank) in PARENTS_PRIORITIES {
            map.insert((Status::Parents, tag), rank);
        }
        for (tag, rank) in SINGLE_PRIORITIES {
            map.insert((Status::Single, tag), rank);
        }
        for (tag, rank) in COUPLE_PRIORITIES {
            map.insert((Status::Couple, tag), rank);
        }
        map
    })
}

fn image_table() -> &'static HashMap<String, &'static str> {
    static TABLE: OnceLock<HashMap<String, &'static str>> = OnceLock::new();
    TABLE.get_or_init(|| {
        IMAGES
            .iter()
            .map(|(title, image)| (title.to_lowercase(), *image))
            .collect()
    })
}

/// Preference rank of `tag` for the given audience status.
/// 1 is most preferred; pairs outside the matrix rank [`UNRANKED`].
pub fn priority_rank(status: Status, tag: Tag) -> u32 {
    priority_table()
        .get(&(status, tag))
        .copied()
        .unwrap_or(UNRANKED)
}

/// Title of the flagship task for a category, if one is designated.
pub fn popular_task_title(tag: Tag) -> Option<&'static str> {
    POPULAR_TASKS
        .iter()
        .find(|(t, _)| *t == tag)
        .map(|(_, title)| *title)
}

/// Resolve a task title to its image reference.
/// Exact match, case-insensitive; unmatched titles get [`DEFAULT_IMAGE`].
pub fn image_for_title(title: &str) -> &'static str {
    image_table()
        .get(&title.trim().to_lowercase())
        .copied()
        .unwrap_or(DEFAULT_IMAGE)
}
