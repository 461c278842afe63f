//! Title-relevance keywords for the optional Case-C refinement.
//!
//! Each category carries an ordered list of (keywords, rank) entries.
//! A title's relevance to a category is the rank of the first entry with
//! a keyword appearing in the lowercased title as a substring; titles
//! matching nothing get [`NO_MATCH`]. Deterministic, no scoring model.

use crate::vocab::Tag;

/// Relevance rank for titles that match no keyword of a category.
pub const NO_MATCH: u32 = 99;

type KeywordEntry = (&'static [&'static str], u32);

fn keyword_entries(tag: Tag) -> &'static [KeywordEntry] {
    match tag {
        Tag::HealthAndFitness => &[
            (&["trainer", "gym", "fitness"], 1),
            (&["massage", "swimming", "sports"], 2),
            (&["protein", "supplement", "meal"], 3),
        ],
        Tag::GettingMarried => &[
            (&["marriage", "wedding"], 1),
            (&["honeymoon"], 2),
            (&["invite", "venue", "vendor"], 3),
        ],
        Tag::ExpectingABaby => &[
            (&["baby", "prenatal"], 1),
            (&["maternity"], 2),
        ],
        Tag::LikesBrunch => &[
            (&["restaurant", "brunch", "table"], 1),
            (&["dining", "meal"], 2),
        ],
        Tag::LikesConcert => &[
            (&["concert", "ticket"], 1),
            (&["hotel", "show"], 2),
        ],
        Tag::FrequentTravel => &[
            (&["flight", "itinerary", "travel"], 1),
            (&["hotel", "luggage"], 2),
        ],
        Tag::MovingCities => &[
            (&["rental", "moving", "relocation"], 1),
            (&["home", "utilities"], 2),
        ],
        Tag::LongWorkHours => &[
            (&["office", "work"], 1),
            (&["errand", "laundry"], 2),
        ],
        Tag::NriExpats => &[
            (&["passport", "visa"], 1),
            (&["pan", "remittance"], 2),
        ],
        Tag::PlanSocialGathering => &[
            (&["venue", "event"], 1),
            (&["party", "gathering"], 2),
        ],
        Tag::PetParent => &[
            (&["pet", "boarding"], 1),
            (&["vet", "grooming"], 2),
        ],
    }
}

/// Relevance of a title to one category. Lower is more relevant.
pub fn relevance_rank(tag: Tag, title: &str) -> u32 {
    let title = title.to_lowercase();
    for (keywords, rank) in keyword_entries(tag) {
        if keywords.iter().any(|kw| title.contains(kw)) {
            return *rank;
        }
    }
    NO_MATCH
}

/// Best (lowest) relevance of a title across the selected categories.
pub fn best_relevance_rank(tags: &[Tag], title: &str) -> u32 {
    tags.iter()
        .map(|tag| relevance_rank(*tag, title))
        .min()
        .unwrap_or(NO_MATCH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_matching_entry_wins() {
        assert_eq!(relevance_rank(Tag::GettingMarried, "Apply marriage certificate"), 1);
        assert_eq!(relevance_rank(Tag::GettingMarried, "Plan honeymoon travel"), 2);
        assert_eq!(relevance_rank(Tag::GettingMarried, "Manage wedding invites"), 1);
    }

    #[test]
    fn test_no_match_sentinel() {
        assert_eq!(relevance_rank(Tag::PetParent, "Book flight tickets"), NO_MATCH);
    }

    #[test]
    fn test_best_across_selected_tags() {
        let tags = [Tag::PetParent, Tag::FrequentTravel];
        assert_eq!(best_relevance_rank(&tags, "Book flight tickets"), 1);
        assert_eq!(best_relevance_rank(&[], "Book flight tickets"), NO_MATCH);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(relevance_rank(Tag::HealthAndFitness, "FIND PERSONAL TRAINERS"), 1);
    }
}
