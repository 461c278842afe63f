//! Closed vocabularies for catalogue metadata: audience status, category
//! tags, and impact tiers.
//!
//! Raw catalogue cells are free text; everything funnels through the
//! `parse` constructors here, which trim, lowercase, and map onto the
//! closed sets with a fixed default for unrecognized values. The same
//! normalization applies to user-selected filters, so a selection and a
//! catalogue cell spelled differently still land on the same variant.

use serde::{Deserialize, Serialize};

/// Audience segment a task is aimed at. Single-select on the user side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "single")]
    Single,
    #[serde(rename = "parents")]
    Parents,
    #[serde(rename = "couple")]
    Couple,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Single, Status::Parents, Status::Couple];

    /// Normalize a raw status cell. Unrecognized values fall back to `Single`.
    pub fn parse(raw: &str) -> Status {
        match raw.trim().to_lowercase().as_str() {
            "parent" | "parents" => Status::Parents,
            "couple" => Status::Couple,
            _ => Status::Single,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Single => "Single",
            Status::Parents => "Parents",
            Status::Couple => "Couple",
        }
    }
}

/// Life-domain category tag. Multi-select on the user side.
///
/// The catalogue source predates the storefront's display vocabulary, so
/// `parse` accepts both spellings: "travel and mobility" (source) and
/// "Frequent Travel" (display) resolve to the same variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tag {
    #[serde(rename = "frequent-travel")]
    FrequentTravel,
    #[serde(rename = "moving-cities")]
    MovingCities,
    #[serde(rename = "likes-brunch")]
    LikesBrunch,
    #[serde(rename = "likes-concert")]
    LikesConcert,
    #[serde(rename = "getting-married")]
    GettingMarried,
    #[serde(rename = "expecting-a-baby")]
    ExpectingABaby,
    #[serde(rename = "long-work-hours")]
    LongWorkHours,
    #[serde(rename = "nri-expats")]
    NriExpats,
    #[serde(rename = "plan-social-gathering")]
    PlanSocialGathering,
    #[serde(rename = "health-and-fitness")]
    HealthAndFitness,
    #[serde(rename = "pet-parent")]
    PetParent,
}

impl Tag {
    pub const ALL: [Tag; 11] = [
        Tag::FrequentTravel,
        Tag::MovingCities,
        Tag::LikesBrunch,
        Tag::LikesConcert,
        Tag::GettingMarried,
        Tag::ExpectingABaby,
        Tag::LongWorkHours,
        Tag::NriExpats,
        Tag::PlanSocialGathering,
        Tag::HealthAndFitness,
        Tag::PetParent,
    ];

    /// Normalize a raw tag cell or user selection.
    /// Unrecognized values fall back to `HealthAndFitness`.
    pub fn parse(raw: &str) -> Tag {
        match raw.trim().to_lowercase().as_str() {
            // Source-document vocabulary
            "travel and mobility" => Tag::FrequentTravel,
            "relocation" => Tag::MovingCities,
            "social and dining" => Tag::LikesBrunch,
            "entertainment" => Tag::LikesConcert,
            "wedding planning" => Tag::GettingMarried,
            "pregnancy and baby" => Tag::ExpectingABaby,
            "work and career" => Tag::LongWorkHours,
            "international living" => Tag::NriExpats,
            "event planning" => Tag::PlanSocialGathering,
            "health and fitness" => Tag::HealthAndFitness,
            "pet care" => Tag::PetParent,
            // Display vocabulary
            "frequent travel" => Tag::FrequentTravel,
            "moving cities" => Tag::MovingCities,
            "likes brunch" => Tag::LikesBrunch,
            "likes concert" => Tag::LikesConcert,
            "getting married" => Tag::GettingMarried,
            "expecting a baby" => Tag::ExpectingABaby,
            "long work hours" => Tag::LongWorkHours,
            "nri/expats" => Tag::NriExpats,
            "plan social gathering" => Tag::PlanSocialGathering,
            "pet parent" => Tag::PetParent,
            _ => Tag::HealthAndFitness,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::FrequentTravel => "Frequent Travel",
            Tag::MovingCities => "Moving Cities",
            Tag::LikesBrunch => "Likes Brunch",
            Tag::LikesConcert => "Likes Concert",
            Tag::GettingMarried => "Getting Married",
            Tag::ExpectingABaby => "Expecting a Baby",
            Tag::LongWorkHours => "Long Work Hours",
            Tag::NriExpats => "NRI/Expats",
            Tag::PlanSocialGathering => "Plan Social Gathering",
            Tag::HealthAndFitness => "Health and Fitness",
            Tag::PetParent => "Pet Parent",
        }
    }
}

/// Task-importance tier. High sorts before Medium sorts before Low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Impact {
    #[serde(rename = "high")]
    High,
    #[serde(rename = "medium")]
    Medium,
    #[serde(rename = "low")]
    Low,
}

impl Impact {
    /// Sort rank: lower comes first.
    pub fn rank(&self) -> u32 {
        match self {
            Impact::High => 0,
            Impact::Medium => 1,
            Impact::Low => 2,
        }
    }

    /// Normalize a raw impact cell. Missing/unrecognized values are `Low`.
    pub fn parse(raw: &str) -> Impact {
        match raw.trim().to_lowercase().as_str() {
            "high" => Impact::High,
            "medium" => Impact::Medium,
            _ => Impact::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Impact::High => "High",
            Impact::Medium => "Medium",
            Impact::Low => "Low",
        }
    }
}
