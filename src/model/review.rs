//! Customer reviews and the "helpful" vote counter.

use serde::{Deserialize, Serialize};

/// Star rating, validated to 1..=5 at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    pub fn new(stars: u8) -> Result<Self, String> {
        if (1..=5).contains(&stars) {
            Ok(Self(stars))
        } else {
            Err(format!("rating must be between 1 and 5, got {}", stars))
        }
    }

    pub fn stars(self) -> u8 {
        self.0
    }
}

/// Would the reviewer recommend the restaurant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommend {
    Yes,
    Neutral,
    No,
}

/// A submitted review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub id: String,
    pub user_name: String,
    pub review_title: String,
    pub review_text: String,
    pub rating: Rating,
    pub dishes_ordered: String,
    pub date_of_visit: String,
    pub would_recommend: Recommend,
    /// "Was this review helpful?" vote count.
    pub helpful: u32,
}

/// Payload for submitting a review.
#[derive(Debug, Clone)]
pub struct ReviewCreate {
    pub user_name: String,
    pub review_title: String,
    pub review_text: String,
    /// Raw star count; validated on creation.
    pub rating: u8,
    pub dishes_ordered: String,
    pub date_of_visit: String,
    pub would_recommend: Recommend,
}

impl Review {
    /// Build a review from its creation payload, validating the rating.
    pub fn from_create(id: String, params: ReviewCreate) -> Result<Self, String> {
        Ok(Self {
            id,
            user_name: params.user_name,
            review_title: params.review_title,
            review_text: params.review_text,
            rating: Rating::new(params.rating)?,
            dishes_ordered: params.dishes_ordered,
            date_of_visit: params.date_of_visit,
            would_recommend: params.would_recommend,
            helpful: 0,
        })
    }
}

/// Mean star rating across a set of reviews; 0.0 when there are none.
pub fn average_rating(reviews: &[Review]) -> f64 {
    if reviews.is_empty() {
        return 0.0;
    }
    let total: u32 = reviews.iter().map(|r| u32::from(r.rating.stars())).sum();
    f64::from(total) / reviews.len() as f64
}
