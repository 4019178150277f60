//! Feedback rating value object (1 to 5 stars).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Star rating left on an event registration after the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct FeedbackRating(u8);

impl FeedbackRating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Creates a rating, returning error if outside 1..=5.
    pub fn new(value: u8) -> Result<Self, ValidationError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ValidationError::out_of_range(
                "rating",
                Self::MIN as i32,
                Self::MAX as i32,
                value as i32,
            ))
        }
    }

    /// Returns the number of stars.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self.0 {
            1 => "Poor",
            2 => "Fair",
            3 => "Good",
            4 => "Very Good",
            _ => "Excellent",
        }
    }
}

impl TryFrom<u8> for FeedbackRating {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FeedbackRating> for u8 {
    fn from(rating: FeedbackRating) -> Self {
        rating.0
    }
}

impl fmt::Display for FeedbackRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}
