//! Tour record types.

use serde::{Deserialize, Serialize};

use wayfarer_core::{Entity, StoreError, TourId};

use super::{check, require};

/// A stored tour. Wire format is camelCase (`specialOffer`), matching the
/// public API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tour {
    /// Store-assigned ID; never supplied by the caller.
    pub id: TourId,
    pub name: String,
    pub info: String,
    /// Image URL.
    pub image: String,
    /// Display price, an opaque string (e.g., "1,450").
    pub price: String,
    /// Display duration, an opaque string (e.g., "5 days").
    pub duration: String,
    pub rating: f64,
    pub season: String,
    pub special_offer: String,
}

/// Creation payload for a tour. All fields are required and non-empty;
/// optionality here exists so validation can name the missing ones.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTour {
    pub name: Option<String>,
    pub info: Option<String>,
    pub image: Option<String>,
    pub price: Option<String>,
    pub duration: Option<String>,
    pub rating: Option<f64>,
    pub season: Option<String>,
    pub special_offer: Option<String>,
}

/// Partial-update payload for a tour. Present fields overwrite; no
/// re-validation of the merged record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourPatch {
    pub name: Option<String>,
    pub info: Option<String>,
    pub image: Option<String>,
    pub price: Option<String>,
    pub duration: Option<String>,
    pub rating: Option<f64>,
    pub season: Option<String>,
    pub special_offer: Option<String>,
}

impl Entity for Tour {
    type Id = TourId;
    type Draft = NewTour;
    type Patch = TourPatch;

    const NAME: &'static str = "tour";

    fn id(&self) -> TourId {
        self.id
    }

    fn missing_fields(draft: &NewTour) -> Vec<&'static str> {
        let mut missing = Vec::new();
        check(&mut missing, "name", draft.name.as_deref());
        check(&mut missing, "info", draft.info.as_deref());
        check(&mut missing, "image", draft.image.as_deref());
        check(&mut missing, "price", draft.price.as_deref());
        check(&mut missing, "duration", draft.duration.as_deref());
        if draft.rating.is_none() {
            missing.push("rating");
        }
        check(&mut missing, "season", draft.season.as_deref());
        check(&mut missing, "specialOffer", draft.special_offer.as_deref());
        missing
    }

    fn build(id: TourId, draft: NewTour) -> Result<Self, StoreError> {
        let mut missing = Vec::new();
        let tour = Self {
            id,
            name: require(&mut missing, "name", draft.name),
            info: require(&mut missing, "info", draft.info),
            image: require(&mut missing, "image", draft.image),
            price: require(&mut missing, "price", draft.price),
            duration: require(&mut missing, "duration", draft.duration),
            rating: draft.rating.unwrap_or_else(|| {
                missing.push("rating");
                0.0
            }),
            season: require(&mut missing, "season", draft.season),
            special_offer: require(&mut missing, "specialOffer", draft.special_offer),
        };

        if missing.is_empty() {
            Ok(tour)
        } else {
            Err(StoreError::MissingFields(missing))
        }
    }

    fn apply(&mut self, patch: TourPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(info) = patch.info {
            self.info = info;
        }
        if let Some(image) = patch.image {
            self.image = image;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(duration) = patch.duration {
            self.duration = duration;
        }
        if let Some(rating) = patch.rating {
            self.rating = rating;
        }
        if let Some(season) = patch.season {
            self.season = season;
        }
        if let Some(special_offer) = patch.special_offer {
            self.special_offer = special_offer;
        }
    }
}
