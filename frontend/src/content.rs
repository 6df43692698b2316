use std::rc::Rc;

use log::warn;
use serde::Deserialize;
use thiserror::Error;
use yew::{hook, use_context};

use crate::components::icons::Icon;
use crate::config;

const LANDING_JSON: &str = include_str!("../content/landing.json");

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Failed to decode landing content: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Checkout URL must use https: {0}")]
    InsecureCheckoutUrl(String),
    #[error("Landing content has no testimonials")]
    NoTestimonials,
    #[error("Landing content has no FAQ entries")]
    NoFaq,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Offer {
    pub checkout_url: String,
    pub price: String,
    pub bundle_value: u64,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Feature {
    pub icon: Icon,
    pub title: String,
    pub description: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub text: String,
    avatar_token: String,
}

impl Testimonial {
    pub fn avatar_url(&self) -> String {
        config::avatar_url(&self.avatar_token)
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Step {
    pub title: String,
    pub description: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

/// One line of the final-offer checklist; `highlight` is rendered bold
/// between the surrounding text.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct RecapLine {
    #[serde(default)]
    pub before: String,
    pub highlight: String,
    #[serde(default)]
    pub after: String,
}

/// Everything the landing page prints that is not layout.
#[derive(Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Catalog {
    pub offer: Offer,
    pub features: Vec<Feature>,
    pub testimonials: Vec<Testimonial>,
    pub steps: Vec<Step>,
    pub faq: Vec<FaqItem>,
    pub recap: Vec<RecapLine>,
}

impl Catalog {
    /// Decodes the catalog compiled into the bundle.
    pub fn load() -> Result<Self, ContentError> {
        Self::from_json(LANDING_JSON)
    }

    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let catalog: Catalog = serde_json::from_str(raw)?;
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), ContentError> {
        if !self.offer.checkout_url.starts_with("https://") {
            return Err(ContentError::InsecureCheckoutUrl(self.offer.checkout_url.clone()));
        }
        // The carousel indexes modulo the list length.
        if self.testimonials.is_empty() {
            return Err(ContentError::NoTestimonials);
        }
        if self.faq.is_empty() {
            return Err(ContentError::NoFaq);
        }
        Ok(())
    }
}

/// The catalog shared by `Landing`. Outside a provider this falls back to an
/// empty catalog, so links render without a target.
#[hook]
pub fn use_catalog() -> Rc<Catalog> {
    use_context::<Rc<Catalog>>().unwrap_or_else(|| {
        warn!("No catalog in context, rendering empty content");
        Rc::default()
    })
}
