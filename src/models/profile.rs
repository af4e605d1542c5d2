use serde::{Deserialize, Serialize};
use validator::Validate;

/// The signed-in user's own profile, stored as one flat record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct Profile {
    #[validate(length(min = 1, max = 50))]
    pub name: String,
    #[validate(range(min = 18, max = 120))]
    pub age: u8,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    #[validate(length(max = 500))]
    pub bio: String,
    #[serde(rename = "imageUrl", default)]
    #[validate(url)]
    pub image_url: Option<String>,
    #[serde(rename = "lookingFor", default)]
    pub looking_for: String,
}
