use serde::{Deserialize, Deserializer, de::Error};
use smallvec::SmallVec;

/// Accepts either a single family string or a non-empty list of families.
pub fn de_font_family<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrVec {
        One(String),
        Many(SmallVec<[String; 2]>),
    }

    let value = StringOrVec::deserialize(deserializer)?;

    match value {
        StringOrVec::One(string) => Ok(string),
        StringOrVec::Many(vec) => {
            if vec.is_empty() {
                return Err(D::Error::custom("list can't be empty."));
            }

            Ok(vec.join(", "))
        }
    }
}

/// Accepts a CSS length string, or a bare number which is read as pixels.
pub fn de_css_length<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match StringOrFloat::deserialize(deserializer)? {
        StringOrFloat::String(string) => {
            let string = string.trim();

            if string.is_empty() {
                return Err(D::Error::custom("length can't be empty."));
            }

            Ok(string.to_owned())
        }

        StringOrFloat::Float(pixels) => Ok(format!("{pixels}px")),
    }
}

/// Accepts a numeric weight, a numeric string, or the CSS keywords `normal` and `bold`.
pub fn de_font_weight<'de, D>(deserializer: D) -> Result<u16, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(u16),
        String(String),
    }

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(weight) => Ok(weight),

        NumberOrString::String(string) => match string.trim() {
            "normal" => Ok(400),
            "bold" => Ok(700),
            other => other
                .parse::<u16>()
                .map_err(|_| D::Error::custom("expected a numeric font weight")),
        },
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrFloat {
    String(String),
    Float(f64),
}
