use serde::{ser::Error as _, Deserialize, Serialize, Serializer};

/// A car described by its exterior color, its make/model name and, when known,
/// its top speed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Vehicle {
    pub color: String,
    pub model: String,
    #[serde(
        rename = "topSpeed",
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_speed"
    )]
    pub top_speed: Option<f64>,
}

impl Vehicle {
    pub fn new(color: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            model: model.into(),
            top_speed: None,
        }
    }

    pub fn with_top_speed(mut self, top_speed: f64) -> Self {
        self.top_speed = Some(top_speed);
        self
    }
}

/// Whole numbers are written without a fractional part (`100`, not `100.0`).
/// NaN and infinity are refused rather than written as `null`.
fn serialize_speed<S: Serializer>(speed: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
    match speed {
        Some(v) if !v.is_finite() => Err(S::Error::custom(format!(
            "topSpeed must be a finite number, got {}",
            v
        ))),
        Some(v) if v.fract() == 0.0 && v.abs() < i64::MAX as f64 => {
            serializer.serialize_i64(*v as i64)
        }
        Some(v) => serializer.serialize_f64(*v),
        None => serializer.serialize_none(),
    }
}
