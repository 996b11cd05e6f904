use serde::{Deserialize, Serialize};

use crate::config::SMART_DEFAULT_LIMIT;

/// What a caller is looking for. Every field is optional; an absent field
/// scores neutrally on its dimension.
///
/// Deserialization never fails on a field: a value of the wrong JSON type
/// reads as absent, unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,

    /// Budget in INR per sqft per month.
    #[serde(default, deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub target_price: Option<f64>,

    #[serde(default, deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub min_area_sqft: Option<f64>,

    /// Must equal a dataset warehouse type exactly to have any effect.
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub preferred_type: Option<String>,

    #[serde(default, deserialize_with = "lenient::flag")]
    pub prefer_verified: bool,

    #[serde(default, deserialize_with = "lenient::flag")]
    pub prefer_availability: bool,
}

impl Preferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults of the "smart" recommendation flow: favour verified,
    /// available facilities and leave everything else open.
    pub fn smart_defaults() -> Self {
        Self {
            prefer_verified: true,
            prefer_availability: true,
            ..Self::default()
        }
    }

    pub fn with_district(mut self, district: impl Into<String>) -> Self {
        self.district = Some(district.into());
        self
    }

    pub fn with_target_price(mut self, price: f64) -> Self {
        self.target_price = Some(price);
        self
    }

    pub fn with_min_area_sqft(mut self, area: f64) -> Self {
        self.min_area_sqft = Some(area);
        self
    }

    pub fn with_preferred_type(mut self, warehouse_type: impl Into<String>) -> Self {
        self.preferred_type = Some(warehouse_type.into());
        self
    }

    pub fn prefer_verified(mut self, yes: bool) -> Self {
        self.prefer_verified = yes;
        self
    }

    pub fn prefer_availability(mut self, yes: bool) -> Self {
        self.prefer_availability = yes;
        self
    }
}

/// Inbound recommendation request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    #[serde(default, deserialize_with = "lenient::preferences")]
    pub preferences: Preferences,

    #[serde(default, deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub limit: Option<f64>,
}

impl RecommendationRequest {
    pub fn new(preferences: Preferences, limit: Option<usize>) -> Self {
        Self {
            preferences,
            limit: limit.map(|l| l as f64),
        }
    }

    /// The "smart" flow request: smart default preferences, six items.
    pub fn smart() -> Self {
        Self::new(Preferences::smart_defaults(), Some(SMART_DEFAULT_LIMIT))
    }

    /// Number of items to return. Fractions truncate, non-positive values
    /// mean an empty result.
    pub fn resolved_limit(&self, default: usize) -> usize {
        match self.limit {
            None => default,
            Some(n) if n <= 0.0 => 0,
            Some(n) => n.trunc() as usize,
        }
    }
}

mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    use super::Preferences;

    pub fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value.and_then(|v| v.as_f64()).filter(|n| n.is_finite()))
    }

    pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(match value {
            Some(Value::String(s)) => Some(s),
            _ => None,
        })
    }

    pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(matches!(value, Some(Value::Bool(true))))
    }

    pub fn preferences<'de, D>(deserializer: D) -> Result<Preferences, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value
            .and_then(|v| serde_json::from_value(v).ok())
            .unwrap_or_default())
    }
}
