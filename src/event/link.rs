//! Shareable link encoding
//!
//! A link carries one query parameter per input field:
//! `guests, hours, style, intensity, age, service, quality, state`.
//! Enum fields use their literal tags and numbers are plain decimals, so a
//! link produced here opens the same plan in the web calculator and back.
//!
//! Decoding is forgiving: unknown keys, empty values, malformed numbers and
//! unrecognized tags are skipped and the caller's defaults stay in place.

use super::{AgeSkew, BarStyle, CalculatorInput, Intensity, QualityTier, ServiceType};

pub const KEY_GUESTS: &str = "guests";
pub const KEY_HOURS: &str = "hours";
pub const KEY_STYLE: &str = "style";
pub const KEY_INTENSITY: &str = "intensity";
pub const KEY_AGE: &str = "age";
pub const KEY_SERVICE: &str = "service";
pub const KEY_QUALITY: &str = "quality";
pub const KEY_STATE: &str = "state";

/// Fields recovered from a link; `None` means absent or unusable
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartialInput {
    pub guests: Option<u32>,
    pub hours: Option<f64>,
    pub bar_style: Option<BarStyle>,
    pub intensity: Option<Intensity>,
    pub age_skew: Option<AgeSkew>,
    pub service_type: Option<ServiceType>,
    pub quality_tier: Option<QualityTier>,
    pub state: Option<String>,
}

impl PartialInput {
    /// Overlay the decoded fields on `base`
    pub fn apply_to(&self, base: CalculatorInput) -> CalculatorInput {
        CalculatorInput {
            guests: self.guests.unwrap_or(base.guests),
            hours: self.hours.unwrap_or(base.hours),
            bar_style: self.bar_style.unwrap_or(base.bar_style),
            intensity: self.intensity.unwrap_or(base.intensity),
            age_skew: self.age_skew.unwrap_or(base.age_skew),
            service_type: self.service_type.unwrap_or(base.service_type),
            quality_tier: self.quality_tier.unwrap_or(base.quality_tier),
            state: self.state.clone().unwrap_or(base.state),
        }
    }

    /// Fields of `overrides` that are set replace the ones here
    pub fn with_overrides(self, overrides: PartialInput) -> PartialInput {
        PartialInput {
            guests: overrides.guests.or(self.guests),
            hours: overrides.hours.or(self.hours),
            bar_style: overrides.bar_style.or(self.bar_style),
            intensity: overrides.intensity.or(self.intensity),
            age_skew: overrides.age_skew.or(self.age_skew),
            service_type: overrides.service_type.or(self.service_type),
            quality_tier: overrides.quality_tier.or(self.quality_tier),
            state: overrides.state.or(self.state),
        }
    }

    /// Overlay the decoded fields on the standard defaults
    pub fn into_input(self) -> CalculatorInput {
        self.apply_to(CalculatorInput::default())
    }

    pub fn is_empty(&self) -> bool {
        *self == PartialInput::default()
    }
}

/// Encode an input as a form-urlencoded query string (no leading `?`)
pub fn encode_query(input: &CalculatorInput) -> String {
    form_urlencoded::Serializer::new(String::new())
        .append_pair(KEY_GUESTS, &input.guests.to_string())
        .append_pair(KEY_HOURS, &input.hours.to_string())
        .append_pair(KEY_STYLE, input.bar_style.as_str())
        .append_pair(KEY_INTENSITY, input.intensity.as_str())
        .append_pair(KEY_AGE, input.age_skew.as_str())
        .append_pair(KEY_SERVICE, input.service_type.as_str())
        .append_pair(KEY_QUALITY, input.quality_tier.as_str())
        .append_pair(KEY_STATE, &input.state)
        .finish()
}

/// Build a full share URL from an origin such as `https://example.com`
pub fn share_url(base_url: &str, input: &CalculatorInput) -> String {
    format!("{}?{}", base_url.trim_end_matches('?'), encode_query(input))
}

/// Decode a query string; a leading `?` is accepted.
///
/// When a key repeats, the first usable occurrence wins.
pub fn decode_query(query: &str) -> PartialInput {
    let query = query.trim().trim_start_matches('?');

    let mut partial = PartialInput::default();
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        let value = value.trim();
        if value.is_empty() {
            continue;
        }
        match &*key {
            KEY_GUESTS => fill(&mut partial.guests, value.parse().ok()),
            KEY_HOURS => fill(&mut partial.hours, parse_hours(value)),
            KEY_STYLE => fill(&mut partial.bar_style, value.parse().ok()),
            KEY_INTENSITY => fill(&mut partial.intensity, value.parse().ok()),
            KEY_AGE => fill(&mut partial.age_skew, value.parse().ok()),
            KEY_SERVICE => fill(&mut partial.service_type, value.parse().ok()),
            KEY_QUALITY => fill(&mut partial.quality_tier, value.parse().ok()),
            KEY_STATE => fill(&mut partial.state, Some(value.to_string())),
            _ => {}
        }
    }

    partial
}

/// Resolve the input for one plan: standard defaults, then the share link
/// (a full URL or just its query string), then `overrides`, then clamping.
pub fn resolve_input(link: Option<&str>, overrides: PartialInput) -> CalculatorInput {
    let from_link = match link {
        Some(link) => {
            let query = link.split_once('?').map_or(link, |(_, query)| query);
            decode_query(query)
        }
        None => PartialInput::default(),
    };
    from_link.with_overrides(overrides).into_input().clamped()
}

fn fill<T>(slot: &mut Option<T>, value: Option<T>) {
    if slot.is_none() {
        *slot = value;
    }
}

fn parse_hours(value: &str) -> Option<f64> {
    value
        .parse::<f64>()
        .ok()
        .filter(|h| h.is_finite() && *h >= 0.0)
}
