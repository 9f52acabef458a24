//! Timer settings and their validation boundary.
//!
//! `TimerSettings` is persisted as a single JSON record using the camelCase
//! field names below. Two entry points exist:
//!
//! - [`TimerSettings::from_value`] is strict: every field must be present,
//!   numeric fields must be whole numbers within their bounds. Used for
//!   user-initiated updates.
//! - Plain deserialization is lenient about absent fields (they take the
//!   defaults) and is used when restoring a stored record.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::timer::Phase;

pub const WORK_DURATION: &str = "workDuration";
pub const SHORT_BREAK_DURATION: &str = "shortBreakDuration";
pub const LONG_BREAK_DURATION: &str = "longBreakDuration";
pub const WORK_SESSIONS_BEFORE_LONG_BREAK: &str = "workSessionsBeforeLongBreak";
pub const AUTO_START_NEXT_PHASE: &str = "autoStartNextPhase";
pub const BROWN_NOISE_ENABLED: &str = "brownNoiseEnabled";
pub const AUTO_DARK_MODE: &str = "autoDarkMode";
pub const SCREEN_DIMMING: &str = "screenDimming";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Whole number within an inclusive range.
    Integer { min: u32, max: u32 },
    Flag,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

/// Every persisted field, in record order.
pub const FIELDS: [FieldSpec; 8] = [
    FieldSpec {
        name: WORK_DURATION,
        kind: FieldKind::Integer { min: 1, max: 60 },
    },
    FieldSpec {
        name: SHORT_BREAK_DURATION,
        kind: FieldKind::Integer { min: 1, max: 30 },
    },
    FieldSpec {
        name: LONG_BREAK_DURATION,
        kind: FieldKind::Integer { min: 1, max: 60 },
    },
    FieldSpec {
        name: WORK_SESSIONS_BEFORE_LONG_BREAK,
        kind: FieldKind::Integer { min: 1, max: 10 },
    },
    FieldSpec {
        name: AUTO_START_NEXT_PHASE,
        kind: FieldKind::Flag,
    },
    FieldSpec {
        name: BROWN_NOISE_ENABLED,
        kind: FieldKind::Flag,
    },
    FieldSpec {
        name: AUTO_DARK_MODE,
        kind: FieldKind::Flag,
    },
    FieldSpec {
        name: SCREEN_DIMMING,
        kind: FieldKind::Flag,
    },
];

pub fn field(name: &str) -> Option<FieldSpec> {
    FIELDS.iter().copied().find(|f| f.name == name)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimerSettings {
    /// Minutes.
    pub work_duration: u32,
    /// Minutes.
    pub short_break_duration: u32,
    /// Minutes.
    pub long_break_duration: u32,
    pub work_sessions_before_long_break: u32,
    pub auto_start_next_phase: bool,
    pub brown_noise_enabled: bool,
    pub auto_dark_mode: bool,
    pub screen_dimming: bool,
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self {
            work_duration: 25,
            short_break_duration: 5,
            long_break_duration: 15,
            work_sessions_before_long_break: 2,
            auto_start_next_phase: true,
            brown_noise_enabled: false,
            auto_dark_mode: true,
            screen_dimming: true,
        }
    }
}

impl TimerSettings {
    /// Duration of `phase` in minutes.
    pub fn duration(&self, phase: Phase) -> u32 {
        match phase {
            Phase::Work => self.work_duration,
            Phase::ShortBreak => self.short_break_duration,
            Phase::LongBreak => self.long_break_duration,
        }
    }

    /// Duration of `phase` in seconds.
    pub fn duration_secs(&self, phase: Phase) -> u32 {
        self.duration(phase).saturating_mul(60)
    }

    /// Check every numeric field against its bounds.
    ///
    /// # Errors
    /// Returns the first field found out of range.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let values = [
            (WORK_DURATION, self.work_duration),
            (SHORT_BREAK_DURATION, self.short_break_duration),
            (LONG_BREAK_DURATION, self.long_break_duration),
            (WORK_SESSIONS_BEFORE_LONG_BREAK, self.work_sessions_before_long_break),
        ];
        for (name, value) in values {
            if let Some(FieldSpec { kind: FieldKind::Integer { min, max }, .. }) = field(name) {
                check_range(name, i64::from(value), min, max)?;
            }
        }
        Ok(())
    }

    /// Strictly decode a settings record.
    ///
    /// # Errors
    /// Returns a field-specific error if a field is missing, has the wrong
    /// type, is not a whole number, is out of bounds, or is not a known
    /// field.
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        let obj = value
            .as_object()
            .ok_or_else(|| ValidationError::Malformed("expected a JSON object".to_string()))?;

        if let Some(unknown) = obj.keys().find(|k| field(k).is_none()) {
            return Err(ValidationError::UnknownField(unknown.clone()));
        }

        Ok(Self {
            work_duration: integer(obj, WORK_DURATION)?,
            short_break_duration: integer(obj, SHORT_BREAK_DURATION)?,
            long_break_duration: integer(obj, LONG_BREAK_DURATION)?,
            work_sessions_before_long_break: integer(obj, WORK_SESSIONS_BEFORE_LONG_BREAK)?,
            auto_start_next_phase: flag(obj, AUTO_START_NEXT_PHASE)?,
            brown_noise_enabled: flag(obj, BROWN_NOISE_ENABLED)?,
            auto_dark_mode: flag(obj, AUTO_DARK_MODE)?,
            screen_dimming: flag(obj, SCREEN_DIMMING)?,
        })
    }

    /// Strictly decode a settings record from JSON text.
    ///
    /// # Errors
    /// Returns a validation error for malformed JSON or any invalid field.
    pub fn from_json(json: &str) -> Result<Self, ValidationError> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| ValidationError::Malformed(e.to_string()))?;
        Self::from_value(&value)
    }

    /// Get a field's value as display text.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        json.get(key).map(Value::to_string)
    }

    /// Return a copy with one field replaced from user text.
    ///
    /// The text must parse as the field's type; the result is then run
    /// through the same strict decoding as a full update.
    ///
    /// # Errors
    /// Returns a validation error for unknown keys or invalid values.
    pub fn with_field(&self, key: &str, raw: &str) -> Result<Self, ValidationError> {
        let spec = field(key).ok_or_else(|| ValidationError::UnknownField(key.to_string()))?;
        let raw = raw.trim();
        let new_value = match spec.kind {
            FieldKind::Integer { .. } => {
                let n = raw.parse::<i64>().map_err(|_| ValidationError::NotAnInteger {
                    field: key.to_string(),
                    value: raw.to_string(),
                })?;
                Value::Number(n.into())
            }
            FieldKind::Flag => {
                let b = raw.parse::<bool>().map_err(|_| ValidationError::NotABoolean {
                    field: key.to_string(),
                    value: raw.to_string(),
                })?;
                Value::Bool(b)
            }
        };

        let mut json = serde_json::to_value(self)
            .map_err(|e| ValidationError::Malformed(e.to_string()))?;
        if let Some(obj) = json.as_object_mut() {
            obj.insert(key.to_string(), new_value);
        }
        Self::from_value(&json)
    }
}

fn check_range(field: &str, value: i64, min: u32, max: u32) -> Result<(), ValidationError> {
    if value < i64::from(min) || value > i64::from(max) {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            value,
            min,
            max,
        });
    }
    Ok(())
}

fn integer(obj: &Map<String, Value>, name: &str) -> Result<u32, ValidationError> {
    let value = obj.get(name).ok_or_else(|| ValidationError::Missing {
        field: name.to_string(),
    })?;
    let n = match value {
        Value::Number(num) => match (num.as_i64(), num.as_u64()) {
            (Some(n), _) => n,
            (None, Some(_)) => i64::MAX,
            (None, None) => {
                return Err(ValidationError::NotAnInteger {
                    field: name.to_string(),
                    value: value.to_string(),
                })
            }
        },
        other => {
            return Err(ValidationError::NotAnInteger {
                field: name.to_string(),
                value: other.to_string(),
            })
        }
    };
    if let Some(FieldSpec { kind: FieldKind::Integer { min, max }, .. }) = field(name) {
        check_range(name, n, min, max)?;
    }
    u32::try_from(n).map_err(|_| ValidationError::NotAnInteger {
        field: name.to_string(),
        value: value.to_string(),
    })
}

fn flag(obj: &Map<String, Value>, name: &str) -> Result<bool, ValidationError> {
    match obj.get(name) {
        None => Err(ValidationError::Missing {
            field: name.to_string(),
        }),
        Some(Value::Bool(b)) => Ok(*b),
        Some(other) => Err(ValidationError::NotABoolean {
            field: name.to_string(),
            value: other.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_record() -> Value {
        serde_json::to_value(TimerSettings::default()).unwrap()
    }

    #[test]
    fn default_values_match_original_app() {
        let s = TimerSettings::default();
        assert_eq!(s.work_duration, 25);
        assert_eq!(s.short_break_duration, 5);
        assert_eq!(s.long_break_duration, 15);
        assert_eq!(s.work_sessions_before_long_break, 2);
        assert!(s.auto_start_next_phase);
        assert!(!s.brown_noise_enabled);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn serializes_with_camel_case_names() {
        let json = full_record();
        let obj = json.as_object().unwrap();
        for spec in FIELDS {
            assert!(obj.contains_key(spec.name), "missing {}", spec.name);
        }
        assert_eq!(obj.len(), FIELDS.len());
    }

    #[test]
    fn lenient_decode_fills_absent_fields() {
        let s: TimerSettings = serde_json::from_str(r#"{"workDuration": 50}"#).unwrap();
        assert_eq!(s.work_duration, 50);
        assert_eq!(s.short_break_duration, 5);
        assert!(s.screen_dimming);
    }

    #[test]
    fn strict_decode_accepts_full_record() {
        let mut json = full_record();
        json["workDuration"] = json!(60);
        let s = TimerSettings::from_value(&json).unwrap();
        assert_eq!(s.work_duration, 60);
    }

    #[test]
    fn strict_decode_rejects_missing_field() {
        let mut json = full_record();
        json.as_object_mut().unwrap().remove("longBreakDuration");
        assert_eq!(
            TimerSettings::from_value(&json),
            Err(ValidationError::Missing { field: "longBreakDuration".into() })
        );
    }

    #[test]
    fn strict_decode_rejects_bounds() {
        for bad in [0, 61] {
            let mut json = full_record();
            json["workDuration"] = json!(bad);
            assert!(matches!(
                TimerSettings::from_value(&json),
                Err(ValidationError::OutOfRange {
                    ref field,
                    min: 1,
                    max: 60,
                    ..
                }) if field == "workDuration"
            ));
        }
        let mut json = full_record();
        json["shortBreakDuration"] = json!(31);
        assert!(TimerSettings::from_value(&json).is_err());
        let mut json = full_record();
        json["workSessionsBeforeLongBreak"] = json!(11);
        assert!(TimerSettings::from_value(&json).is_err());
    }

    #[test]
    fn strict_decode_rejects_non_integers() {
        for bad in [json!(2.5), json!("25"), json!(null), json!(-1.0)] {
            let mut json = full_record();
            json["workDuration"] = bad;
            assert!(matches!(
                TimerSettings::from_value(&json),
                Err(ValidationError::NotAnInteger { .. })
            ));
        }
    }

    #[test]
    fn strict_decode_rejects_non_boolean_flag() {
        let mut json = full_record();
        json["autoStartNextPhase"] = json!("yes");
        assert!(matches!(
            TimerSettings::from_value(&json),
            Err(ValidationError::NotABoolean { .. })
        ));
    }

    #[test]
    fn strict_decode_rejects_unknown_field() {
        let mut json = full_record();
        json["volume"] = json!(3);
        assert_eq!(
            TimerSettings::from_value(&json),
            Err(ValidationError::UnknownField("volume".into()))
        );
    }

    #[test]
    fn from_json_rejects_malformed_text() {
        assert!(matches!(
            TimerSettings::from_json("{not json"),
            Err(ValidationError::Malformed(_))
        ));
        assert!(matches!(
            TimerSettings::from_json("[1, 2]"),
            Err(ValidationError::Malformed(_))
        ));
    }

    #[test]
    fn huge_number_is_out_of_range() {
        let mut json = full_record();
        json["workDuration"] = json!(u64::MAX);
        assert!(matches!(
            TimerSettings::from_value(&json),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn with_field_parses_user_text() {
        let s = TimerSettings::default();
        let updated = s.with_field("workDuration", " 45 ").unwrap();
        assert_eq!(updated.work_duration, 45);
        let updated = s.with_field("brownNoiseEnabled", "true").unwrap();
        assert!(updated.brown_noise_enabled);
    }

    #[test]
    fn with_field_rejects_bad_text() {
        let s = TimerSettings::default();
        assert!(matches!(
            s.with_field("workDuration", "abc"),
            Err(ValidationError::NotAnInteger { .. })
        ));
        assert!(matches!(
            s.with_field("workDuration", "61"),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(matches!(
            s.with_field("screenDimming", "1"),
            Err(ValidationError::NotABoolean { .. })
        ));
        assert!(matches!(
            s.with_field("theme", "dark"),
            Err(ValidationError::UnknownField(_))
        ));
    }

    #[test]
    fn error_messages_name_the_field() {
        let err = TimerSettings::default()
            .with_field("shortBreakDuration", "45")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "'shortBreakDuration' must be between 1 and 30, got 45"
        );
    }

    #[test]
    fn get_returns_display_text() {
        let s = TimerSettings::default();
        assert_eq!(s.get("workDuration").as_deref(), Some("25"));
        assert_eq!(s.get("screenDimming").as_deref(), Some("true"));
        assert!(s.get("missing").is_none());
    }

    #[test]
    fn duration_reads_current_settings() {
        let s = TimerSettings::default();
        assert_eq!(s.duration(Phase::Work), 25);
        assert_eq!(s.duration(Phase::ShortBreak), 5);
        assert_eq!(s.duration(Phase::LongBreak), 15);
        assert_eq!(s.duration_secs(Phase::LongBreak), 900);
    }
}
