use std::net::IpAddr;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Validation problem found in an attribute value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{attribute}: {message}")]
pub struct Diagnostic {
    /// Dotted path of the offending attribute, e.g. `subnet.0.prefix_length`.
    pub attribute: String,
    pub message: String,
}

impl Diagnostic {
    pub fn new(attribute: &str, message: impl Into<String>) -> Self {
        Self {
            attribute: attribute.to_owned(),
            message: message.into(),
        }
    }
}

/// Value constraint attached to a primitive attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Validator {
    /// String must be one of `valid`.
    StringInSlice { valid: Vec<String>, ignore_case: bool },
    /// Integer must lie in `[min, max]`.
    IntBetween { min: i64, max: i64 },
    /// String must parse as a single IPv4 or IPv6 address.
    SingleIp,
}

impl Validator {
    pub fn string_in_slice<I, S>(valid: I, ignore_case: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::StringInSlice {
            valid: valid.into_iter().map(Into::into).collect(),
            ignore_case,
        }
    }

    pub fn int_between(min: i64, max: i64) -> Self {
        Self::IntBetween { min, max }
    }

    /// Check `value` (the attribute at `key`) against this constraint.
    pub fn check(&self, key: &str, value: &Value) -> Result<(), Diagnostic> {
        match self {
            Self::StringInSlice { valid, ignore_case } => {
                let s = value.as_str().ok_or_else(|| {
                    Diagnostic::new(key, format!("expected type of {key} to be string"))
                })?;
                let found = valid.iter().any(|v| {
                    if *ignore_case {
                        v.eq_ignore_ascii_case(s)
                    } else {
                        v == s
                    }
                });
                if found {
                    Ok(())
                } else {
                    Err(Diagnostic::new(
                        key,
                        format!(
                            "expected {key} to be one of [{}], got {s}",
                            valid.join(", ")
                        ),
                    ))
                }
            }
            Self::IntBetween { min, max } => {
                let n = value.as_i64().ok_or_else(|| {
                    Diagnostic::new(key, format!("expected type of {key} to be integer"))
                })?;
                if (*min..=*max).contains(&n) {
                    Ok(())
                } else {
                    Err(Diagnostic::new(
                        key,
                        format!("expected {key} to be in the range ({min} - {max}), got {n}"),
                    ))
                }
            }
            Self::SingleIp => {
                let s = value.as_str().ok_or_else(|| {
                    Diagnostic::new(key, format!("expected type of {key} to be string"))
                })?;
                if s.parse::<IpAddr>().is_ok() {
                    Ok(())
                } else {
                    Err(Diagnostic::new(
                        key,
                        format!("expected {key} to contain a valid IP, got: {s}"),
                    ))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn string_in_slice_respects_case_flag() {
        let strict = Validator::string_in_slice(["UP", "DOWN"], false);
        assert!(strict.check("admin_state", &json!("UP")).is_ok());
        assert!(strict.check("admin_state", &json!("up")).is_err());

        let relaxed = Validator::string_in_slice(["UP", "DOWN"], true);
        assert!(relaxed.check("admin_state", &json!("down")).is_ok());
    }

    #[test]
    fn string_in_slice_message_lists_choices() {
        let err = Validator::string_in_slice(["UP", "DOWN"], false)
            .check("admin_state", &json!("SIDEWAYS"))
            .err();
        assert_eq!(
            err.map(|d| d.message),
            Some("expected admin_state to be one of [UP, DOWN], got SIDEWAYS".to_owned())
        );
    }

    #[test]
    fn int_between_is_inclusive() {
        let v = Validator::int_between(0, 32);
        assert!(v.check("prefix_length", &json!(0)).is_ok());
        assert!(v.check("prefix_length", &json!(32)).is_ok());
        assert!(v.check("prefix_length", &json!(33)).is_err());
        assert!(v.check("prefix_length", &json!(-1)).is_err());
        assert!(v.check("prefix_length", &json!("24")).is_err());
    }

    #[test]
    fn single_ip_accepts_v4_and_v6_only() {
        let v = Validator::SingleIp;
        assert!(v.check("ip_address", &json!("10.0.0.1")).is_ok());
        assert!(v.check("ip_address", &json!("fe80::1")).is_ok());
        assert!(v.check("ip_address", &json!("10.0.0.0/24")).is_err());
        assert!(v.check("ip_address", &json!("not-an-ip")).is_err());
    }
}
