//! Session record model (upstream history feed)

use serde::{de, Deserialize, Deserializer, Serialize};

use super::outcome::{Outcome, UnknownOutcome};

/// One finished session as published by the upstream feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    #[serde(rename = "Phien", deserialize_with = "integral")]
    pub session_id: i64,

    #[serde(rename = "Xuc_xac_1", deserialize_with = "integral")]
    pub dice_1: i64,

    #[serde(rename = "Xuc_xac_2", deserialize_with = "integral")]
    pub dice_2: i64,

    #[serde(rename = "Xuc_xac_3", deserialize_with = "integral")]
    pub dice_3: i64,

    #[serde(rename = "Tong", deserialize_with = "integral")]
    pub total: i64,

    /// Raw outcome label, echoed back unchanged
    #[serde(rename = "Ket_qua")]
    pub result: String,
}

impl SessionRecord {
    pub fn dice(&self) -> [i64; 3] {
        [self.dice_1, self.dice_2, self.dice_3]
    }

    pub fn outcome(&self) -> Result<Outcome, UnknownOutcome> {
        self.result.parse()
    }

    /// `None` once the id can no longer be incremented
    pub fn next_session_id(&self) -> Option<i64> {
        self.session_id.checked_add(1)
    }
}

/// Whole number sent either as a JSON integer or as a float without fraction (`13.0`)
fn integral<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Number {
        Int(i64),
        Float(f64),
    }

    match Number::deserialize(deserializer)? {
        Number::Int(n) => Ok(n),
        Number::Float(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 9.0e18 => Ok(f as i64),
        Number::Float(f) => Err(de::Error::custom(format!("expected a whole number, got {}", f))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_upstream_record() {
        let record: SessionRecord = serde_json::from_value(json!({
            "Phien": 2718281,
            "Xuc_xac_1": 6,
            "Xuc_xac_2": 4,
            "Xuc_xac_3": 3,
            "Tong": 13,
            "Ket_qua": "Tài",
            "extra": "ignored"
        }))
        .unwrap();

        assert_eq!(record.session_id, 2718281);
        assert_eq!(record.dice(), [6, 4, 3]);
        assert_eq!(record.total, 13);
        assert_eq!(record.outcome(), Ok(Outcome::High));
        assert_eq!(record.next_session_id(), Some(2718282));
    }

    #[test]
    fn test_whole_floats_accepted() {
        let record: SessionRecord = serde_json::from_value(json!({
            "Phien": 42.0,
            "Xuc_xac_1": 1.0,
            "Xuc_xac_2": 5,
            "Xuc_xac_3": 6.0,
            "Tong": 12.0,
            "Ket_qua": "Xỉu"
        }))
        .unwrap();

        assert_eq!(record.session_id, 42);
        assert_eq!(record.dice(), [1, 5, 6]);
        assert_eq!(record.total, 12);
    }

    #[test]
    fn test_fractional_or_text_numbers_rejected() {
        let fractional = serde_json::from_value::<SessionRecord>(json!({
            "Phien": 42.5,
            "Xuc_xac_1": 1,
            "Xuc_xac_2": 5,
            "Xuc_xac_3": 6,
            "Tong": 12,
            "Ket_qua": "Xỉu"
        }));
        assert!(fractional.is_err());

        let text = serde_json::from_value::<SessionRecord>(json!({
            "Phien": "42",
            "Xuc_xac_1": 1,
            "Xuc_xac_2": 5,
            "Xuc_xac_3": 6,
            "Tong": 12,
            "Ket_qua": "Xỉu"
        }));
        assert!(text.is_err());
    }

    #[test]
    fn test_next_session_id_at_max() {
        let record = SessionRecord {
            session_id: i64::MAX,
            dice_1: 1,
            dice_2: 1,
            dice_3: 1,
            total: 3,
            result: "Xỉu".to_string(),
        };
        assert_eq!(record.next_session_id(), None);
    }

    #[test]
    fn test_missing_field_rejected() {
        let result = serde_json::from_value::<SessionRecord>(json!({
            "Phien": 1,
            "Xuc_xac_1": 1,
            "Xuc_xac_2": 2,
            "Tong": 6,
            "Ket_qua": "Xỉu"
        }));
        assert!(result.is_err());
    }
}
