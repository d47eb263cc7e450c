use serde::{Deserialize, Serialize};

/// One generated draw, as returned by the number service.
///
/// Field presence and integer types are enforced by deserialization;
/// counts and ranges are taken as given.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NumberSet {
    pub main_numbers: Vec<i64>,
    pub lucky_stars: Vec<i64>,
}

impl NumberSet {
    pub fn new(main_numbers: Vec<i64>, lucky_stars: Vec<i64>) -> Self {
        NumberSet {
            main_numbers,
            lucky_stars,
        }
    }
}

/// A successful draw together with when and how fast it arrived
#[derive(Clone, Debug, PartialEq)]
pub struct Draw {
    pub numbers: NumberSet,
    pub fetched_at: chrono::DateTime<chrono::Utc>,
    pub time_ms: u64,
}

/// Every state the number display can be in
#[derive(Clone, Debug, PartialEq, Default)]
pub enum RequestState {
    /// Before the first refresh
    #[default]
    Idle,
    Loading,
    Success(Draw),
    Failed(String),
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    pub fn numbers(&self) -> Option<&NumberSet> {
        match self {
            RequestState::Success(draw) => Some(&draw.numbers),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RequestState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            RequestState::Idle => "idle",
            RequestState::Loading => "loading",
            RequestState::Success(_) => "success",
            RequestState::Failed(_) => "failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_payload() {
        let json = r#"{"main_numbers":[3,14,15,92,6],"lucky_stars":[5,3]}"#;
        let set: NumberSet = serde_json::from_str(json).unwrap();
        assert_eq!(set.main_numbers, vec![3, 14, 15, 92, 6]);
        assert_eq!(set.lucky_stars, vec![5, 3]);
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let json = r#"{"main_numbers":[1,2,3,4,5]}"#;
        assert!(serde_json::from_str::<NumberSet>(json).is_err());
    }

    #[test]
    fn test_ill_typed_field_is_rejected() {
        let json = r#"{"main_numbers":["1"],"lucky_stars":[2]}"#;
        assert!(serde_json::from_str::<NumberSet>(json).is_err());
    }

    #[test]
    fn test_counts_are_not_validated() {
        let json = r#"{"main_numbers":[],"lucky_stars":[1,2,3,4]}"#;
        let set: NumberSet = serde_json::from_str(json).unwrap();
        assert!(set.main_numbers.is_empty());
        assert_eq!(set.lucky_stars.len(), 4);
    }

    #[test]
    fn test_state_accessors() {
        assert!(RequestState::Loading.is_loading());
        assert_eq!(RequestState::Failed("boom".into()).error(), Some("boom"));
        assert_eq!(RequestState::Idle.numbers(), None);
    }
}
