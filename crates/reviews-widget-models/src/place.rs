use serde::{Deserialize, Serialize};

/// A single review exactly as the provider returns it.
///
/// Every field is optional: the provider omits keys freely and sometimes
/// sends explicit `null`s or a value of the wrong type. A field that cannot
/// be read is treated as absent so one odd review never sinks the response.
/// Unknown keys (`author_url`, `language`, `relative_time_description`, ...)
/// are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RawReview {
    #[serde(default, deserialize_with = "lenient::text")]
    pub author_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub profile_photo_url: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub text: Option<String>,
    #[serde(default, deserialize_with = "lenient::seconds")]
    pub time: Option<i64>, // Unix epoch seconds
}

/// The `result` object of a place details response.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PlaceDetails {
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "lenient::count")]
    pub user_ratings_total: Option<u64>,
    #[serde(default, deserialize_with = "lenient::reviews")]
    pub reviews: Option<Vec<RawReview>>,
}

/// Top-level envelope of a place details response.
///
/// `result` is absent when the provider rejects the request; `status` and
/// `error_message` then say why (e.g. `REQUEST_DENIED`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PlaceDetailsResponse {
    #[serde(default)]
    pub result: Option<PlaceDetails>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
}

// Field readers that turn a mistyped value into `None` instead of an error
mod lenient {
    use super::RawReview;
    use serde::{Deserialize, Deserializer};
    use serde_json::{Number, Value};

    fn value<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
        Option::<Value>::deserialize(deserializer)
    }

    fn finite(n: f64) -> Option<f64> {
        n.is_finite().then_some(n)
    }

    fn whole_seconds(n: f64) -> Option<i64> {
        let n = finite(n)?.floor();
        (n >= i64::MIN as f64 && n <= i64::MAX as f64).then_some(n as i64)
    }

    fn integer(number: &Number) -> Option<i64> {
        number.as_i64().or_else(|| number.as_f64().and_then(whole_seconds))
    }

    pub fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
        Ok(match value(deserializer)? {
            Some(Value::String(s)) => Some(s),
            _ => None,
        })
    }

    /// Numbers, or strings holding one (`"4"`, `"4.5"`)
    pub fn number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
        Ok(match value(deserializer)? {
            Some(Value::Number(n)) => n.as_f64().and_then(finite),
            Some(Value::String(s)) => s.trim().parse::<f64>().ok().and_then(finite),
            _ => None,
        })
    }

    /// Integers, floats (`1.7e9`, floored) or numeric strings
    pub fn seconds<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
        Ok(match value(deserializer)? {
            Some(Value::Number(n)) => integer(&n),
            Some(Value::String(s)) => {
                let s = s.trim();
                s.parse::<i64>()
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().and_then(whole_seconds))
            }
            _ => None,
        })
    }

    pub fn count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u64>, D::Error> {
        Ok(seconds(deserializer)?.and_then(|n| u64::try_from(n).ok()))
    }

    /// Review objects; entries that are not objects are dropped
    pub fn reviews<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Vec<RawReview>>, D::Error> {
        Ok(match value(deserializer)? {
            Some(Value::Array(items)) => Some(
                items
                    .into_iter()
                    .filter(Value::is_object)
                    .filter_map(|item| serde_json::from_value(item).ok())
                    .collect(),
            ),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_review_accepts_nulls_and_unknown_fields() {
        let review: RawReview = serde_json::from_value(serde_json::json!({
            "author_name": null,
            "rating": 4,
            "time": 1700000000,
            "relative_time_description": "a week ago",
            "language": "en"
        }))
        .unwrap();

        assert_eq!(review.author_name, None);
        assert_eq!(review.rating, Some(4.0));
        assert_eq!(review.time, Some(1_700_000_000));
        assert_eq!(review.text, None);
    }

    #[test]
    fn test_response_without_result() {
        let response: PlaceDetailsResponse = serde_json::from_str(
            r#"{"status": "REQUEST_DENIED", "error_message": "The provided API key is invalid."}"#,
        )
        .unwrap();

        assert!(response.result.is_none());
        assert_eq!(response.status.as_deref(), Some("REQUEST_DENIED"));
    }

    #[test]
    fn test_empty_result_object() {
        let response: PlaceDetailsResponse =
            serde_json::from_str(r#"{"result": {}, "status": "OK"}"#).unwrap();
        let result = response.result.unwrap();

        assert_eq!(result.rating, None);
        assert_eq!(result.user_ratings_total, None);
        assert!(result.reviews.is_none());
    }

    #[test]
    fn test_mistyped_review_fields_read_as_absent() {
        let review: RawReview = serde_json::from_value(serde_json::json!({
            "author_name": 42,
            "profile_photo_url": ["not", "a", "url"],
            "rating": {"value": 5},
            "text": true,
            "time": "yesterday"
        }))
        .unwrap();

        assert_eq!(review, RawReview::default());
    }

    #[test]
    fn test_numeric_strings_and_float_times() {
        let review: RawReview = serde_json::from_value(serde_json::json!({
            "rating": "4",
            "time": 1.7e9
        }))
        .unwrap();
        assert_eq!(review.rating, Some(4.0));
        assert_eq!(review.time, Some(1_700_000_000));

        let review: RawReview = serde_json::from_value(serde_json::json!({
            "rating": " 4.5 ",
            "time": "1700000000"
        }))
        .unwrap();
        assert_eq!(review.rating, Some(4.5));
        assert_eq!(review.time, Some(1_700_000_000));

        let review: RawReview =
            serde_json::from_value(serde_json::json!({ "time": 1700000000.75 })).unwrap();
        assert_eq!(review.time, Some(1_700_000_000));
    }

    #[test]
    fn test_result_with_mistyped_summary_and_reviews() {
        let result: PlaceDetails = serde_json::from_value(serde_json::json!({
            "name": null,
            "rating": "4.2",
            "user_ratings_total": -3,
            "reviews": [{"author_name": "Ok", "rating": 5}, "garbage", {"rating": "x"}]
        }))
        .unwrap();

        assert_eq!(result.rating, Some(4.2));
        assert_eq!(result.user_ratings_total, None);
        let reviews = result.reviews.unwrap();
        assert_eq!(reviews.len(), 2);
        assert_eq!(reviews[0].author_name.as_deref(), Some("Ok"));
        assert_eq!(reviews[1].rating, None);

        let result: PlaceDetails =
            serde_json::from_value(serde_json::json!({ "reviews": "none" })).unwrap();
        assert!(result.reviews.is_none());
    }
}
