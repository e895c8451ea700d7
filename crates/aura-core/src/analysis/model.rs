//! Analysis domain models.

use serde::{Deserialize, Serialize};

use super::POSITIVE_SENTIMENT;

/// Body of a text analysis request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub text: String,
}

/// Sentiment score and keywords extracted from a piece of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub sentiment: f64,
    pub keywords: Vec<String>,
}

impl AnalysisResult {
    /// Whether a positive marker word was found.
    pub fn is_positive(&self) -> bool {
        self.sentiment == POSITIVE_SENTIMENT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_from_json() {
        let req: AnalysisRequest = serde_json::from_str(r#"{"text": "hello"}"#).unwrap();
        assert_eq!(req.text, "hello");
    }

    #[test]
    fn test_request_rejects_missing_text() {
        assert!(serde_json::from_str::<AnalysisRequest>("{}").is_err());
        assert!(serde_json::from_str::<AnalysisRequest>(r#"{"text": 42}"#).is_err());
    }

    #[test]
    fn test_result_json_shape() {
        let result = AnalysisResult {
            sentiment: 0.3,
            keywords: vec!["hello".to_string()],
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json, serde_json::json!({ "sentiment": 0.3, "keywords": ["hello"] }));
    }
}
