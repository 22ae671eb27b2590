use serde::Deserialize;

/// Money-like value returned by the gateway as either JSON string or JSON number.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TransportMoney {
    Number(f64),
    String(String),
}

impl TransportMoney {
    /// Numeric amount; unparseable strings yield `None`.
    pub fn into_f64(self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(value),
            Self::String(value) => value.trim().parse::<f64>().ok(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_numbers_and_numeric_strings() {
        let number: TransportMoney = serde_json::from_str("125.50").unwrap();
        assert_eq!(number.into_f64(), Some(125.5));

        let string: TransportMoney = serde_json::from_str(r#"" 10.00 ""#).unwrap();
        assert_eq!(string.into_f64(), Some(10.0));

        let junk: TransportMoney = serde_json::from_str(r#""n/a""#).unwrap();
        assert_eq!(junk.into_f64(), None);
    }
}
