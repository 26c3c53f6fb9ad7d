//! Quote payload served by the server and read by the client.
use serde::{Deserialize, Serialize};

/// The last bid for the USD-BRL pair.
///
/// The bid is kept as text so the upstream decimal formatting reaches the
/// client untouched. On the wire it is `{"bid":"<string>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Bid price exactly as published upstream.
    pub bid: String,
}

impl Quote {
    /// Creates a quote from a bid string.
    pub fn new(bid: impl Into<String>) -> Self {
        Quote { bid: bid.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_a_single_bid_key() {
        let json = serde_json::to_string(&Quote::new("5.4321")).unwrap();
        assert_eq!(json, r#"{"bid":"5.4321"}"#);
    }

    #[test]
    fn keeps_trailing_zeros() {
        let quote: Quote = serde_json::from_str(r#"{"bid":"5.4300"}"#).unwrap();
        assert_eq!(quote.bid, "5.4300");
    }

    #[test]
    fn rejects_a_numeric_bid() {
        assert!(serde_json::from_str::<Quote>(r#"{"bid":5.43}"#).is_err());
    }
}
