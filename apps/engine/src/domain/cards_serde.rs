//! Serialization and deserialization for card types

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::cards_parsing::card_token;
use super::cards_types::{Card, Suit};

// Suit serde
impl Serialize for Suit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = match self {
            Suit::Swords => "SWORDS",
            Suit::Clubs => "CLUBS",
            Suit::Coins => "COINS",
            Suit::Cups => "CUPS",
        };
        serializer.serialize_str(s)
    }
}

impl<'de> Deserialize<'de> for Suit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "SWORDS" => Ok(Suit::Swords),
            "CLUBS" => Ok(Suit::Clubs),
            "COINS" => Ok(Suit::Coins),
            "CUPS" => Ok(Suit::Cups),
            _ => Err(serde::de::Error::custom(format!("Invalid suit: {s}"))),
        }
    }
}

// Card serde (compact token format like "1S", "12H")
impl Serialize for Card {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&card_token(*self))
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<Card>().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cards_types::Rank;

    #[test]
    fn card_serializes_as_token() {
        let card = Card::new(Rank::Seven, Suit::Coins);
        assert_eq!(serde_json::to_string(&card).unwrap(), "\"7D\"");
        let back: Card = serde_json::from_str("\"7D\"").unwrap();
        assert_eq!(back, card);
    }

    #[test]
    fn suit_uses_upper_case_names() {
        assert_eq!(serde_json::to_string(&Suit::Cups).unwrap(), "\"CUPS\"");
        assert!(serde_json::from_str::<Suit>("\"HEARTS\"").is_err());
    }

    #[test]
    fn invalid_card_token_is_a_serde_error() {
        let err = serde_json::from_str::<Card>("\"9Z\"").unwrap_err();
        assert!(err.to_string().contains("Parse card"));
    }
}
