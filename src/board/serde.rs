//! Serde support. Moves travel as coordinate strings and positions as FEN
//! strings, so serialized data matches the textual surface everywhere else.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use super::{Board, Move};


impl Serialize for Move {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.to_coord().as_str())
    }
}

impl<'de> Deserialize<'de> for Move {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let coord = String::deserialize(deserializer)?;
        Move::from_coord(&coord)
            .ok_or_else(|| de::Error::custom(format!("invalid coordinate move `{coord}`")))
    }
}

impl Serialize for Board {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.to_fen().as_str())
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let fen = String::deserialize(deserializer)?;
        Board::from_fen(&fen).map_err(de::Error::custom)
    }
}


#[cfg(test)]
mod tests {
    use crate::board::{Board, Move};

    #[test]
    fn test_move_json_round_trip() {
        let mov = Move::from_coord("e7e8q").unwrap();
        let json = serde_json::to_string(&mov).unwrap();
        assert_eq!(json, "\"e7e8q\"");
        assert_eq!(serde_json::from_str::<Move>(&json).unwrap(), mov);

        assert!(serde_json::from_str::<Move>("\"e9e8\"").is_err());
    }

    #[test]
    fn test_board_json_round_trip() {
        let board = Board::default();
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(serde_json::from_str::<Board>(&json).unwrap(), board);
    }
}
