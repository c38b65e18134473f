//! Carrier (card type) codes and labels.

use serde::{Serialize, Serializer};
use std::fmt;

/// Label reported for carrier codes outside the known operator table.
pub const UNKNOWN_OPERATOR: &str = "未知电信运营商";

/// Telecom operator owning a phone prefix block.
///
/// Wire codes 1-6 map to the named variants; any other code is preserved
/// in [`CardType::Unknown`] and renders as the unknown-operator label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardType {
    /// 中国移动
    Cmcc,
    /// 中国联通
    Cucc,
    /// 中国电信
    Ctcc,
    /// 中国电信虚拟运营商
    CtccVno,
    /// 中国联通虚拟运营商
    CuccVno,
    /// 中国移动虚拟运营商
    CmccVno,
    /// Code not present in the operator table.
    Unknown(u8),
}

impl CardType {
    /// Convert from the raw index byte.
    ///
    /// Total over all byte values; codes outside 1-6 become `Unknown`.
    pub fn from_u8(v: u8) -> Self {
        match v {
            1 => CardType::Cmcc,
            2 => CardType::Cucc,
            3 => CardType::Ctcc,
            4 => CardType::CtccVno,
            5 => CardType::CuccVno,
            6 => CardType::CmccVno,
            other => CardType::Unknown(other),
        }
    }

    /// Convert back to the raw wire code.
    pub fn as_u8(self) -> u8 {
        match self {
            CardType::Cmcc => 1,
            CardType::Cucc => 2,
            CardType::Ctcc => 3,
            CardType::CtccVno => 4,
            CardType::CuccVno => 5,
            CardType::CmccVno => 6,
            CardType::Unknown(v) => v,
        }
    }

    /// Human-readable operator label.
    pub fn as_str(&self) -> &'static str {
        match self {
            CardType::Cmcc => "中国移动",
            CardType::Cucc => "中国联通",
            CardType::Ctcc => "中国电信",
            CardType::CtccVno => "中国电信虚拟运营商",
            CardType::CuccVno => "中国联通虚拟运营商",
            CardType::CmccVno => "中国移动虚拟运营商",
            CardType::Unknown(_) => UNKNOWN_OPERATOR,
        }
    }

    /// Whether this code belongs to a virtual operator block.
    pub fn is_virtual(&self) -> bool {
        matches!(
            self,
            CardType::CtccVno | CardType::CuccVno | CardType::CmccVno
        )
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for CardType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
