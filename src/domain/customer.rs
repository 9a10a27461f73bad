use serde::{Deserialize, Serialize};

use super::CustomerNumber;

/// 顧客 - 媒体を借りることができる登録済みの人物
///
/// 生成後は不変。同一性は顧客番号のみで決まる：
/// 名前が異なっても番号が同じなら同じ顧客として扱う。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    number: CustomerNumber,
    first_name: String,
    last_name: String,
}

impl Customer {
    pub fn new(
        number: CustomerNumber,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            number,
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// 顧客番号
    pub fn number(&self) -> CustomerNumber {
        self.number
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }
}

// 同一性は番号のみ。名前は比較に含めない。
impl PartialEq for Customer {
    fn eq(&self, other: &Self) -> bool {
        self.number == other.number
    }
}

impl Eq for Customer {}

impl std::hash::Hash for Customer {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.number.hash(state);
    }
}

impl std::fmt::Display for Customer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} ({})", self.first_name, self.last_name, self.number)
    }
}
