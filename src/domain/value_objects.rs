use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 顧客番号のエラー
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CustomerNumberError {
    /// 6桁の数値ではない
    #[error("customer number must have exactly six digits, got {0}")]
    NotSixDigits(u32),
}

/// 顧客番号
///
/// 不変条件：ちょうど6桁の数値（100000〜999999）。
/// 型システムでこの制約を強制し、不正な番号を作成できないようにする。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CustomerNumber(u32);

impl CustomerNumber {
    /// 現在の番号
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for CustomerNumber {
    type Error = CustomerNumberError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        if !(100_000..=999_999).contains(&value) {
            return Err(CustomerNumberError::NotSixDigits(value));
        }
        Ok(Self(value))
    }
}

impl std::fmt::Display for CustomerNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_number_try_from_valid() {
        let number = CustomerNumber::try_from(123456);
        assert!(number.is_ok());
        assert_eq!(number.unwrap().value(), 123456);

        assert!(CustomerNumber::try_from(100_000).is_ok());
        assert!(CustomerNumber::try_from(999_999).is_ok());
    }

    #[test]
    fn test_customer_number_try_from_too_short() {
        let number = CustomerNumber::try_from(99_999);
        assert!(number.is_err());
        assert_eq!(
            number.unwrap_err(),
            CustomerNumberError::NotSixDigits(99_999)
        );
    }

    #[test]
    fn test_customer_number_try_from_too_long() {
        let number = CustomerNumber::try_from(1_000_000);
        assert!(number.is_err());
    }

    #[test]
    fn test_customer_number_display() {
        let number = CustomerNumber::try_from(123456).unwrap();
        assert_eq!(number.to_string(), "123456");
    }
}
