use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Customer, Medium};

/// 貸出記録 - 1人の顧客・1つの媒体・貸出開始日の関連
///
/// 貸出の開始時にのみ作成され、その媒体の返却時にのみ破棄される。
/// 記録が存在する間、媒体は貸出中とみなされる。
///
/// 貸出日は`NaiveDate`なので「日付がnullでない」という不変条件は
/// 型で保証される。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanRecord {
    customer: Customer,
    medium: Medium,
    loan_date: NaiveDate,
}

impl LoanRecord {
    pub fn new(customer: Customer, medium: Medium, loan_date: NaiveDate) -> Self {
        Self {
            customer,
            medium,
            loan_date,
        }
    }

    /// 借り手
    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    /// 貸出中の媒体
    pub fn medium(&self) -> &Medium {
        &self.medium
    }

    /// 貸出開始日
    pub fn loan_date(&self) -> NaiveDate {
        self.loan_date
    }
}
