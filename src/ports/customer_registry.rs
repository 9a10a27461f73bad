use crate::domain::Customer;

/// 顧客台帳ポート
///
/// 貸出コンテキストと顧客管理コンテキストの境界を維持する。
/// 貸出コンテキストは「顧客が登録済みか」だけを知り、
/// 顧客台帳の管理方法は知らない。
pub trait CustomerRegistry: Send + Sync {
    /// 顧客が台帳に登録されているか確認する
    ///
    /// 貸出操作の事前条件チェックに使用される。
    fn contains_customer(&self, customer: &Customer) -> bool;
}
