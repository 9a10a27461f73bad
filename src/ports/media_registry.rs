use crate::domain::Medium;

/// 在庫台帳ポート
///
/// 貸出コンテキストと在庫管理コンテキストの境界を維持する。
/// 貸出コンテキストは「媒体が在庫に存在するか」だけを知る。
pub trait MediaRegistry: Send + Sync {
    /// 媒体が在庫に存在するか確認する
    ///
    /// 貸出状態クエリの事前条件チェックに使用される。
    fn contains_medium(&self, medium: &Medium) -> bool;
}
