/// 変更通知ポート
///
/// 台帳の変更をUI層などの購読者に伝えるメカニズムを抽象化する。
/// ペイロードはなく、「何かが変わった」という事実だけを通知する。
pub trait ChangeListener: Send + Sync {
    /// 台帳が変更されたことを通知される
    ///
    /// 成功した`lend_to` / `return_media`の呼び出しごとに
    /// ちょうど1回呼ばれる（媒体ごとではない）。
    fn ledger_changed(&self);
}
