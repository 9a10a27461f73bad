use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::{Customer, LoanRecord, Medium};
use crate::ports::{ChangeListener, CustomerRegistry, MediaRegistry};

use super::notifier::ChangeNotifier;

/// 貸出サービス - 貸出中の媒体と貸出記録の対応を管理する台帳
///
/// 各媒体に対して最大1枚の貸出記録を保持する。媒体がマップの
/// キーとして存在すること == その媒体が貸出中であること。
///
/// 顧客と在庫の存在確認は注入された2つの読み取り専用ポートに
/// 委譲する。台帳自身は貸出記録以外の状態を持たない。
///
/// # 事前条件について
///
/// すべての事前条件は呼び出し側の契約であり、違反はプログラミング
/// エラーとして`panic`（`precondition violated: …`）で報告される。
/// 回復可能なエラーとして扱ってはならない。変更操作は
/// all-or-nothing：最初の変更の前にすべての事前条件が検査される。
pub struct LendingService {
    /// 貸出中の媒体ごとの貸出記録。`loan_records.get(medium)`で
    /// その媒体の記録に直接アクセスできる。
    loan_records: HashMap<Medium, LoanRecord>,

    /// 顧客台帳
    customer_registry: Arc<dyn CustomerRegistry>,

    /// 在庫台帳
    media_registry: Arc<dyn MediaRegistry>,

    /// 変更通知の配信役
    notifier: ChangeNotifier,
}

impl LendingService {
    /// 新しい貸出サービスを生成する
    ///
    /// 台帳は`initial_records`から初期化され、各記録はその媒体を
    /// キーとして格納される。以降の変更は`lend_to`（挿入）と
    /// `return_media`（削除）だけが行う。
    pub fn new(
        customer_registry: Arc<dyn CustomerRegistry>,
        media_registry: Arc<dyn MediaRegistry>,
        initial_records: Vec<LoanRecord>,
    ) -> Self {
        let loan_records = initial_records
            .into_iter()
            .map(|record| (record.medium().clone(), record))
            .collect();

        Self {
            loan_records,
            customer_registry,
            media_registry,
            notifier: ChangeNotifier::new(),
        }
    }

    /// 変更通知の購読者を登録する
    pub fn subscribe(&mut self, listener: Arc<dyn ChangeListener>) {
        self.notifier.subscribe(listener);
    }

    /// 媒体を顧客に貸し出す。媒体ごとに新しい貸出記録を作成する。
    ///
    /// 通知はすべての挿入が終わった後にちょうど1回発火する。
    /// `media`が空の場合、通知以外は何も起きない。
    ///
    /// # パニック
    /// - `customer_known(customer)`でない場合
    /// - `all_not_on_loan(media)`でない場合（既に貸出中の媒体を含む）
    pub fn lend_to(&mut self, customer: &Customer, media: &[Medium], loan_date: NaiveDate) {
        assert!(
            self.customer_known(customer),
            "precondition violated: customer_known(customer)"
        );
        assert!(
            self.all_not_on_loan(media),
            "precondition violated: all_not_on_loan(media)"
        );

        for medium in media {
            let record = LoanRecord::new(customer.clone(), medium.clone(), loan_date);
            self.loan_records.insert(medium.clone(), record);
        }

        tracing::debug!(
            customer = %customer.number(),
            count = media.len(),
            %loan_date,
            "media loaned"
        );
        self.notifier.notify_changed();
    }

    /// 選択された媒体をこの顧客に貸し出せるか確認する
    ///
    /// # パニック
    /// - `customer_known(customer)`でない場合
    /// - `all_media_known(media)`でない場合
    pub fn is_lending_possible(&self, customer: &Customer, media: &[Medium]) -> bool {
        assert!(
            self.customer_known(customer),
            "precondition violated: customer_known(customer)"
        );
        assert!(
            self.all_media_known(media),
            "precondition violated: all_media_known(media)"
        );

        self.all_not_on_loan(media)
    }

    /// 指定された媒体の借り手を返す
    ///
    /// # パニック
    /// - `is_on_loan(medium)`でない場合
    pub fn borrower_of(&self, medium: &Medium) -> &Customer {
        assert!(
            self.is_on_loan(medium),
            "precondition violated: is_on_loan(medium)"
        );

        self.loan_records[medium].customer()
    }

    /// 指定された顧客が借りているすべての媒体を返す
    ///
    /// 現在何も借りていない場合は空のリストを返す。順序は台帳の
    /// 反復順に従う（規定なし）。
    ///
    /// # パニック
    /// - `customer_known(customer)`でない場合
    pub fn loaned_media_of(&self, customer: &Customer) -> Vec<Medium> {
        assert!(
            self.customer_known(customer),
            "precondition violated: customer_known(customer)"
        );

        self.loan_records
            .values()
            .filter(|record| record.customer() == customer)
            .map(|record| record.medium().clone())
            .collect()
    }

    /// 現在有効なすべての貸出記録のスナップショットを返す
    pub fn loan_records(&self) -> Vec<LoanRecord> {
        self.loan_records.values().cloned().collect()
    }

    /// 貸出中の媒体を返却する。対応する貸出記録は破棄される。
    ///
    /// 返却日は記録されない（記録ごと消えるため）。通知はすべての
    /// 削除が終わった後にちょうど1回発火する。
    ///
    /// # パニック
    /// - `all_on_loan(media)`でない場合
    pub fn return_media(&mut self, media: &[Medium], return_date: NaiveDate) {
        assert!(
            self.all_on_loan(media),
            "precondition violated: all_on_loan(media)"
        );

        for medium in media {
            self.loan_records.remove(medium);
        }

        tracing::debug!(count = media.len(), %return_date, "media returned");
        self.notifier.notify_changed();
    }

    /// 指定された媒体が貸出中か確認する
    ///
    /// # パニック
    /// - `medium_known(medium)`でない場合
    pub fn is_on_loan(&self, medium: &Medium) -> bool {
        assert!(
            self.medium_known(medium),
            "precondition violated: medium_known(medium)"
        );

        self.loan_records.contains_key(medium)
    }

    /// すべての媒体が貸出中か確認する
    ///
    /// 空のリストに対してはtrueを返す（空虚な真）。
    ///
    /// # パニック
    /// - `all_media_known(media)`でない場合
    pub fn all_on_loan(&self, media: &[Medium]) -> bool {
        assert!(
            self.all_media_known(media),
            "precondition violated: all_media_known(media)"
        );

        media.iter().all(|medium| self.is_on_loan(medium))
    }

    /// すべての媒体が貸出中でないか確認する
    ///
    /// 空のリストに対してはtrueを返す（空虚な真）。
    ///
    /// # パニック
    /// - `all_media_known(media)`でない場合
    pub fn all_not_on_loan(&self, media: &[Medium]) -> bool {
        assert!(
            self.all_media_known(media),
            "precondition violated: all_media_known(media)"
        );

        media.iter().all(|medium| !self.is_on_loan(medium))
    }

    /// 顧客が顧客台帳に存在するか確認する
    pub fn customer_known(&self, customer: &Customer) -> bool {
        self.customer_registry.contains_customer(customer)
    }

    /// 媒体が在庫台帳に存在するか確認する
    pub fn medium_known(&self, medium: &Medium) -> bool {
        self.media_registry.contains_medium(medium)
    }

    /// すべての媒体が在庫台帳に存在するか確認する
    ///
    /// 最初の未知の媒体で打ち切る。空のリストに対してはtrueを返す。
    pub fn all_media_known(&self, media: &[Medium]) -> bool {
        media.iter().all(|medium| self.medium_known(medium))
    }

    /// 指定された顧客に属するすべての有効な貸出記録を返す
    ///
    /// # パニック
    /// - `customer_known(customer)`でない場合
    pub fn loan_records_for(&self, customer: &Customer) -> Vec<LoanRecord> {
        assert!(
            self.customer_known(customer),
            "precondition violated: customer_known(customer)"
        );

        self.loan_records
            .values()
            .filter(|record| record.customer() == customer)
            .cloned()
            .collect()
    }

    /// 指定された媒体の有効な貸出記録を返す
    ///
    /// 媒体が貸出中でない場合は`None`。
    pub fn loan_record_for(&self, medium: &Medium) -> Option<&LoanRecord> {
        self.loan_records.get(medium)
    }
}
