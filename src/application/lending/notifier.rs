use crate::ports::ChangeListener;
use std::sync::Arc;

/// 変更通知の配信役
///
/// 台帳が所有するコールバックリスト。購読者の管理と通知の配信
/// だけを責務とし、台帳の状態には一切触れない。
#[derive(Default)]
pub struct ChangeNotifier {
    listeners: Vec<Arc<dyn ChangeListener>>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// 購読者を登録する
    pub fn subscribe(&mut self, listener: Arc<dyn ChangeListener>) {
        self.listeners.push(listener);
    }

    /// すべての購読者に「台帳が変わった」と通知する
    ///
    /// 成功した変更操作ごとにちょうど1回呼ばれる。
    pub fn notify_changed(&self) {
        for listener in &self.listeners {
            listener.ledger_changed();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingListener {
        calls: AtomicUsize,
    }

    impl ChangeListener for CountingListener {
        fn ledger_changed(&self) {
            self.calls.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_notify_reaches_every_listener() {
        let mut notifier = ChangeNotifier::new();
        let first = Arc::new(CountingListener {
            calls: AtomicUsize::new(0),
        });
        let second = Arc::new(CountingListener {
            calls: AtomicUsize::new(0),
        });
        notifier.subscribe(first.clone());
        notifier.subscribe(second.clone());

        notifier.notify_changed();

        assert_eq!(first.calls.load(Ordering::SeqCst), 1);
        assert_eq!(second.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_notify_without_listeners_is_a_no_op() {
        let notifier = ChangeNotifier::new();
        notifier.notify_changed();
    }

    #[test]
    fn test_each_notify_is_delivered_once() {
        let mut notifier = ChangeNotifier::new();
        let listener = Arc::new(CountingListener {
            calls: AtomicUsize::new(0),
        });
        notifier.subscribe(listener.clone());

        notifier.notify_changed();
        notifier.notify_changed();

        assert_eq!(listener.calls.load(Ordering::SeqCst), 2);
    }
}
