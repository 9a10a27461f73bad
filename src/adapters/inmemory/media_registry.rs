use crate::domain::Medium;
use crate::ports::media_registry::MediaRegistry as MediaRegistryTrait;
use std::collections::HashSet;
use std::sync::Mutex;

/// MediaRegistryのインメモリ実装
///
/// 実際の在庫管理サービスの代わりとなる。
/// 媒体は`add_medium`で在庫に登録する。
pub struct MediaRegistry {
    media: Mutex<HashSet<Medium>>,
}

impl MediaRegistry {
    pub fn new() -> Self {
        Self {
            media: Mutex::new(HashSet::new()),
        }
    }

    /// 媒体を在庫に登録する
    pub fn add_medium(&self, medium: Medium) {
        self.media.lock().unwrap().insert(medium);
    }
}

impl Default for MediaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl MediaRegistryTrait for MediaRegistry {
    /// 登録された在庫の中に媒体が存在するかチェック
    fn contains_medium(&self, medium: &Medium) -> bool {
        self.media.lock().unwrap().contains(medium)
    }
}
