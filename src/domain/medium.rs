use serde::{Deserialize, Serialize};

/// 媒体 - 貸出可能なカタログアイテム（CDなど）
///
/// 値オブジェクト：同一性は全フィールドの内容で決まり、台帳の
/// 検索キーとして使われる。生成後は不変。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Medium {
    title: String,
    comment: String,
    artist: String,
    playtime_minutes: u32,
}

impl Medium {
    pub fn new(
        title: impl Into<String>,
        comment: impl Into<String>,
        artist: impl Into<String>,
        playtime_minutes: u32,
    ) -> Self {
        Self {
            title: title.into(),
            comment: comment.into(),
            artist: artist.into(),
            playtime_minutes,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }

    /// 再生時間（分）
    pub fn playtime_minutes(&self) -> u32 {
        self.playtime_minutes
    }
}

impl std::fmt::Display for Medium {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.artist, self.title)
    }
}
