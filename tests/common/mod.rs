use mediathek_lending::adapters::inmemory::{CustomerRegistry, MediaRegistry};
use mediathek_lending::application::lending::LendingService;
use mediathek_lending::domain::{Customer, CustomerNumber, Medium};
use std::sync::{Arc, Once};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

static INIT: Once = Once::new();

/// テスト用のtracing購読者を初期化する
///
/// 複数のテストが同じプロセスで走るため、初期化は1回だけ行う。
/// RUST_LOGが設定されていない場合はクレートのdebugログを出す。
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "mediathek_lending=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().with_test_writer())
            .init();
    });
}

/// 6桁の顧客番号からテスト用顧客を作る
pub fn customer(number: u32, first_name: &str, last_name: &str) -> Customer {
    Customer::new(
        CustomerNumber::try_from(number).unwrap(),
        first_name,
        last_name,
    )
}

/// タイトルだけが異なるテスト用媒体を作る
pub fn medium(title: &str) -> Medium {
    Medium::new(title, "comment", "artist", 42)
}

/// 登録済みの顧客と媒体を持つ空の貸出サービスを組み立てる
///
/// 台帳の初期状態は空。初期記録が必要なテストは
/// `LendingService::new`を直接使う。
pub fn build_service(customers: &[Customer], media: &[Medium]) -> LendingService {
    init_tracing();

    let customer_registry = Arc::new(CustomerRegistry::new());
    for c in customers {
        customer_registry.add_customer(c.clone());
    }

    let media_registry = Arc::new(MediaRegistry::new());
    for m in media {
        media_registry.add_medium(m.clone());
    }

    LendingService::new(customer_registry, media_registry, Vec::new())
}
