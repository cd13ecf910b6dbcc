use crate::models::{DailyTip, date_key};
use crate::quotes::{FALLBACK_TIPS, QuoteClient, TIP_CATEGORY};
use crate::storage::Store;
use chrono::NaiveDate;
use tracing::error;

/// Resolves the self-care tip for `today`.
///
/// A cached tip from today is returned as-is with no network traffic. A stale
/// or missing cache triggers one fetch attempt; the result, fallback included,
/// is written back under today's date so later visits the same day are cache
/// hits rather than retries.
pub async fn resolve_tip(store: &Store, quotes: &QuoteClient, today: NaiveDate) -> DailyTip {
    let today_key = date_key(today);

    if let Some(cached) = store.load_tip().await {
        if cached.date == today_key {
            return cached;
        }
    }

    let quote = quotes.fetch_or_fallback(TIP_CATEGORY, FALLBACK_TIPS).await;
    let tip = DailyTip {
        text: quote.text,
        date: today_key,
    };
    if let Err(err) = store.save_tip(&tip).await {
        error!("failed to cache daily tip: {err}");
    }
    tip
}
