use crate::models::JourneyRecord;
use crate::quotes::QuoteClient;
use crate::storage::Store;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub journey: Arc<Mutex<JourneyRecord>>,
    pub quotes: QuoteClient,
}

impl AppState {
    pub fn new(store: Store, journey: JourneyRecord, quotes: QuoteClient) -> Self {
        Self {
            store,
            journey: Arc::new(Mutex::new(journey)),
            quotes,
        }
    }
}
