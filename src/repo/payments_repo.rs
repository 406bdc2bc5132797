use crate::domain::payment::PaymentRecord;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-process store of completed payments. The lock-guarded map makes
/// appends atomic under concurrent orchestrations; a lookup either sees a
/// whole record or nothing.
#[derive(Default, Clone)]
pub struct PaymentsRepo {
    payments: Arc<RwLock<HashMap<Uuid, PaymentRecord>>>,
}

impl PaymentsRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add(&self, record: PaymentRecord) {
        self.payments.write().await.insert(record.id, record);
    }

    pub async fn get(&self, id: Uuid) -> Option<PaymentRecord> {
        self.payments.read().await.get(&id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.payments.read().await.len()
    }
}
