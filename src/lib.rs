pub mod bank;
pub mod config;
pub mod domain {
    pub mod payment;
}
pub mod error;
pub mod http {
    pub mod handlers {
        pub mod payments;
    }
}
pub mod repo {
    pub mod payments_repo;
}
pub mod service {
    pub mod payment_service;
}
pub mod validation;

use tokio_util::sync::CancellationToken;

#[derive(Clone)]
pub struct AppState {
    pub payment_service: service::payment_service::PaymentService,
    pub shutdown: CancellationToken,
}
