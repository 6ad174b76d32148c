pub mod outbound;

pub use outbound::{ParcelGate, SettlementGate};
