//! Adapter translating the `IdentityGate` port onto the Identity Registry
//! service.

use crate::ports::IdentityGate;
use async_trait::async_trait;
use lc_01_identity_registry::IdentityService;
use shared_types::Address;
use std::sync::Arc;

/// Production adapter over the in-process Identity Registry.
#[derive(Clone)]
pub struct IdentityGateway {
    identity: Arc<IdentityService>,
}

impl IdentityGateway {
    pub fn new(identity: Arc<IdentityService>) -> Self {
        Self { identity }
    }
}

#[async_trait]
impl IdentityGate for IdentityGateway {
    async fn is_verified_user(&self, address: Address) -> bool {
        self.identity.is_verified(address).await
    }
}
