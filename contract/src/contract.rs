//! The helloworld contract.

use helloworld_primitives::Record;

use crate::context::Context;
use crate::error::ContractError;
use crate::service::RecordService;

/// Name under which the contract is registered with the dispatcher.
pub const CONTRACT_NAME: &str = "HelloworldContract";

/// Entity name used in messages and logs.
pub const ENTITY: &str = "helloworld";

/// Keyed `helloworld` records, one string value each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelloworldContract {
    records: RecordService,
}

impl Default for HelloworldContract {
    fn default() -> Self {
        Self::new()
    }
}

impl HelloworldContract {
    pub const fn new() -> Self {
        Self {
            records: RecordService::new(ENTITY),
        }
    }

    pub fn helloworld_exists(&self, ctx: &Context<'_>, helloworld_id: &str) -> Result<bool, ContractError> {
        self.records.exists(ctx, helloworld_id)
    }

    pub fn create_helloworld(
        &self,
        ctx: &mut Context<'_>,
        helloworld_id: &str,
        value: &str,
    ) -> Result<(), ContractError> {
        self.records.create(ctx, helloworld_id, value)
    }

    pub fn read_helloworld(&self, ctx: &Context<'_>, helloworld_id: &str) -> Result<Record, ContractError> {
        self.records.read(ctx, helloworld_id)
    }

    pub fn update_helloworld(
        &self,
        ctx: &mut Context<'_>,
        helloworld_id: &str,
        new_value: &str,
    ) -> Result<(), ContractError> {
        self.records.update(ctx, helloworld_id, new_value)
    }

    pub fn delete_helloworld(&self, ctx: &mut Context<'_>, helloworld_id: &str) -> Result<(), ContractError> {
        self.records.delete(ctx, helloworld_id)
    }
}
