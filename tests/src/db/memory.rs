use dynform::{Driver, Result};
use dynform_driver_memory::Memory;

use crate::Setup;

pub struct SetupMemory;

#[async_trait::async_trait]
impl Setup for SetupMemory {
    async fn connect(&self) -> Result<Box<dyn Driver>> {
        Ok(Box::new(Memory::new()))
    }
}
