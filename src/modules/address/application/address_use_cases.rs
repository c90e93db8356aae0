use std::sync::Arc;

use crate::address::application::orchestrator::address_export::AddressExportOrchestrator;
use crate::address::application::ports::incoming::use_cases::{
    CreateAddressUseCase, DeleteAddressUseCase, ListAddressesUseCase, UpdateAddressUseCase,
};

#[derive(Clone)]
pub struct AddressUseCases {
    pub create: Arc<dyn CreateAddressUseCase + Send + Sync>,
    pub list: Arc<dyn ListAddressesUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateAddressUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteAddressUseCase + Send + Sync>,
    pub export: Arc<AddressExportOrchestrator>,
}
