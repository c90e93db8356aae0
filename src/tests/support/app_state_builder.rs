use crate::address::application::orchestrator::address_export::AddressExportOrchestrator;
use crate::address::application::ports::incoming::use_cases::{
    CreateAddressUseCase, DeleteAddressUseCase, ListAddressesUseCase, UpdateAddressUseCase,
};
use crate::address::application::AddressUseCases;
use crate::auth::application::use_cases::{
    login_user::ILoginUserUseCase, register_user::IRegisterUserUseCase,
};
use crate::email::adapter::outgoing::mock_sender::RecordingEmailSender;
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

pub struct TestAppStateBuilder {
    register_user: Arc<dyn IRegisterUserUseCase + Send + Sync>,
    login_user: Arc<dyn ILoginUserUseCase + Send + Sync>,
    address: AddressUseCases,
}

pub fn default_test_export_orchestrator() -> Arc<AddressExportOrchestrator> {
    Arc::new(AddressExportOrchestrator::new(
        Arc::new(StubExportAddressesUseCase),
        Arc::new(RecordingEmailSender::default()),
    ))
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            register_user: Arc::new(StubRegisterUserUseCase),
            login_user: Arc::new(StubLoginUserUseCase),
            address: AddressUseCases {
                create: Arc::new(StubCreateAddressUseCase),
                list: Arc::new(StubListAddressesUseCase),
                update: Arc::new(StubUpdateAddressUseCase),
                delete: Arc::new(StubDeleteAddressUseCase),
                export: default_test_export_orchestrator(),
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_register_user(
        mut self,
        uc: impl IRegisterUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.register_user = Arc::new(uc);
        self
    }

    pub fn with_login_user(mut self, uc: impl ILoginUserUseCase + Send + Sync + 'static) -> Self {
        self.login_user = Arc::new(uc);
        self
    }

    // Address use cases are passed as Arcs so tests can keep a handle on
    // their mock and inspect what it received.
    pub fn with_create_address(mut self, uc: Arc<dyn CreateAddressUseCase + Send + Sync>) -> Self {
        self.address.create = uc;
        self
    }

    pub fn with_list_addresses(mut self, uc: Arc<dyn ListAddressesUseCase + Send + Sync>) -> Self {
        self.address.list = uc;
        self
    }

    pub fn with_update_address(mut self, uc: Arc<dyn UpdateAddressUseCase + Send + Sync>) -> Self {
        self.address.update = uc;
        self
    }

    pub fn with_delete_address(mut self, uc: Arc<dyn DeleteAddressUseCase + Send + Sync>) -> Self {
        self.address.delete = uc;
        self
    }

    pub fn with_export(mut self, orchestrator: AddressExportOrchestrator) -> Self {
        self.address.export = Arc::new(orchestrator);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            register_user_use_case: self.register_user,
            login_user_use_case: self.login_user,
            address: self.address,
        })
    }
}
