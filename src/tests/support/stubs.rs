use async_trait::async_trait;
use uuid::Uuid;

use crate::address::application::domain::entities::{Address, AddressFields};
use crate::address::application::domain::export_field::ExportFields;
use crate::address::application::ports::incoming::use_cases::{
    CreateAddressError, CreateAddressUseCase, DeleteAddressError, DeleteAddressUseCase,
    ExportAddressesError, ExportAddressesUseCase, ListAddressesError, ListAddressesUseCase,
    UpdateAddressError, UpdateAddressUseCase,
};
use crate::address::application::ports::outgoing::address_query::{
    AddressListFilter, PageRequest, PageResult,
};
use crate::address::application::ports::outgoing::address_repository::AddressPatch;
use crate::auth::application::domain::entities::UserId;
use crate::auth::application::use_cases::login_user::{
    ILoginUserUseCase, LoginError, LoginUserInput, LoginUserOutput,
};
use crate::auth::application::use_cases::register_user::{
    IRegisterUserUseCase, RegisterUserError, RegisterUserInput, RegisterUserOutput,
};

#[derive(Default, Clone)]
pub struct StubRegisterUserUseCase;

#[async_trait]
impl IRegisterUserUseCase for StubRegisterUserUseCase {
    async fn execute(
        &self,
        _input: RegisterUserInput,
    ) -> Result<RegisterUserOutput, RegisterUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubLoginUserUseCase;

#[async_trait]
impl ILoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _input: LoginUserInput) -> Result<LoginUserOutput, LoginError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubCreateAddressUseCase;

#[async_trait]
impl CreateAddressUseCase for StubCreateAddressUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _fields: AddressFields,
    ) -> Result<Address, CreateAddressError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListAddressesUseCase;

#[async_trait]
impl ListAddressesUseCase for StubListAddressesUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _filter: AddressListFilter,
        page: PageRequest,
    ) -> Result<PageResult<Address>, ListAddressesError> {
        Ok(PageResult {
            items: vec![],
            page: page.page,
            limit: page.limit,
            total: 0,
        })
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateAddressUseCase;

#[async_trait]
impl UpdateAddressUseCase for StubUpdateAddressUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _address_id: Uuid,
        _patch: AddressPatch,
    ) -> Result<Address, UpdateAddressError> {
        Err(UpdateAddressError::NotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteAddressUseCase;

#[async_trait]
impl DeleteAddressUseCase for StubDeleteAddressUseCase {
    async fn execute(&self, _owner: UserId, _address_id: Uuid) -> Result<(), DeleteAddressError> {
        Err(DeleteAddressError::NotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubExportAddressesUseCase;

#[async_trait]
impl ExportAddressesUseCase for StubExportAddressesUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _fields: &ExportFields,
    ) -> Result<Vec<u8>, ExportAddressesError> {
        Ok(Vec::new())
    }
}
