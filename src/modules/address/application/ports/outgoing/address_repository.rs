use async_trait::async_trait;
use serde::Deserialize;
use uuid::Uuid;

use crate::address::application::domain::entities::{Address, AddressFields};
use crate::auth::application::domain::entities::UserId;

//
// ──────────────────────────────────────────────────────────
// PatchField (explicit PATCH semantics)
// ──────────────────────────────────────────────────────────
// - Unset: field not provided => keep stored value
// - Null: explicit JSON null => keep stored value (columns are not nullable)
// - Value(v): replace with v, including the empty string
//
// Use with #[serde(default)] so omitted fields deserialize as Unset.
//

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PatchField<T> {
    #[default]
    #[serde(skip)]
    Unset,
    Null,
    Value(T),
}

impl<T> PatchField<T> {
    pub fn as_value(&self) -> Option<&T> {
        if let PatchField::Value(v) = self {
            Some(v)
        } else {
            None
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            PatchField::Value(v) => Some(v),
            PatchField::Unset | PatchField::Null => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> PatchField<U> {
        match self {
            PatchField::Unset => PatchField::Unset,
            PatchField::Null => PatchField::Null,
            PatchField::Value(v) => PatchField::Value(f(v)),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressPatch {
    pub first_name: PatchField<String>,
    pub last_name: PatchField<String>,
    pub email: PatchField<String>,
    pub phone: PatchField<String>,
    pub address_line1: PatchField<String>,
    pub address_line2: PatchField<String>,
    pub city: PatchField<String>,
    pub state: PatchField<String>,
    pub country: PatchField<String>,
    pub pincode: PatchField<String>,
}

impl AddressPatch {
    /// True when no field carries a replacement value.
    pub fn is_noop(&self) -> bool {
        [
            &self.first_name,
            &self.last_name,
            &self.email,
            &self.phone,
            &self.address_line1,
            &self.address_line2,
            &self.city,
            &self.state,
            &self.country,
            &self.pincode,
        ]
        .iter()
        .all(|field| field.as_value().is_none())
    }

    /// Surrounding whitespace is dropped from every carried value.
    pub fn trimmed(self) -> Self {
        let trim = |f: PatchField<String>| f.map(|v| v.trim().to_string());
        Self {
            first_name: trim(self.first_name),
            last_name: trim(self.last_name),
            email: trim(self.email),
            phone: trim(self.phone),
            address_line1: trim(self.address_line1),
            address_line2: trim(self.address_line2),
            city: trim(self.city),
            state: trim(self.state),
            country: trim(self.country),
            pincode: trim(self.pincode),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum AddressRepositoryError {
    #[error("Address not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (write side). Every operation is scoped to the owner; a record that
// is foreign, missing or soft-deleted is NotFound.
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait AddressRepository: Send + Sync {
    async fn create_address(
        &self,
        owner: UserId,
        fields: AddressFields,
    ) -> Result<Address, AddressRepositoryError>;

    async fn patch_address(
        &self,
        owner: UserId,
        address_id: Uuid,
        patch: AddressPatch,
    ) -> Result<Address, AddressRepositoryError>;

    async fn soft_delete_address(
        &self,
        owner: UserId,
        address_id: Uuid,
    ) -> Result<(), AddressRepositoryError>;
}
