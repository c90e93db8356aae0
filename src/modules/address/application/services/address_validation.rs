use crate::address::application::domain::entities::AddressFields;
use crate::address::application::ports::outgoing::address_repository::{AddressPatch, PatchField};
use crate::shared::validation::{is_valid_email, is_valid_phone, FieldErrors};

const BLANK: &str = "must not be blank";
const INVALID_EMAIL: &str = "must be a valid email address";
const INVALID_PHONE: &str = "must contain only digits and be at least 10 digits long";

fn check_required(errors: &mut FieldErrors, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.add(field, BLANK);
    }
}

fn check_email(errors: &mut FieldErrors, value: &str) {
    if !value.is_empty() && !is_valid_email(value) {
        errors.add("email", INVALID_EMAIL);
    }
}

fn check_phone(errors: &mut FieldErrors, value: &str) {
    if !value.is_empty() && !is_valid_phone(value) {
        errors.add("phone", INVALID_PHONE);
    }
}

/// Rules for a new record: names and first address line present, email
/// present and well formed, phone empty or digits only.
pub fn validate_new_address(fields: &AddressFields) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();

    check_required(&mut errors, "first_name", &fields.first_name);
    check_required(&mut errors, "address_line1", &fields.address_line1);
    check_required(&mut errors, "email", &fields.email);
    check_email(&mut errors, &fields.email);
    check_phone(&mut errors, &fields.phone);

    errors.into_result()
}

/// Only fields carrying a value are checked.
pub fn validate_patch(patch: &AddressPatch) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();

    if let PatchField::Value(first_name) = &patch.first_name {
        check_required(&mut errors, "first_name", first_name);
    }
    if let PatchField::Value(address_line1) = &patch.address_line1 {
        check_required(&mut errors, "address_line1", address_line1);
    }
    if let PatchField::Value(email) = &patch.email {
        check_email(&mut errors, email);
    }
    if let PatchField::Value(phone) = &patch.phone {
        check_phone(&mut errors, phone);
    }

    errors.into_result()
}
