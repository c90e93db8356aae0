use crate::address::application::domain::entities::Address;
use crate::address::application::domain::export_field::{ExportField, ExportFields};

fn field_value(address: &Address, field: ExportField) -> String {
    match field {
        ExportField::Id => address.id.to_string(),
        ExportField::UserId => address.user_id.to_string(),
        ExportField::FirstName => address.first_name.clone(),
        ExportField::LastName => address.last_name.clone(),
        ExportField::Email => address.email.clone(),
        ExportField::Phone => address.phone.clone(),
        ExportField::AddressLine1 => address.address_line1.clone(),
        ExportField::AddressLine2 => address.address_line2.clone(),
        ExportField::City => address.city.clone(),
        ExportField::State => address.state.clone(),
        ExportField::Country => address.country.clone(),
        ExportField::Pincode => address.pincode.clone(),
    }
}

/// One header row of labels, then one row per record, columns in the order
/// of `fields`.
pub fn encode_addresses(fields: &ExportFields, addresses: &[Address]) -> Result<Vec<u8>, csv::Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record(fields.as_slice().iter().map(|f| f.header()))?;

    for address in addresses {
        writer.write_record(
            fields
                .as_slice()
                .iter()
                .map(|f| field_value(address, *f)),
        )?;
    }

    writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))
}
