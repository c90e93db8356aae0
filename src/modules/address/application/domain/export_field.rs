use std::fmt;

/// Columns a caller may request in a CSV export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportField {
    Id,
    UserId,
    FirstName,
    LastName,
    Email,
    Phone,
    AddressLine1,
    AddressLine2,
    City,
    State,
    Country,
    Pincode,
}

impl ExportField {
    pub const ALL: [ExportField; 12] = [
        ExportField::Id,
        ExportField::UserId,
        ExportField::FirstName,
        ExportField::LastName,
        ExportField::Email,
        ExportField::Phone,
        ExportField::AddressLine1,
        ExportField::AddressLine2,
        ExportField::City,
        ExportField::State,
        ExportField::Country,
        ExportField::Pincode,
    ];

    /// Matches the wire name exactly; no case folding or trimming.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            ExportField::Id => "id",
            ExportField::UserId => "user_id",
            ExportField::FirstName => "first_name",
            ExportField::LastName => "last_name",
            ExportField::Email => "email",
            ExportField::Phone => "phone",
            ExportField::AddressLine1 => "address_line1",
            ExportField::AddressLine2 => "address_line2",
            ExportField::City => "city",
            ExportField::State => "state",
            ExportField::Country => "country",
            ExportField::Pincode => "pincode",
        }
    }

    /// Column header written to the CSV.
    pub fn header(self) -> &'static str {
        match self {
            ExportField::Id => "ID",
            ExportField::UserId => "User ID",
            ExportField::FirstName => "First Name",
            ExportField::LastName => "Last Name",
            ExportField::Email => "Email",
            ExportField::Phone => "Phone",
            ExportField::AddressLine1 => "Address Line 1",
            ExportField::AddressLine2 => "Address Line 2",
            ExportField::City => "City",
            ExportField::State => "State",
            ExportField::Country => "Country",
            ExportField::Pincode => "Pincode",
        }
    }
}

impl fmt::Display for ExportField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExportFieldError {
    #[error("At least one export field is required")]
    Empty,

    #[error("Invalid export field: {0}")]
    Invalid(String),
}

/// A validated, non-empty column list in caller order. Duplicates are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFields(Vec<ExportField>);

impl ExportFields {
    /// All-or-nothing: the first unknown name rejects the whole list.
    pub fn parse<S: AsRef<str>>(names: &[S]) -> Result<Self, ExportFieldError> {
        if names.is_empty() {
            return Err(ExportFieldError::Empty);
        }

        names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                ExportField::parse(name).ok_or_else(|| ExportFieldError::Invalid(name.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(ExportFields)
    }

    pub fn as_slice(&self) -> &[ExportField] {
        &self.0
    }
}
