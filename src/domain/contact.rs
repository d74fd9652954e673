//! Contact - invited guest

use crate::table::{FieldValue, SortColumn, TableRow};
use serde::{Deserialize, Serialize};

/// How the guest was reached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactMethod {
    #[default]
    #[serde(rename = "null")]
    NotContacted,
    Phone,
    Email,
}

impl ContactMethod {
    pub fn label(self) -> &'static str {
        match self {
            ContactMethod::NotContacted => "Not contacted",
            ContactMethod::Phone => "By phone",
            ContactMethod::Email => "By email",
        }
    }
}

/// Whether the guest is coming
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Attendance {
    #[default]
    #[serde(rename = "null")]
    Pending,
    #[serde(rename = "si")]
    Confirmed,
    #[serde(rename = "no")]
    Cancelled,
}

impl Attendance {
    pub fn label(self) -> &'static str {
        match self {
            Attendance::Pending => "Pending",
            Attendance::Confirmed => "Confirmed",
            Attendance::Cancelled => "Cancelled",
        }
    }
}

/// A contact row
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub contacted: ContactMethod,
    #[serde(default, rename = "asiste", alias = "attending")]
    pub attending: Attendance,
}

impl Contact {
    pub fn new(id: impl Into<String>, name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            last_name: last_name.into(),
            ..Self::default()
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_status(mut self, contacted: ContactMethod, attending: Attendance) -> Self {
        self.contacted = contacted;
        self.attending = attending;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactColumn {
    Id,
    Name,
    LastName,
    Email,
    Phone,
    Contacted,
    Attending,
}

impl SortColumn for ContactColumn {
    fn from_id(id: &str) -> Option<Self> {
        match id {
            "id" => Some(Self::Id),
            "name" => Some(Self::Name),
            "lastName" => Some(Self::LastName),
            "email" => Some(Self::Email),
            "phone" => Some(Self::Phone),
            "contacted" => Some(Self::Contacted),
            "attending" | "asiste" => Some(Self::Attending),
            _ => None,
        }
    }

    fn id(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Contacted => "contacted",
            Self::Attending => "attending",
        }
    }

    fn all() -> &'static [Self] {
        &[
            Self::Id,
            Self::Name,
            Self::LastName,
            Self::Email,
            Self::Phone,
            Self::Contacted,
            Self::Attending,
        ]
    }
}

impl TableRow for Contact {
    type Column = ContactColumn;

    fn id(&self) -> &str {
        &self.id
    }

    fn fields(&self) -> Vec<FieldValue> {
        vec![
            FieldValue::from(&self.id),
            FieldValue::from(&self.name),
            FieldValue::from(&self.last_name),
            FieldValue::from(self.email.as_ref()),
            FieldValue::from(self.phone.as_ref()),
            FieldValue::from(self.contacted.label()),
            FieldValue::from(self.attending.label()),
        ]
    }

    fn sort_key(&self, column: ContactColumn) -> FieldValue {
        match column {
            ContactColumn::Id => FieldValue::from(&self.id),
            ContactColumn::Name => FieldValue::from(&self.name),
            ContactColumn::LastName => FieldValue::from(&self.last_name),
            ContactColumn::Email => FieldValue::from(self.email.as_ref()),
            ContactColumn::Phone => FieldValue::from(self.phone.as_ref()),
            ContactColumn::Contacted => FieldValue::from(self.contacted.label()),
            ContactColumn::Attending => FieldValue::from(self.attending.label()),
        }
    }
}
