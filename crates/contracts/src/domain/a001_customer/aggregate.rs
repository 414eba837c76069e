use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::draft::{non_blank, required};
use crate::domain::common::{uuid_aggregate_id, DraftError};

// ============================================================================
// ID Type
// ============================================================================

uuid_aggregate_id!(
    /// Unique customer identifier
    CustomerId
);

// ============================================================================
// Discriminant
// ============================================================================

/// Selects which name-bearing fields a customer carries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomerType {
    #[default]
    Private,
    Company,
}

impl CustomerType {
    pub fn code(&self) -> &'static str {
        match self {
            CustomerType::Private => "private",
            CustomerType::Company => "company",
        }
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            CustomerType::Private => "customer.type.private",
            CustomerType::Company => "customer.type.company",
        }
    }

    pub fn all() -> [CustomerType; 2] {
        [CustomerType::Private, CustomerType::Company]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "private" => Some(CustomerType::Private),
            "company" => Some(CustomerType::Company),
            _ => None,
        }
    }
}

// ============================================================================
// Read model
// ============================================================================

/// Customer as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub customer_type: CustomerType,
    pub name: String,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub contact_person: Option<String>,
    #[serde(flatten)]
    pub details: CustomerDetails,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Customer {
    /// Name shown in lists: the company name for companies, the person otherwise
    pub fn display_name(&self) -> &str {
        match (self.customer_type, self.company_name.as_deref()) {
            (CustomerType::Company, Some(company)) if !company.is_empty() => company,
            _ => &self.name,
        }
    }
}

/// Optional contact, address and ownership fields common to both customer kinds
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Query of the customer list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl CustomerFilter {
    pub fn search(text: &str) -> Self {
        Self {
            search: non_blank(text),
        }
    }
}

// ============================================================================
// Create payload
// ============================================================================

/// Creation payload. The `customer_type` tag picks the concrete shape, so a
/// private customer can never carry a contact person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "customer_type", rename_all = "snake_case")]
pub enum NewCustomer {
    Private(PrivateCustomer),
    Company(CompanyCustomer),
}

impl NewCustomer {
    pub fn customer_type(&self) -> CustomerType {
        match self {
            NewCustomer::Private(_) => CustomerType::Private,
            NewCustomer::Company(_) => CustomerType::Company,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            NewCustomer::Private(p) => &p.name,
            NewCustomer::Company(c) => &c.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrivateCustomer {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(flatten)]
    pub details: CustomerDetails,
}

/// Company customer; `name` always mirrors `company_name`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyCustomer {
    pub name: String,
    pub company_name: String,
    pub contact_person: String,
    #[serde(flatten)]
    pub details: CustomerDetails,
}

// ============================================================================
// Form draft
// ============================================================================

/// Editable customer fields, keyed for single-field updates from inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CustomerField {
    Name,
    CompanyName,
    ContactPerson,
    BusinessId,
    Email,
    Phone,
    StreetAddress,
    PostalCode,
    City,
    OwnerName,
    Notes,
}

/// Raw form state of the customer creation page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerDraft {
    pub customer_type: CustomerType,
    pub name: String,
    pub company_name: String,
    pub contact_person: String,
    pub business_id: String,
    pub email: String,
    pub phone: String,
    pub street_address: String,
    pub postal_code: String,
    pub city: String,
    pub owner_name: String,
    pub notes: String,
}

impl CustomerDraft {
    pub fn field(&self, field: CustomerField) -> &str {
        match field {
            CustomerField::Name => &self.name,
            CustomerField::CompanyName => &self.company_name,
            CustomerField::ContactPerson => &self.contact_person,
            CustomerField::BusinessId => &self.business_id,
            CustomerField::Email => &self.email,
            CustomerField::Phone => &self.phone,
            CustomerField::StreetAddress => &self.street_address,
            CustomerField::PostalCode => &self.postal_code,
            CustomerField::City => &self.city,
            CustomerField::OwnerName => &self.owner_name,
            CustomerField::Notes => &self.notes,
        }
    }

    /// Replace exactly one field; nothing else in the draft changes
    pub fn set_field(&mut self, field: CustomerField, value: String) {
        let slot = match field {
            CustomerField::Name => &mut self.name,
            CustomerField::CompanyName => &mut self.company_name,
            CustomerField::ContactPerson => &mut self.contact_person,
            CustomerField::BusinessId => &mut self.business_id,
            CustomerField::Email => &mut self.email,
            CustomerField::Phone => &mut self.phone,
            CustomerField::StreetAddress => &mut self.street_address,
            CustomerField::PostalCode => &mut self.postal_code,
            CustomerField::City => &mut self.city,
            CustomerField::OwnerName => &mut self.owner_name,
            CustomerField::Notes => &mut self.notes,
        };
        *slot = value;
    }

    /// Build the creation payload for the selected customer type.
    ///
    /// Private customers drop `contact_person` and `business_id` and keep
    /// `company_name` only when it was filled in. Company customers send `company_name` as their
    /// `name`. Blank optional fields are omitted.
    pub fn to_payload(&self) -> Result<NewCustomer, DraftError> {
        let details = CustomerDetails {
            business_id: non_blank(&self.business_id),
            email: non_blank(&self.email),
            phone: non_blank(&self.phone),
            street_address: non_blank(&self.street_address),
            postal_code: non_blank(&self.postal_code),
            city: non_blank(&self.city),
            owner_name: non_blank(&self.owner_name),
            notes: non_blank(&self.notes),
        };

        match self.customer_type {
            CustomerType::Private => Ok(NewCustomer::Private(PrivateCustomer {
                name: required("name", &self.name)?,
                company_name: non_blank(&self.company_name),
                details: CustomerDetails {
                    business_id: None,
                    ..details
                },
            })),
            CustomerType::Company => {
                let company_name = required("company_name", &self.company_name)?;
                let contact_person = required("contact_person", &self.contact_person)?;
                Ok(NewCustomer::Company(CompanyCustomer {
                    name: company_name.clone(),
                    company_name,
                    contact_person,
                    details,
                }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn private_draft() -> CustomerDraft {
        CustomerDraft {
            customer_type: CustomerType::Private,
            name: "Matti Meikäläinen".to_string(),
            phone: "040 123 4567".to_string(),
            ..Default::default()
        }
    }

    fn company_draft() -> CustomerDraft {
        CustomerDraft {
            customer_type: CustomerType::Company,
            name: "ignored".to_string(),
            company_name: "Rakennus Oy".to_string(),
            contact_person: "Liisa Virtanen".to_string(),
            business_id: "1234567-8".to_string(),
            ..Default::default()
        }
    }

    fn assert_no_blank_values(value: &Value) {
        match value {
            Value::Object(map) => {
                for (key, v) in map {
                    assert!(!v.is_null(), "key `{key}` is null");
                    if let Value::String(s) = v {
                        assert!(!s.is_empty(), "key `{key}` is an empty string");
                    }
                    assert_no_blank_values(v);
                }
            }
            Value::Array(items) => items.iter().for_each(assert_no_blank_values),
            _ => {}
        }
    }

    #[test]
    fn test_private_payload_never_has_contact_person() {
        let mut draft = private_draft();
        draft.contact_person = "Someone".to_string();
        draft.company_name = "  ".to_string();

        let json = serde_json::to_value(draft.to_payload().unwrap()).unwrap();

        assert_eq!(json["customer_type"], "private");
        assert!(json.get("contact_person").is_none());
        assert!(json.get("company_name").is_none());
        assert_eq!(json["name"], "Matti Meikäläinen");
    }

    #[test]
    fn test_private_payload_keeps_filled_company_name() {
        let mut draft = private_draft();
        draft.company_name = "Toiminimi Meikäläinen".to_string();

        let json = serde_json::to_value(draft.to_payload().unwrap()).unwrap();

        assert_eq!(json["company_name"], "Toiminimi Meikäläinen");
        assert!(json.get("contact_person").is_none());
    }

    #[test]
    fn test_switching_to_private_drops_business_id() {
        let mut draft = company_draft();
        draft.name = "Matti".to_string();
        draft.customer_type = CustomerType::Private;

        let json = serde_json::to_value(draft.to_payload().unwrap()).unwrap();

        assert_eq!(json["customer_type"], "private");
        assert!(json.get("business_id").is_none());
        assert!(json.get("contact_person").is_none());
    }

    #[test]
    fn test_company_payload_name_mirrors_company_name() {
        let payload = company_draft().to_payload().unwrap();
        assert_eq!(payload.customer_type(), CustomerType::Company);
        assert_eq!(payload.name(), "Rakennus Oy");

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["name"], json["company_name"]);
        assert_eq!(json["contact_person"], "Liisa Virtanen");
        assert_eq!(json["business_id"], "1234567-8");
    }

    #[test]
    fn test_payloads_have_no_blank_values() {
        let mut sparse = private_draft();
        sparse.email = String::new();
        sparse.city = "   ".to_string();
        sparse.notes = String::new();

        for draft in [sparse, company_draft()] {
            let json = serde_json::to_value(draft.to_payload().unwrap()).unwrap();
            assert_no_blank_values(&json);
            assert!(json.get("email").is_none());
            assert!(json.get("city").is_none());
        }
    }

    #[test]
    fn test_missing_required_fields() {
        let mut draft = private_draft();
        draft.name = String::new();
        assert_eq!(draft.to_payload(), Err(DraftError::MissingField("name")));

        let mut draft = company_draft();
        draft.contact_person = " ".to_string();
        assert_eq!(
            draft.to_payload(),
            Err(DraftError::MissingField("contact_person"))
        );

        let mut draft = company_draft();
        draft.company_name = String::new();
        assert_eq!(
            draft.to_payload(),
            Err(DraftError::MissingField("company_name"))
        );
    }

    #[test]
    fn test_set_field_updates_single_field() {
        let mut draft = private_draft();
        let before = draft.clone();
        draft.set_field(CustomerField::City, "Tampere".to_string());

        assert_eq!(draft.field(CustomerField::City), "Tampere");
        assert_eq!(
            CustomerDraft {
                city: before.city.clone(),
                ..draft.clone()
            },
            before
        );
    }

    #[test]
    fn test_blank_search_is_omitted() {
        assert_eq!(CustomerFilter::search("  "), CustomerFilter::default());
        assert_eq!(
            CustomerFilter::search(" oy ").search.as_deref(),
            Some("oy")
        );
    }

    #[test]
    fn test_read_model_display_name() {
        let json = serde_json::json!({
            "id": "7f1c1a5e-4a9f-4f5e-9a0b-2c3d4e5f6a7b",
            "customer_type": "company",
            "name": "Rakennus Oy",
            "company_name": "Rakennus Oy",
            "contact_person": "Liisa Virtanen",
            "city": "Turku"
        });
        let customer: Customer = serde_json::from_value(json).unwrap();
        assert_eq!(customer.display_name(), "Rakennus Oy");
        assert_eq!(customer.details.city.as_deref(), Some("Turku"));
        assert!(customer.created_at.is_none());
    }
}
