use serde::Serialize;

/// Sample contact record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
    pub id: u32,
    pub name: String,
    pub age: u32,
    pub city: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub email: String,
    pub active: bool,
}

impl Contact {
    pub fn new(id: u32, name: &str, age: u32, city: &str, email: &str, active: bool) -> Self {
        Self {
            id,
            name: name.to_string(),
            age,
            city: city.to_string(),
            phone: None,
            email: email.to_string(),
            active,
        }
    }

    pub fn with_phone(mut self, phone: &str) -> Self {
        self.phone = Some(phone.to_string());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub postcode: String,
    pub country: String,
}

/// Contact with a nested postal address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressedContact {
    pub id: u32,
    pub name: String,
    pub age: u32,
    pub email: String,
    pub active: bool,
    pub address: Address,
}

/// The five contacts used by the list demonstrations.
pub fn sample_contacts() -> Vec<Contact> {
    vec![
        Contact::new(1, "James Smith", 32, "Manchester", "james.smith@example.co.uk", true)
            .with_phone("07700 900123"),
        Contact::new(2, "Emily Johnson", 28, "Birmingham", "emily.j@example.co.uk", true),
        Contact::new(3, "Robert Brown", 45, "Glasgow", "robert.brown@example.co.uk", false)
            .with_phone("07700 900456"),
        Contact::new(4, "Sarah Wilson", 36, "Liverpool", "sarah.w@example.co.uk", true)
            .with_phone("07700 900789"),
        Contact::new(5, "David Taylor", 41, "Edinburgh", "david.t@example.co.uk", false),
    ]
}

/// Compact JSON for console lines.
pub fn to_json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string(value)?)
}
