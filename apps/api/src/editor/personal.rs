use serde::Deserialize;

use crate::models::resume::ResumeData;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum PersonalField {
    FirstName(String),
    LastName(String),
    Email(String),
    Phone(String),
    Address(String),
    City(String),
    State(String),
    ZipCode(String),
    Linkedin(String),
    Website(String),
}

pub fn update_personal(data: &ResumeData, field: PersonalField) -> ResumeData {
    let mut info = data.personal_info.clone();
    match field {
        PersonalField::FirstName(v) => info.first_name = v,
        PersonalField::LastName(v) => info.last_name = v,
        PersonalField::Email(v) => info.email = v,
        PersonalField::Phone(v) => info.phone = v,
        PersonalField::Address(v) => info.address = v,
        PersonalField::City(v) => info.city = v,
        PersonalField::State(v) => info.state = v,
        PersonalField::ZipCode(v) => info.zip_code = v,
        PersonalField::Linkedin(v) => info.linkedin = v,
        PersonalField::Website(v) => info.website = v,
    }
    ResumeData {
        personal_info: info,
        ..data.clone()
    }
}
