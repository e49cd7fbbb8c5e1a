use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::models::entries::{CategoryEntry, EducationEntry, ExperienceEntry};

/// Storage key of the committed document.
pub const DOCUMENT_KEY: &str = "cvFormData";

/// The full résumé. The five top-level keys never change; only list contents do.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub basic_info: BasicInfo,
    pub contact_info: ContactInfo,
    pub education_info: Vec<EducationEntry>,
    pub experience_info: Vec<ExperienceEntry>,
    pub skills_info: Vec<CategoryEntry>,
    pub other_info: Vec<CategoryEntry>,
}

impl Document {
    pub fn list_len(&self, list: ListName) -> usize {
        match list {
            ListName::EducationInfo => self.education_info.len(),
            ListName::ExperienceInfo => self.experience_info.len(),
            ListName::SkillsInfo => self.skills_info.len(),
            ListName::OtherInfo => self.other_info.len(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BasicInfo {
    pub first_name: String,
    pub last_name: String,
    pub age: String,
    pub occupation: String,
    pub self_summary: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactInfo {
    pub email: String,
    pub phone_number: String,
    pub location: String,
    pub website: String,
}

/// Minimal leaf used inside entries: a bullet, a skill, a language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubItem {
    pub id: String,
    pub content: String,
}

impl SubItem {
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BasicField {
    FirstName,
    LastName,
    Age,
    Occupation,
    SelfSummary,
}

impl BasicField {
    pub const ALL: &'static [BasicField] = &[
        BasicField::FirstName,
        BasicField::LastName,
        BasicField::Age,
        BasicField::Occupation,
        BasicField::SelfSummary,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BasicField::FirstName => "firstName",
            BasicField::LastName => "lastName",
            BasicField::Age => "age",
            BasicField::Occupation => "occupation",
            BasicField::SelfSummary => "selfSummary",
        }
    }
}

impl BasicInfo {
    pub fn set(&mut self, field: BasicField, value: String) {
        let slot = match field {
            BasicField::FirstName => &mut self.first_name,
            BasicField::LastName => &mut self.last_name,
            BasicField::Age => &mut self.age,
            BasicField::Occupation => &mut self.occupation,
            BasicField::SelfSummary => &mut self.self_summary,
        };
        *slot = value;
    }
}

impl FromStr for BasicField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BasicField::ALL
            .iter()
            .copied()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownField(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContactField {
    Email,
    PhoneNumber,
    Location,
    Website,
}

impl ContactField {
    pub const ALL: &'static [ContactField] = &[
        ContactField::Email,
        ContactField::PhoneNumber,
        ContactField::Location,
        ContactField::Website,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ContactField::Email => "email",
            ContactField::PhoneNumber => "phoneNumber",
            ContactField::Location => "location",
            ContactField::Website => "website",
        }
    }
}

impl ContactInfo {
    pub fn set(&mut self, field: ContactField, value: String) {
        let slot = match field {
            ContactField::Email => &mut self.email,
            ContactField::PhoneNumber => &mut self.phone_number,
            ContactField::Location => &mut self.location,
            ContactField::Website => &mut self.website,
        };
        *slot = value;
    }
}

impl FromStr for ContactField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContactField::ALL
            .iter()
            .copied()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownField(s.to_string()))
    }
}

/// The four list-valued sections of the document, named by their persisted keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ListName {
    EducationInfo,
    ExperienceInfo,
    SkillsInfo,
    OtherInfo,
}

impl ListName {
    pub const ALL: &'static [ListName] = &[
        ListName::EducationInfo,
        ListName::ExperienceInfo,
        ListName::SkillsInfo,
        ListName::OtherInfo,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ListName::EducationInfo => "educationInfo",
            ListName::ExperienceInfo => "experienceInfo",
            ListName::SkillsInfo => "skillsInfo",
            ListName::OtherInfo => "otherInfo",
        }
    }

    /// Storage key of this section's pending draft, e.g. `cveducationInfo`.
    pub fn draft_key(self) -> String {
        format!("cv{}", self.as_str())
    }
}

impl fmt::Display for ListName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListName {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ListName::ALL
            .iter()
            .copied()
            .find(|l| l.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownList(s.to_string()))
    }
}
