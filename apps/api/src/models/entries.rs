//! List entry types and their statically declared field schemas.
//!
//! Each entry type names its scalar fields through a `Field` enum. Drafts are
//! edited field-by-field through that enum, and required-field checks on submit
//! are driven by the same schema.

use std::fmt::Debug;
use std::str::FromStr;

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::models::document::SubItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    /// `YYYY-MM`, kept as text.
    Month,
    Flag,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Text(String),
}

impl FieldValue {
    pub fn is_blank(&self) -> bool {
        matches!(self, FieldValue::Text(s) if s.is_empty())
    }
}

pub trait EntryField: Copy + Eq + Debug + FromStr<Err = ValidationError> + 'static {
    const ALL: &'static [Self];

    fn name(self) -> &'static str;
    fn kind(self) -> FieldKind;
    fn required(self) -> bool;

    fn parse_name(s: &str) -> Result<Self, ValidationError> {
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.name() == s)
            .ok_or_else(|| ValidationError::UnknownField(s.to_string()))
    }
}

/// An item of one of the document's lists.
pub trait ListEntry: Clone + Default + PartialEq + Debug + Serialize + DeserializeOwned + Send {
    type Field: EntryField;

    fn id(&self) -> &str;
    fn set_id(&mut self, id: String);
    fn sub_items(&self) -> &[SubItem];
    fn sub_items_mut(&mut self) -> &mut Vec<SubItem>;
    fn get(&self, field: Self::Field) -> FieldValue;

    /// Writes a scalar field. The value's shape must match the field's kind.
    fn set(&mut self, field: Self::Field, value: FieldValue) -> Result<(), ValidationError>;

    /// First required field left blank, in schema order.
    fn missing_required(&self) -> Option<Self::Field> {
        Self::Field::ALL
            .iter()
            .copied()
            .find(|f| f.required() && self.get(*f).is_blank())
    }

    fn validate(&self) -> Result<(), ValidationError> {
        match self.missing_required() {
            Some(field) => Err(ValidationError::MissingField(field.name())),
            None => Ok(()),
        }
    }
}

fn expect_text(field: impl EntryField, value: FieldValue) -> Result<String, ValidationError> {
    match value {
        FieldValue::Text(s) => Ok(s),
        FieldValue::Flag(_) => Err(ValidationError::WrongKind {
            field: field.name(),
            expected: field.kind(),
        }),
    }
}

fn expect_flag(field: impl EntryField, value: FieldValue) -> Result<bool, ValidationError> {
    match value {
        FieldValue::Flag(b) => Ok(b),
        FieldValue::Text(_) => Err(ValidationError::WrongKind {
            field: field.name(),
            expected: field.kind(),
        }),
    }
}

macro_rules! impl_from_str_via_schema {
    ($($field:ty),+) => {
        $(
            impl FromStr for $field {
                type Err = ValidationError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    <$field as EntryField>::parse_name(s)
                }
            }
        )+
    };
}

impl_from_str_via_schema!(EducationField, ExperienceField, CategoryField);

// ── Education ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EducationEntry {
    pub id: String,
    pub institution: String,
    pub degree_program: String,
    pub starting_year: String,
    pub graduating_year: String,
    pub on_going: bool,
    pub gpa: String,
    pub additional_info: Vec<SubItem>,
}

impl Default for EducationEntry {
    fn default() -> Self {
        Self {
            id: String::new(),
            institution: String::new(),
            degree_program: String::new(),
            starting_year: String::new(),
            graduating_year: String::new(),
            on_going: true,
            gpa: String::new(),
            additional_info: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EducationField {
    Institution,
    DegreeProgram,
    StartingYear,
    GraduatingYear,
    OnGoing,
    Gpa,
}

impl EntryField for EducationField {
    const ALL: &'static [Self] = &[
        EducationField::Institution,
        EducationField::DegreeProgram,
        EducationField::StartingYear,
        EducationField::GraduatingYear,
        EducationField::OnGoing,
        EducationField::Gpa,
    ];

    fn name(self) -> &'static str {
        match self {
            EducationField::Institution => "institution",
            EducationField::DegreeProgram => "degreeProgram",
            EducationField::StartingYear => "startingYear",
            EducationField::GraduatingYear => "graduatingYear",
            EducationField::OnGoing => "onGoing",
            EducationField::Gpa => "gpa",
        }
    }

    fn kind(self) -> FieldKind {
        match self {
            EducationField::StartingYear | EducationField::GraduatingYear => FieldKind::Month,
            EducationField::OnGoing => FieldKind::Flag,
            _ => FieldKind::Text,
        }
    }

    fn required(self) -> bool {
        matches!(
            self,
            EducationField::Institution
                | EducationField::DegreeProgram
                | EducationField::StartingYear
        )
    }
}

impl ListEntry for EducationEntry {
    type Field = EducationField;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn sub_items(&self) -> &[SubItem] {
        &self.additional_info
    }

    fn sub_items_mut(&mut self) -> &mut Vec<SubItem> {
        &mut self.additional_info
    }

    fn get(&self, field: EducationField) -> FieldValue {
        let text = match field {
            EducationField::OnGoing => return FieldValue::Flag(self.on_going),
            EducationField::Institution => &self.institution,
            EducationField::DegreeProgram => &self.degree_program,
            EducationField::StartingYear => &self.starting_year,
            EducationField::GraduatingYear => &self.graduating_year,
            EducationField::Gpa => &self.gpa,
        };
        FieldValue::Text(text.clone())
    }

    fn set(&mut self, field: EducationField, value: FieldValue) -> Result<(), ValidationError> {
        match field {
            EducationField::OnGoing => self.on_going = expect_flag(field, value)?,
            EducationField::Institution => self.institution = expect_text(field, value)?,
            EducationField::DegreeProgram => self.degree_program = expect_text(field, value)?,
            EducationField::StartingYear => self.starting_year = expect_text(field, value)?,
            EducationField::GraduatingYear => self.graduating_year = expect_text(field, value)?,
            EducationField::Gpa => self.gpa = expect_text(field, value)?,
        }
        Ok(())
    }
}

// ── Experience ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub id: String,
    pub company: String,
    pub position: String,
    pub starting_date: String,
    pub ending_date: String,
    pub on_going: bool,
    pub location: String,
    pub additional_info: Vec<SubItem>,
}

impl Default for ExperienceEntry {
    fn default() -> Self {
        Self {
            id: String::new(),
            company: String::new(),
            position: String::new(),
            starting_date: String::new(),
            ending_date: String::new(),
            on_going: true,
            location: String::new(),
            additional_info: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceField {
    Company,
    Position,
    StartingDate,
    EndingDate,
    OnGoing,
    Location,
}

impl EntryField for ExperienceField {
    const ALL: &'static [Self] = &[
        ExperienceField::Company,
        ExperienceField::Position,
        ExperienceField::StartingDate,
        ExperienceField::EndingDate,
        ExperienceField::OnGoing,
        ExperienceField::Location,
    ];

    fn name(self) -> &'static str {
        match self {
            ExperienceField::Company => "company",
            ExperienceField::Position => "position",
            ExperienceField::StartingDate => "startingDate",
            ExperienceField::EndingDate => "endingDate",
            ExperienceField::OnGoing => "onGoing",
            ExperienceField::Location => "location",
        }
    }

    fn kind(self) -> FieldKind {
        match self {
            ExperienceField::StartingDate | ExperienceField::EndingDate => FieldKind::Month,
            ExperienceField::OnGoing => FieldKind::Flag,
            _ => FieldKind::Text,
        }
    }

    fn required(self) -> bool {
        matches!(
            self,
            ExperienceField::Company | ExperienceField::Position | ExperienceField::StartingDate
        )
    }
}

impl ListEntry for ExperienceEntry {
    type Field = ExperienceField;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn sub_items(&self) -> &[SubItem] {
        &self.additional_info
    }

    fn sub_items_mut(&mut self) -> &mut Vec<SubItem> {
        &mut self.additional_info
    }

    fn get(&self, field: ExperienceField) -> FieldValue {
        let text = match field {
            ExperienceField::OnGoing => return FieldValue::Flag(self.on_going),
            ExperienceField::Company => &self.company,
            ExperienceField::Position => &self.position,
            ExperienceField::StartingDate => &self.starting_date,
            ExperienceField::EndingDate => &self.ending_date,
            ExperienceField::Location => &self.location,
        };
        FieldValue::Text(text.clone())
    }

    fn set(&mut self, field: ExperienceField, value: FieldValue) -> Result<(), ValidationError> {
        match field {
            ExperienceField::OnGoing => self.on_going = expect_flag(field, value)?,
            ExperienceField::Company => self.company = expect_text(field, value)?,
            ExperienceField::Position => self.position = expect_text(field, value)?,
            ExperienceField::StartingDate => self.starting_date = expect_text(field, value)?,
            ExperienceField::EndingDate => self.ending_date = expect_text(field, value)?,
            ExperienceField::Location => self.location = expect_text(field, value)?,
        }
        Ok(())
    }
}

// ── Category (skills, other) ─────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryEntry {
    pub id: String,
    pub category: String,
    pub items: Vec<SubItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryField {
    Category,
}

impl EntryField for CategoryField {
    const ALL: &'static [Self] = &[CategoryField::Category];

    fn name(self) -> &'static str {
        "category"
    }

    fn kind(self) -> FieldKind {
        FieldKind::Text
    }

    fn required(self) -> bool {
        true
    }
}

impl ListEntry for CategoryEntry {
    type Field = CategoryField;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn sub_items(&self) -> &[SubItem] {
        &self.items
    }

    fn sub_items_mut(&mut self) -> &mut Vec<SubItem> {
        &mut self.items
    }

    fn get(&self, _field: CategoryField) -> FieldValue {
        FieldValue::Text(self.category.clone())
    }

    fn set(&mut self, field: CategoryField, value: FieldValue) -> Result<(), ValidationError> {
        self.category = expect_text(field, value)?;
        Ok(())
    }
}
