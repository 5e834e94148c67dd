//! Class members: properties, functions, events, and callbacks.
//!
//! A member's identity within its class is the pair (kind, name), so a
//! property and a function may share a name.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::entity::{field, tags_from_value, unknown_field, Entity, EntityKind};
use crate::error::FieldResult;
use crate::tags::Tags;
use crate::value::{Parameter, Type, Value};

/// The four kinds of class member.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MemberKind {
    Property,
    Function,
    Event,
    Callback,
}

impl MemberKind {
    /// Every member kind, in identity order.
    pub const ALL: [MemberKind; 4] = [
        MemberKind::Property,
        MemberKind::Function,
        MemberKind::Event,
        MemberKind::Callback,
    ];
}

impl From<MemberKind> for EntityKind {
    fn from(kind: MemberKind) -> Self {
        match kind {
            MemberKind::Property => EntityKind::Property,
            MemberKind::Function => EntityKind::Function,
            MemberKind::Event => EntityKind::Event,
            MemberKind::Callback => EntityKind::Callback,
        }
    }
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&EntityKind::from(*self), f)
    }
}

const PROPERTY_FIELDS: &[&str] = &[
    field::NAME,
    field::VALUE_TYPE,
    field::READ_SECURITY,
    field::WRITE_SECURITY,
    field::CAN_LOAD,
    field::CAN_SAVE,
    field::TAGS,
];

const FUNCTION_FIELDS: &[&str] = &[
    field::NAME,
    field::PARAMETERS,
    field::RETURN_TYPE,
    field::SECURITY,
    field::TAGS,
];

const EVENT_FIELDS: &[&str] = &[field::NAME, field::PARAMETERS, field::SECURITY, field::TAGS];

const CALLBACK_FIELDS: &[&str] = FUNCTION_FIELDS;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Property {
    pub name: String,
    pub value_type: Type,
    pub read_security: String,
    pub write_security: String,
    pub can_load: bool,
    pub can_save: bool,
    #[serde(default)]
    pub tags: Tags,
}

impl Property {
    pub fn new(name: impl Into<String>, value_type: Type) -> Self {
        Self {
            name: name.into(),
            value_type,
            ..Default::default()
        }
    }
}

impl Entity for Property {
    fn kind(&self) -> EntityKind {
        EntityKind::Property
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn tags(&self) -> &Tags {
        &self.tags
    }

    fn field_names(&self) -> &'static [&'static str] {
        PROPERTY_FIELDS
    }

    fn field(&self, name: &str) -> Option<Value> {
        Some(match name {
            field::NAME => Value::String(self.name.clone()),
            field::VALUE_TYPE => Value::Type(self.value_type.clone()),
            field::READ_SECURITY => Value::String(self.read_security.clone()),
            field::WRITE_SECURITY => Value::String(self.write_security.clone()),
            field::CAN_LOAD => Value::Bool(self.can_load),
            field::CAN_SAVE => Value::Bool(self.can_save),
            field::TAGS => self.tags.to_value(),
            _ => return None,
        })
    }

    fn set_field(&mut self, name: &str, value: Value) -> FieldResult<()> {
        match name {
            field::NAME => self.name = value.into_string(name)?,
            field::VALUE_TYPE => self.value_type = value.into_type(name)?,
            field::READ_SECURITY => self.read_security = value.into_string(name)?,
            field::WRITE_SECURITY => self.write_security = value.into_string(name)?,
            field::CAN_LOAD => self.can_load = value.into_bool(name)?,
            field::CAN_SAVE => self.can_save = value.into_bool(name)?,
            field::TAGS => self.tags = tags_from_value(name, value)?,
            _ => return Err(unknown_field(self.kind(), name)),
        }
        Ok(())
    }
}

/// A method. Parameters may carry default values.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Function {
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub return_type: Type,
    pub security: String,
    #[serde(default)]
    pub tags: Tags,
}

impl Function {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            return_type: Type::new("void"),
            ..Default::default()
        }
    }

    /// Set the parameters, dropping any defaults.
    pub fn with_parameters(mut self, parameters: Vec<Parameter>) -> Self {
        self.parameters = without_defaults(parameters);
        self
    }
}

impl Entity for Function {
    fn kind(&self) -> EntityKind {
        EntityKind::Function
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn tags(&self) -> &Tags {
        &self.tags
    }

    fn field_names(&self) -> &'static [&'static str] {
        FUNCTION_FIELDS
    }

    fn field(&self, name: &str) -> Option<Value> {
        Some(match name {
            field::NAME => Value::String(self.name.clone()),
            field::PARAMETERS => Value::Parameters(self.parameters.clone()),
            field::RETURN_TYPE => Value::Type(self.return_type.clone()),
            field::SECURITY => Value::String(self.security.clone()),
            field::TAGS => self.tags.to_value(),
            _ => return None,
        })
    }

    fn set_field(&mut self, name: &str, value: Value) -> FieldResult<()> {
        match name {
            field::NAME => self.name = value.into_string(name)?,
            field::PARAMETERS => self.parameters = value.into_parameters(name)?,
            field::RETURN_TYPE => self.return_type = value.into_type(name)?,
            field::SECURITY => self.security = value.into_string(name)?,
            field::TAGS => self.tags = tags_from_value(name, value)?,
            _ => return Err(unknown_field(self.kind(), name)),
        }
        Ok(())
    }
}

/// A signal. Parameters never carry defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Event {
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub security: String,
    #[serde(default)]
    pub tags: Tags,
}

impl Event {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the parameters, dropping any defaults.
    pub fn with_parameters(mut self, parameters: Vec<Parameter>) -> Self {
        self.parameters = without_defaults(parameters);
        self
    }
}

impl Entity for Event {
    fn kind(&self) -> EntityKind {
        EntityKind::Event
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn tags(&self) -> &Tags {
        &self.tags
    }

    fn field_names(&self) -> &'static [&'static str] {
        EVENT_FIELDS
    }

    fn field(&self, name: &str) -> Option<Value> {
        Some(match name {
            field::NAME => Value::String(self.name.clone()),
            field::PARAMETERS => Value::Parameters(self.parameters.clone()),
            field::SECURITY => Value::String(self.security.clone()),
            field::TAGS => self.tags.to_value(),
            _ => return None,
        })
    }

    fn set_field(&mut self, name: &str, value: Value) -> FieldResult<()> {
        match name {
            field::NAME => self.name = value.into_string(name)?,
            field::PARAMETERS => self.parameters = without_defaults(value.into_parameters(name)?),
            field::SECURITY => self.security = value.into_string(name)?,
            field::TAGS => self.tags = tags_from_value(name, value)?,
            _ => return Err(unknown_field(self.kind(), name)),
        }
        Ok(())
    }
}

/// A function implemented by the consumer. Parameters never carry defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Callback {
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub return_type: Type,
    pub security: String,
    #[serde(default)]
    pub tags: Tags,
}

impl Callback {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            return_type: Type::new("void"),
            ..Default::default()
        }
    }
}

impl Entity for Callback {
    fn kind(&self) -> EntityKind {
        EntityKind::Callback
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn tags(&self) -> &Tags {
        &self.tags
    }

    fn field_names(&self) -> &'static [&'static str] {
        CALLBACK_FIELDS
    }

    fn field(&self, name: &str) -> Option<Value> {
        Some(match name {
            field::NAME => Value::String(self.name.clone()),
            field::PARAMETERS => Value::Parameters(self.parameters.clone()),
            field::RETURN_TYPE => Value::Type(self.return_type.clone()),
            field::SECURITY => Value::String(self.security.clone()),
            field::TAGS => self.tags.to_value(),
            _ => return None,
        })
    }

    fn set_field(&mut self, name: &str, value: Value) -> FieldResult<()> {
        match name {
            field::NAME => self.name = value.into_string(name)?,
            field::PARAMETERS => self.parameters = without_defaults(value.into_parameters(name)?),
            field::RETURN_TYPE => self.return_type = value.into_type(name)?,
            field::SECURITY => self.security = value.into_string(name)?,
            field::TAGS => self.tags = tags_from_value(name, value)?,
            _ => return Err(unknown_field(self.kind(), name)),
        }
        Ok(())
    }
}

fn without_defaults(mut params: Vec<Parameter>) -> Vec<Parameter> {
    for p in &mut params {
        p.default = None;
    }
    params
}

/// A class member of any kind.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "MemberType")]
pub enum Member {
    Property(Property),
    Function(Function),
    Event(Event),
    Callback(Callback),
}

impl Member {
    pub fn member_kind(&self) -> MemberKind {
        match self {
            Self::Property(_) => MemberKind::Property,
            Self::Function(_) => MemberKind::Function,
            Self::Event(_) => MemberKind::Event,
            Self::Callback(_) => MemberKind::Callback,
        }
    }

    /// Drop parameter defaults from kinds that cannot carry them.
    ///
    /// Fields written through [`Entity::set_field`] are already normalized;
    /// this covers members built or deserialized directly.
    pub fn normalize(&mut self) {
        match self {
            Self::Event(Event { parameters, .. })
            | Self::Callback(Callback { parameters, .. }) => {
                *parameters = without_defaults(std::mem::take(parameters));
            }
            Self::Property(_) | Self::Function(_) => {}
        }
    }

    /// A copy of this member with [`Member::normalize`] applied.
    pub fn normalized(&self) -> Self {
        let mut member = self.clone();
        member.normalize();
        member
    }

    fn inner(&self) -> &dyn Entity {
        match self {
            Self::Property(m) => m,
            Self::Function(m) => m,
            Self::Event(m) => m,
            Self::Callback(m) => m,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn Entity {
        match self {
            Self::Property(m) => m,
            Self::Function(m) => m,
            Self::Event(m) => m,
            Self::Callback(m) => m,
        }
    }
}

impl Entity for Member {
    fn kind(&self) -> EntityKind {
        self.member_kind().into()
    }

    fn name(&self) -> &str {
        self.inner().name()
    }

    fn tags(&self) -> &Tags {
        self.inner().tags()
    }

    fn field_names(&self) -> &'static [&'static str] {
        self.inner().field_names()
    }

    fn field(&self, name: &str) -> Option<Value> {
        self.inner().field(name)
    }

    fn set_field(&mut self, name: &str, value: Value) -> FieldResult<()> {
        self.inner_mut().set_field(name, value)
    }
}

impl From<Property> for Member {
    fn from(m: Property) -> Self {
        Self::Property(m)
    }
}

impl From<Function> for Member {
    fn from(m: Function) -> Self {
        Self::Function(m)
    }
}

impl From<Event> for Member {
    fn from(m: Event) -> Self {
        Self::Event(m)
    }
}

impl From<Callback> for Member {
    fn from(m: Callback) -> Self {
        Self::Callback(m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FieldError;

    #[test]
    fn property_fields_roundtrip_through_bag() {
        let mut prop = Property::new("Visible", Type::new("bool"));
        prop.can_load = true;
        prop.tags.insert("Hidden");

        let mut copy = Property::default();
        copy.set_fields(prop.fields()).unwrap();
        assert_eq!(copy, prop);
    }

    #[test]
    fn set_field_leaves_other_fields_untouched() {
        let mut func = Function::new("Use");
        func.security = "None".into();
        func.set_field(field::RETURN_TYPE, Type::new("bool").into()).unwrap();
        assert_eq!(func.return_type, Type::new("bool"));
        assert_eq!(func.security, "None");
        assert_eq!(func.name, "Use");
    }

    #[test]
    fn kinds_without_the_field_reject_it() {
        let mut event = Member::from(Event::new("Changed"));
        let err = event
            .set_field(field::RETURN_TYPE, Type::new("void").into())
            .unwrap_err();
        assert_eq!(
            err,
            FieldError::UnknownField {
                entity: EntityKind::Event,
                field: field::RETURN_TYPE.into(),
            }
        );
        assert!(event.field(field::VALUE_TYPE).is_none());
    }

    #[test]
    fn event_parameters_drop_defaults() {
        let mut event = Event::new("Touched");
        let params = vec![Parameter::new(Type::new("Instance"), "part").with_default("nil")];
        event.set_field(field::PARAMETERS, params.into()).unwrap();
        assert_eq!(event.parameters[0].default, None);
    }

    #[test]
    fn every_path_drops_event_and_callback_defaults() {
        let params = vec![Parameter::new(Type::new("int"), "a").with_default("1")];
        let bare = vec![Parameter::new(Type::new("int"), "a")];

        assert_eq!(Event::new("Touched").with_parameters(params.clone()).parameters, bare);
        assert_eq!(Callback::new("OnInvoke").with_parameters(params.clone()).parameters, bare);

        let mut built = Member::from(Event {
            name: "Touched".into(),
            parameters: params.clone(),
            ..Default::default()
        });
        built.normalize();
        let mut written = Member::from(Event::new("Touched"));
        written.set_field(field::PARAMETERS, params.clone().into()).unwrap();
        assert_eq!(built, written);

        let function = Member::from(Function {
            name: "Use".into(),
            parameters: params.clone(),
            ..Default::default()
        });
        assert_eq!(function.normalized(), function);
    }

    #[test]
    fn member_delegates_to_variant() {
        let member = Member::from(Callback::new("OnInvoke"));
        assert_eq!(member.member_kind(), MemberKind::Callback);
        assert_eq!(member.kind(), EntityKind::Callback);
        assert_eq!(member.name(), "OnInvoke");
        assert_eq!(member.field_names(), CALLBACK_FIELDS);
    }

    #[test]
    fn member_serializes_with_kind_tag() {
        let member = Member::from(Property::new("Visible", Type::new("bool")));
        let json = serde_json::to_value(&member).unwrap();
        assert_eq!(json["MemberType"], "Property");
        assert_eq!(json["Name"], "Visible");
        let back: Member = serde_json::from_value(json).unwrap();
        assert_eq!(back, member);
    }
}
