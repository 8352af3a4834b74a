//! Sample domain types shared by the integration tests.
#![allow(dead_code)]

use json_lift::convert::{as_array_of, as_float, as_int, as_text};
use json_lift::{
    curry, decode_nested, lift, read_field, Apply, Decodable, Encodable, Fields, Object, Reporter,
    Value,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Name {
    pub first: String,
    pub last: String,
}

impl Name {
    pub fn new(first: &str, last: &str) -> Self {
        Self {
            first: first.to_owned(),
            last: last.to_owned(),
        }
    }
}

impl Decodable for Name {
    fn decode_with(object: &Object, reporter: &dyn Reporter) -> Option<Self> {
        let fields = Fields::new(object, reporter);
        lift(
            curry!(|first: String, last: String| Name { first, last }),
            fields.required("first", as_text),
        )
        .ap(fields.required("last", as_text))
    }
}

impl Encodable for Name {
    fn encode(&self) -> Object {
        let mut object = Object::new();
        object.insert("first".into(), Value::from(self.first.as_str()));
        object.insert("last".into(), Value::from(self.last.as_str()));
        object
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub name: Name,
    pub email: Option<String>,
}

impl Decodable for User {
    fn decode_with(object: &Object, reporter: &dyn Reporter) -> Option<Self> {
        lift(
            curry!(|id: i64, name: Name, email: Option<String>| User { id, name, email }),
            read_field(object, "id", as_int, false, reporter),
        )
        .ap(decode_nested::<Name>(object.get("name"), reporter))
        .ap_optional(read_field(object, "email", as_text, true, reporter))
    }
}

impl Encodable for User {
    fn encode(&self) -> Object {
        let mut object = Object::new();
        object.insert("id".into(), Value::from(self.id));
        object.insert("name".into(), self.name.to_value());
        object.insert("email".into(), Value::from(self.email.clone()));
        object
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    pub title: String,
    pub lead: User,
    pub scores: Vec<f64>,
}

impl Decodable for Team {
    fn decode_with(object: &Object, reporter: &dyn Reporter) -> Option<Self> {
        let fields = Fields::new(object, reporter);
        lift(
            curry!(|title: String, lead: User, scores: Vec<f64>| Team { title, lead, scores }),
            fields.required("title", as_text),
        )
        .ap(fields.nested::<User>("lead"))
        .ap(fields.required("scores", as_array_of(as_float)))
    }
}

impl Encodable for Team {
    fn encode(&self) -> Object {
        let mut object = Object::new();
        object.insert("title".into(), Value::from(self.title.as_str()));
        object.insert("lead".into(), self.lead.to_value());
        object.insert(
            "scores".into(),
            Value::Array(self.scores.iter().copied().map(Value::from).collect()),
        );
        object
    }
}

/// Object view of a `json!` document; panics on non-object roots.
pub fn object(doc: serde_json::Value) -> Object {
    json_lift::json::object_from_json_value(doc).expect("test document must be an object")
}

#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub id: i64,
    pub alias: Option<Name>,
    pub note: Option<String>,
}

impl Decodable for Card {
    fn decode_with(object: &Object, reporter: &dyn Reporter) -> Option<Self> {
        let fields = Fields::new(object, reporter);
        lift(
            curry!(|id: i64, alias: Option<Name>, note: Option<String>| Card { id, alias, note }),
            fields.required("id", as_int),
        )
        .ap_optional(decode_nested::<Name>(fields.object().get("alias"), reporter))
        .ap_optional(fields.optional("note", as_text))
    }
}

impl Encodable for Card {
    fn encode(&self) -> Object {
        let mut object = Object::new();
        object.insert("id".into(), Value::from(self.id));
        object.insert(
            "alias".into(),
            self.alias.as_ref().map_or(Value::Null, Name::to_value),
        );
        object.insert("note".into(), Value::from(self.note.clone()));
        object
    }
}
