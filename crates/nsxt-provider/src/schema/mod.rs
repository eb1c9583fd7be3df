// ── Declarative attribute schemas ──
//
// A `Schema` describes one attribute the way the host engine sees it: value
// type, cardinality, required/optional/computed flags, default, validator
// and nested element shape. Schemas serialize to JSON for the host
// integration and can validate a raw attribute value themselves.

mod definitions;
mod validation;

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

pub use definitions::*;
pub use validation::{Diagnostic, Validator};

/// Primitive or collection type of an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ValueType {
    Bool,
    Int,
    String,
    /// Ordered collection.
    List,
    /// Unordered collection without duplicates.
    Set,
}

/// Element shape of a `List` or `Set` attribute.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Elem {
    /// Collection of primitive values.
    Schema(Box<Schema>),
    /// Collection of nested blocks.
    Resource(Resource),
}

/// Nested block: a fixed set of named attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Resource {
    pub schema: BTreeMap<String, Schema>,
}

impl Resource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a named attribute to the block.
    pub fn with(mut self, name: &str, schema: Schema) -> Self {
        self.schema.insert(name.to_owned(), schema);
        self
    }

    fn validate_into(&self, path: &str, value: &Value, diags: &mut Vec<Diagnostic>) {
        let Some(obj) = value.as_object() else {
            diags.push(Diagnostic::new(
                path,
                format!("expected a block, got {}", type_name(value)),
            ));
            return;
        };

        for (name, schema) in &self.schema {
            let field = obj.get(name).unwrap_or(&Value::Null);
            schema.validate_into(&format!("{path}.{name}"), field, diags);
        }

        for name in obj.keys().filter(|k| !self.schema.contains_key(*k)) {
            diags.push(Diagnostic::new(
                &format!("{path}.{name}"),
                "unsupported argument",
            ));
        }
    }
}

/// Description of a single attribute.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Schema {
    #[serde(rename = "type")]
    pub value_type: ValueType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub required: bool,
    pub optional: bool,
    pub computed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validate: Option<Validator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elem: Option<Elem>,
}

impl Schema {
    pub fn new(value_type: ValueType) -> Self {
        Self {
            value_type,
            description: None,
            required: false,
            optional: false,
            computed: false,
            default: None,
            validate: None,
            elem: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self.optional = false;
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self.required = false;
        self
    }

    /// Required when `required` is true, optional otherwise.
    pub fn required_if(self, required: bool) -> Self {
        if required {
            self.required()
        } else {
            self.optional()
        }
    }

    pub fn computed(mut self) -> Self {
        self.computed = true;
        self
    }

    pub fn computed_if(mut self, computed: bool) -> Self {
        self.computed = computed;
        self
    }

    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn validator(mut self, validator: Validator) -> Self {
        self.validate = Some(validator);
        self
    }

    pub fn elem_schema(mut self, schema: Schema) -> Self {
        self.elem = Some(Elem::Schema(Box::new(schema)));
        self
    }

    pub fn elem_resource(mut self, resource: Resource) -> Self {
        self.elem = Some(Elem::Resource(resource));
        self
    }

    /// Check a raw attribute value against this schema.
    ///
    /// `path` names the attribute in diagnostics (`subnet.0.prefix_length`).
    /// Null stands for an unset attribute and is only rejected when the
    /// attribute is required and not computed. An empty string is unset for
    /// attributes that are not required.
    pub fn validate(&self, path: &str, value: &Value) -> Vec<Diagnostic> {
        let mut diags = Vec::new();
        self.validate_into(path, value, &mut diags);
        diags
    }

    fn validate_into(&self, path: &str, value: &Value, diags: &mut Vec<Diagnostic>) {
        if value.is_null() {
            if self.required && !self.computed {
                diags.push(Diagnostic::new(path, "required attribute is missing"));
            }
            return;
        }
        // The host reports an unset optional string as "".
        if !self.required && value.as_str() == Some("") {
            return;
        }

        let type_ok = match self.value_type {
            ValueType::Bool => value.is_boolean(),
            ValueType::Int => value.is_i64(),
            ValueType::String => value.is_string(),
            ValueType::List | ValueType::Set => value.is_array(),
        };
        if !type_ok {
            diags.push(Diagnostic::new(
                path,
                format!("expected {}, got {}", self.value_type, type_name(value)),
            ));
            return;
        }

        if let Some(items) = value.as_array() {
            for (idx, item) in items.iter().enumerate() {
                let item_path = format!("{path}.{idx}");
                match &self.elem {
                    Some(Elem::Schema(schema)) => schema.validate_into(&item_path, item, diags),
                    Some(Elem::Resource(resource)) => {
                        resource.validate_into(&item_path, item, diags);
                    }
                    None => {}
                }
            }
        }

        if let Some(validator) = &self.validate {
            if let Err(diag) = validator.check(path, value) {
                diags.push(diag);
            }
        }
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_i64() || n.is_u64() => "int",
        Value::Number(_) => "float",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "block",
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn block() -> Schema {
        Schema::new(ValueType::Set).optional().elem_resource(
            Resource::new()
                .with("scope", Schema::new(ValueType::String).required())
                .with("tag", Schema::new(ValueType::String).required()),
        )
    }

    #[test]
    fn null_is_accepted_for_optional_attributes() {
        assert!(block().validate("tag", &Value::Null).is_empty());
    }

    #[test]
    fn required_attribute_must_be_present() {
        let schema = Schema::new(ValueType::String).required();
        let diags = schema.validate("display_name", &Value::Null);
        assert_eq!(
            diags,
            vec![Diagnostic::new("display_name", "required attribute is missing")]
        );
    }

    #[test]
    fn nested_required_keys_are_reported_with_path() {
        let diags = block().validate("tag", &json!([{"scope": "env"}]));
        assert_eq!(
            diags,
            vec![Diagnostic::new("tag.0.tag", "required attribute is missing")]
        );
    }

    #[test]
    fn type_mismatch_stops_descent() {
        let diags = block().validate("tag", &json!({"scope": "env"}));
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].message, "expected set, got block");
    }

    #[test]
    fn unknown_block_keys_are_rejected() {
        let diags = block().validate("tag", &json!([{"scope": "a", "tag": "b", "extra": 1}]));
        assert_eq!(diags, vec![Diagnostic::new("tag.0.extra", "unsupported argument")]);
    }

    #[test]
    fn empty_optional_string_skips_validator() {
        let schema = Schema::new(ValueType::String)
            .optional()
            .validator(Validator::SingleIp);
        assert!(schema.validate("ip_address", &json!("")).is_empty());

        let required = Schema::new(ValueType::String)
            .required()
            .validator(Validator::SingleIp);
        assert_eq!(required.validate("ip_address", &json!("")).len(), 1);
    }

    #[test]
    fn float_is_not_an_int() {
        let diags = Schema::new(ValueType::Int).validate("vlan", &json!(1.5));
        assert_eq!(diags[0].message, "expected int, got float");
    }

    #[test]
    fn schema_serializes_for_host() {
        let value = serde_json::to_value(
            Schema::new(ValueType::Int)
                .computed()
                .description("revision"),
        )
        .ok();
        assert_eq!(
            value,
            Some(json!({
                "type": "int",
                "description": "revision",
                "required": false,
                "optional": false,
                "computed": true
            }))
        );
    }
}
