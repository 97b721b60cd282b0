//! Shared host type for the model tests.

use std::sync::Arc;

use tabula_foundation::{TypeTag, Value};
use tabula_model::{Attributable, AttributeStore, attribute_accessors, initialize_attributes};
use tabula_schema::{AttributeDefinition, AttributeSchema};

/// A host with one plain field next to its attributes.
pub struct Greeting {
    pub name: String,
    schema: Arc<AttributeSchema<Greeting>>,
    attributes: AttributeStore,
}

impl Greeting {
    pub fn new(name: &str) -> Self {
        let schema = Arc::new(schema());
        Self {
            name: name.to_string(),
            attributes: initialize_attributes(&schema),
            schema,
        }
    }
}

impl Attributable for Greeting {
    fn attribute_schema(&self) -> &Arc<AttributeSchema<Self>> {
        &self.schema
    }

    fn attribute_store(&self) -> &AttributeStore {
        &self.attributes
    }

    fn attribute_store_mut(&mut self) -> &mut AttributeStore {
        &mut self.attributes
    }
}

attribute_accessors! {
    Greeting {
        hello / set_hello,
        string / set_string,
        count / set_count,
        calc / set_calc,
    }
}

pub fn schema() -> AttributeSchema<Greeting> {
    let mut schema = AttributeSchema::new("Greeting");
    let definitions = [
        AttributeDefinition::new("hello"),
        AttributeDefinition::new("string")
            .with_type(TypeTag::STRING)
            .with_default_blank(true)
            .with_instance_default(|g: &Greeting| Value::from(g.name.as_str())),
        AttributeDefinition::new("count")
            .with_type(TypeTag::INTEGER)
            .with_default(10),
        AttributeDefinition::new("calc")
            .with_type(TypeTag::INTEGER)
            .with_computed_default(|| Value::Int(2 + 3)),
        AttributeDefinition::new("enum")
            .with_type(TypeTag::INTEGER)
            .with_allowed_values([1, 2, 3]),
    ];
    for definition in definitions {
        schema.attribute(definition).unwrap();
    }
    schema
}
