// HTML-ish form built from inputs nested in fieldsets and forms.
// Data flows in and out as JSON, routed to children by element name.

use itertools::Itertools;
use serde_json::{Map, Value};

use crate::composite::tree::{Component, NodeId, Tree};
use crate::error::{PatternError, Result};

#[derive(Debug, Clone, PartialEq)]
pub enum FormElement {
    Input {
        name: String,
        title: String,
        input_type: String,
        data: Value,
    },
    FieldSet {
        name: String,
        title: String,
    },
    Form {
        name: String,
        title: String,
        action: String,
    },
}

impl Component for FormElement {
    fn name(&self) -> &str {
        match self {
            FormElement::Input { name, .. }
            | FormElement::FieldSet { name, .. }
            | FormElement::Form { name, .. } => name,
        }
    }

    fn accepts_children(&self) -> bool {
        !matches!(self, FormElement::Input { .. })
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub type FormTree = Tree<FormElement>;

impl Tree<FormElement> {
    pub fn add_input(
        &mut self,
        name: impl Into<String>,
        title: impl Into<String>,
        input_type: impl Into<String>,
    ) -> NodeId {
        self.insert(FormElement::Input {
            name: name.into(),
            title: title.into(),
            input_type: input_type.into(),
            data: Value::Null,
        })
    }

    pub fn add_fieldset(&mut self, name: impl Into<String>, title: impl Into<String>) -> NodeId {
        self.insert(FormElement::FieldSet {
            name: name.into(),
            title: title.into(),
        })
    }

    pub fn add_form(
        &mut self,
        name: impl Into<String>,
        title: impl Into<String>,
        action: impl Into<String>,
    ) -> NodeId {
        self.insert(FormElement::Form {
            name: name.into(),
            title: title.into(),
            action: action.into(),
        })
    }

    fn element(&self, id: NodeId) -> Result<&FormElement> {
        self.get(id)
            .ok_or_else(|| PatternError::not_found("tree nodes", id.to_string()))
    }

    /// Children paired with their names. Data is keyed by name, so two siblings
    /// sharing one would silently collapse; that is refused instead.
    fn named_children(&self, id: NodeId) -> Result<Vec<(&str, NodeId)>> {
        let mut named = Vec::with_capacity(self.children(id).len());
        for &child in self.children(id) {
            named.push((self.element(child)?.name(), child));
        }

        if let Some(name) = named.iter().map(|(name, _)| *name).duplicates().next() {
            return Err(PatternError::contract_violation(
                self.element(id)?.name(),
                format!("hold a single child named '{name}'"),
            ));
        }
        Ok(named)
    }

    /// Inputs store `value` as is. Groups expect an object and hand each child the
    /// entry under the child's name; children without an entry keep their data.
    ///
    /// The whole value is checked against the subtree before anything is written,
    /// so a failed call leaves every element untouched.
    pub fn set_data(&mut self, id: NodeId, value: &Value) -> Result<()> {
        let mut writes = Vec::new();
        self.plan_data(id, value, &mut writes)?;
        for (input, value) in writes {
            if let Some(FormElement::Input { data, .. }) = self.get_mut(input) {
                *data = value;
            }
        }
        Ok(())
    }

    fn plan_data(&self, id: NodeId, value: &Value, writes: &mut Vec<(NodeId, Value)>) -> Result<()> {
        let element = self.element(id)?;
        if let FormElement::Input { .. } = element {
            writes.push((id, value.clone()));
            return Ok(());
        }

        let Some(fields) = value.as_object() else {
            return Err(PatternError::contract_violation(
                element.name(),
                "accept non-object data",
            ));
        };
        for (name, child) in self.named_children(id)? {
            if let Some(child_value) = fields.get(name) {
                self.plan_data(child, child_value, writes)?;
            }
        }
        Ok(())
    }

    /// Inputs return their value; groups return an object keyed by child name.
    pub fn data(&self, id: NodeId) -> Result<Value> {
        match self.element(id)? {
            FormElement::Input { data, .. } => Ok(data.clone()),
            _ => {
                let mut fields = Map::new();
                for (name, child) in self.named_children(id)? {
                    fields.insert(name.to_string(), self.data(child)?);
                }
                Ok(Value::Object(fields))
            }
        }
    }

    pub fn render(&self, id: NodeId) -> Result<String> {
        let element = self.element(id)?;
        let mut inner = String::new();
        for &child in self.children(id) {
            inner.push_str(&self.render(child)?);
        }

        let html = match element {
            FormElement::Input {
                name,
                title,
                input_type,
                data,
            } => format!(
                r#"<label for="{name}">{title}</label><input name="{name}" type="{input_type}" value="{value}">"#,
                name = html_escape::encode_double_quoted_attribute(name),
                title = html_escape::encode_text(title),
                input_type = html_escape::encode_double_quoted_attribute(input_type),
                value = html_escape::encode_double_quoted_attribute(&value_text(data)),
            ),
            FormElement::FieldSet { title, .. } => format!(
                "<fieldset><legend>{}</legend>{inner}</fieldset>",
                html_escape::encode_text(title)
            ),
            FormElement::Form { title, action, .. } => format!(
                r#"<form action="{}"><h3>{}</h3>{inner}</form>"#,
                html_escape::encode_double_quoted_attribute(action),
                html_escape::encode_text(title)
            ),
        };
        Ok(html)
    }
}

/// The product form: name and description inputs plus a photo fieldset.
pub fn product_form(tree: &mut FormTree) -> Result<NodeId> {
    let form = tree.add_form("product", "Add Product", "/product/add");
    let name = tree.add_input("name", "Name", "text");
    let description = tree.add_input("description", "Description", "text");
    let picture = tree.add_fieldset("photo", "Product Photo");
    let caption = tree.add_input("caption", "Caption", "text");
    let image = tree.add_input("image", "Image", "file");

    tree.attach(picture, caption)?;
    tree.attach(picture, image)?;
    tree.attach(form, name)?;
    tree.attach(form, description)?;
    tree.attach(form, picture)?;
    Ok(form)
}
