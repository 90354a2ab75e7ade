use flowlint_core::FieldPath;
use serde_json::{Map, Value};

pub const STEP_TYPE_HTTP: &str = "http";
pub const STEP_TYPE_ASSERT: &str = "assert";

/// A workflow document rooted at `workflowId` + `definition`.
///
/// The root object is kept as parsed so unknown fields and key order survive a
/// load/fix/save cycle untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowDocument {
    root: Map<String, Value>,
}

impl WorkflowDocument {
    pub fn from_map(root: Map<String, Value>) -> Self {
        Self { root }
    }

    pub fn workflow_id(&self) -> Option<&Value> {
        self.root.get("workflowId")
    }

    pub fn definition(&self) -> Option<&Value> {
        self.root.get("definition")
    }

    pub fn definition_mut(&mut self) -> Option<&mut Map<String, Value>> {
        self.root.get_mut("definition").and_then(Value::as_object_mut)
    }

    /// Object-valued steps of `definition.steps` in document order.
    ///
    /// Yields nothing when `definition` or `steps` is missing or not an object.
    pub fn steps(&self) -> impl Iterator<Item = WorkflowStep<'_>> {
        self.definition()
            .and_then(Value::as_object)
            .and_then(|definition| definition.get("steps"))
            .and_then(Value::as_object)
            .into_iter()
            .flat_map(|steps| steps.iter())
            .filter_map(|(id, step)| {
                step.as_object().map(|fields| WorkflowStep {
                    id: id.as_str(),
                    fields,
                })
            })
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.root
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.root.clone())
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.root)
    }
}

/// Read-only view over one entry of `definition.steps`.
#[derive(Debug, Clone, Copy)]
pub struct WorkflowStep<'a> {
    pub id: &'a str,
    fields: &'a Map<String, Value>,
}

impl<'a> WorkflowStep<'a> {
    pub fn step_type(&self) -> Option<&'a str> {
        self.fields.get("type").and_then(Value::as_str)
    }

    pub fn is_type(&self, step_type: &str) -> bool {
        self.step_type() == Some(step_type)
    }

    pub fn config(&self) -> Option<&'a Map<String, Value>> {
        self.fields.get("config").and_then(Value::as_object)
    }

    /// `config.body` of an http step.
    pub fn http_body(&self) -> Option<&'a Map<String, Value>> {
        if !self.is_type(STEP_TYPE_HTTP) {
            return None;
        }
        self.config()?.get("body").and_then(Value::as_object)
    }

    /// `(index, actual)` for each assertion of an assert step whose `actual` is a string.
    pub fn assertion_actuals(&self) -> Vec<(usize, &'a str)> {
        if !self.is_type(STEP_TYPE_ASSERT) {
            return Vec::new();
        }
        let Some(assertions) = self
            .config()
            .and_then(|config| config.get("assertions"))
            .and_then(Value::as_array)
        else {
            return Vec::new();
        };
        assertions
            .iter()
            .enumerate()
            .filter_map(|(index, assertion)| {
                assertion
                    .get("actual")
                    .and_then(Value::as_str)
                    .map(|actual| (index, actual))
            })
            .collect()
    }

    pub fn path(&self) -> FieldPath {
        step_path(self.id)
    }
}

pub(crate) fn step_path(step_id: &str) -> FieldPath {
    FieldPath::from_keys(["definition", "steps", step_id])
}
