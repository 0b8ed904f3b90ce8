//! Form model: fields, checkboxes and the submit control

/// Kind of form control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    #[default]
    Text,
    Email,
    Number,
    Password,
    TextArea,
    Select,
    Hidden,
    Checkbox,
}

/// One named control of a form
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Field {
    pub name: String,
    pub id: String,
    pub kind: FieldKind,
    pub value: String,
    pub required: bool,
    /// Checkbox state
    pub checked: bool,
    /// Carries `is-invalid` after a failed validation
    pub invalid: bool,
    default_value: String,
    default_checked: bool,
}

impl Field {
    pub fn new(name: &str, kind: FieldKind) -> Self {
        Self {
            name: name.to_string(),
            id: name.to_string(),
            kind,
            ..Self::default()
        }
    }

    pub fn text(name: &str) -> Self {
        Self::new(name, FieldKind::Text)
    }

    pub fn email(name: &str) -> Self {
        Self::new(name, FieldKind::Email)
    }

    pub fn select(name: &str) -> Self {
        Self::new(name, FieldKind::Select)
    }

    /// Unchecked checkbox submitting `value` when checked
    pub fn checkbox(name: &str, value: &str) -> Self {
        let mut field = Self::new(name, FieldKind::Checkbox);
        field.id = format!("{name}_{value}");
        field.value = value.to_string();
        field.default_value = value.to_string();
        field
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Initial value, restored on reset
    pub fn with_value(mut self, value: &str) -> Self {
        self.value = value.to_string();
        self.default_value = value.to_string();
        self
    }

    /// Initially checked, restored on reset
    pub fn checked(mut self) -> Self {
        self.checked = true;
        self.default_checked = true;
        self
    }

    /// Name used in validation messages
    pub fn label(&self) -> &str {
        if self.name.is_empty() { &self.id } else { &self.name }
    }

    /// Whether the field contributes an entry on submission
    fn is_successful(&self) -> bool {
        !self.name.is_empty() && (self.kind != FieldKind::Checkbox || self.checked)
    }

    fn reset(&mut self) {
        self.value = self.default_value.clone();
        self.checked = self.default_checked;
    }
}

/// The form's `button[type=submit]`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SubmitButton {
    pub disabled: bool,
    pub inner_html: String,
    /// `data-original-text`
    pub original_text: Option<String>,
}

impl SubmitButton {
    pub fn new(label: &str) -> Self {
        Self {
            disabled: false,
            inner_html: label.to_string(),
            original_text: Some(label.to_string()),
        }
    }
}

/// A form and its controls, in document order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Form {
    pub id: String,
    pub fields: Vec<Field>,
    pub submit: Option<SubmitButton>,
}

impl Form {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            ..Self::default()
        }
    }

    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_submit(mut self, button: SubmitButton) -> Self {
        self.submit = Some(button);
        self
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    /// Set the value of the first field called `name`
    pub fn set_value(&mut self, name: &str, value: &str) -> bool {
        match self.field_mut(name) {
            Some(field) => {
                field.value = value.to_string();
                true
            }
            None => false,
        }
    }

    /// Check or uncheck the checkbox `name` whose value is `value`
    pub fn set_checked(&mut self, name: &str, value: &str, checked: bool) -> bool {
        match self
            .fields
            .iter_mut()
            .find(|f| f.kind == FieldKind::Checkbox && f.name == name && f.value == value)
        {
            Some(field) => {
                field.checked = checked;
                true
            }
            None => false,
        }
    }

    /// Every submitted `(name, value)` pair, duplicates included
    pub fn entries(&self) -> Vec<(String, String)> {
        self.fields
            .iter()
            .filter(|f| f.is_successful())
            .map(|f| (f.name.clone(), f.value.clone()))
            .collect()
    }

    /// One entry per name: first position, last value
    pub fn object_entries(&self) -> Vec<(String, String)> {
        let mut entries: Vec<(String, String)> = Vec::new();
        for (name, value) in self.entries() {
            match entries.iter_mut().find(|(n, _)| *n == name) {
                Some(existing) => existing.1 = value,
                None => entries.push((name, value)),
            }
        }
        entries
    }

    /// Values of the checked checkboxes called `name`, in document order
    pub fn checked_values(&self, name: &str) -> Vec<String> {
        self.fields
            .iter()
            .filter(|f| f.kind == FieldKind::Checkbox && f.name == name && f.checked)
            .map(|f| f.value.clone())
            .collect()
    }

    pub fn invalid_fields(&self) -> Vec<&Field> {
        self.fields.iter().filter(|f| f.invalid).collect()
    }

    /// Restore the initial values
    pub fn reset(&mut self) {
        self.fields.iter_mut().for_each(Field::reset);
    }
}
