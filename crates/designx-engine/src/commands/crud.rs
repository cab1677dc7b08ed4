//! CRUD form planning.
//!
//! An entity gets three forms, one per [`TemplateKind`]: a table for
//! listing, a details view for display and editing, and a create view.

use crate::config::{EngineConfig, DEFAULT_MODEL_NAMESPACE};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateKind {
    Table,
    Details,
    Create,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 3] = [TemplateKind::Table, TemplateKind::Details, TemplateKind::Create];

    /// Name of the template in the designer's template picker
    pub fn label(&self) -> &'static str {
        match self {
            TemplateKind::Table => "Table View",
            TemplateKind::Details => "Details View",
            TemplateKind::Create => "Create View",
        }
    }

    pub fn name_suffix(&self) -> &'static str {
        match self {
            TemplateKind::Table => "-table",
            TemplateKind::Details => "-details",
            TemplateKind::Create => "-create",
        }
    }

    pub fn label_suffix(&self) -> &'static str {
        match self {
            TemplateKind::Table => " Table",
            TemplateKind::Details => " Details",
            TemplateKind::Create => " Create",
        }
    }

    pub fn description(&self, entity: &str) -> String {
        match self {
            TemplateKind::Table => format!("Table view for listing and searching {} records", entity),
            TemplateKind::Details => {
                format!("Details view for displaying and editing {} information", entity)
            }
            TemplateKind::Create => format!("Create view for adding new {} records", entity),
        }
    }

    /// Text the template's row in the picker carries besides its label
    fn row_hint(&self) -> &'static str {
        match self {
            TemplateKind::Table => "list and search",
            TemplateKind::Details => "display and edit",
            TemplateKind::Create => "create view",
        }
    }

    /// Component type a fresh form of this kind starts with
    pub fn starter_component(&self) -> &'static str {
        match self {
            TemplateKind::Table => "datatable",
            TemplateKind::Details | TemplateKind::Create => "collapsiblePanel",
        }
    }
}

/// Find the picker row for a template
///
/// Used by browser-driving `FormCreator`s that live outside this crate;
/// the offline drafter has no picker. A row matches when it contains the template's label and, ignoring
/// case, its hint text. Returns the first match.
pub fn find_template_row<R: AsRef<str>>(rows: &[R], kind: TemplateKind) -> Option<usize> {
    rows.iter().position(|row| {
        let row = row.as_ref();
        row.contains(kind.label()) && row.to_lowercase().contains(kind.row_hint())
    })
}

/// `OrganisationBase` -> `organisation-base`
pub fn kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev: Option<char> = None;
    for c in name.chars() {
        if c.is_alphanumeric() {
            let boundary = c.is_uppercase()
                && prev.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit());
            if boundary || (prev.is_none() && !out.is_empty()) {
                out.push('-');
            }
            out.extend(c.to_lowercase());
            prev = Some(c);
        } else {
            prev = None;
        }
    }
    out
}

/// Everything needed to create one form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSpec {
    pub kind: TemplateKind,
    pub entity: String,
    pub form_name: String,
    pub form_label: String,
    pub description: String,
    pub module: String,
    pub model_type: String,
}

impl FormSpec {
    /// The form of `kind` for `entity`
    ///
    /// The model type defaults to `Shesha.Domain.{entity}`.
    pub fn for_entity(entity: &str, module: &str, kind: TemplateKind) -> Self {
        Self {
            kind,
            entity: entity.to_string(),
            form_name: format!("{}{}", kebab_case(entity), kind.name_suffix()),
            form_label: format!("{}{}", entity, kind.label_suffix()),
            description: kind.description(entity),
            module: module.to_string(),
            model_type: format!("{}.{}", DEFAULT_MODEL_NAMESPACE, entity),
        }
    }

    pub fn with_model_type(mut self, model_type: impl Into<String>) -> Self {
        self.model_type = model_type.into();
        self
    }

    /// What to type into the model picker: the last segment, lowercased
    ///
    /// Only browser-driving `FormCreator`s outside this crate type it.
    pub fn model_search_term(&self) -> String {
        self.model_type
            .rsplit('.')
            .next()
            .unwrap_or_default()
            .to_lowercase()
    }
}

/// The forms to create for one entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrudPlan {
    pub entity: String,
    pub forms: Vec<FormSpec>,
}

impl CrudPlan {
    /// Plan all three forms, taking module and model namespace from `config`
    pub fn new(entity: &str, config: &EngineConfig) -> Self {
        let model_type = format!("{}.{}", config.model_namespace, entity);
        let forms = TemplateKind::ALL
            .iter()
            .map(|kind| {
                FormSpec::for_entity(entity, &config.module, *kind).with_model_type(model_type.clone())
            })
            .collect();
        Self {
            entity: entity.to_string(),
            forms,
        }
    }

    /// Use an explicit model type for every form instead of the namespaced entity
    pub fn with_model_type(mut self, model_type: &str) -> Self {
        for form in &mut self.forms {
            form.model_type = model_type.to_string();
        }
        self
    }

    /// Keep only the given kinds
    pub fn only(mut self, kinds: &[TemplateKind]) -> Self {
        self.forms.retain(|f| kinds.contains(&f.kind));
        self
    }
}
