use super::{FormHost, FormSpec, FormValue, FormValues};
use crate::error::Result;

enum Script {
    Cancel,
    Defaults,
    Overrides(Vec<(String, FormValue)>),
}

/// Scripted host for tests: answers every form the same way and records each
/// [`FormSpec`] it was asked to present.
pub struct ScriptedHost {
    script: Script,
    pub presented: Vec<FormSpec>,
}

impl ScriptedHost {
    /// Dismisses every form without submitting.
    pub fn cancelling() -> Self {
        Self {
            script: Script::Cancel,
            presented: Vec::new(),
        }
    }

    /// Submits every form with its seeded defaults untouched.
    pub fn submitting_defaults() -> Self {
        Self {
            script: Script::Defaults,
            presented: Vec::new(),
        }
    }

    /// Submits the seeded defaults with the given fields replaced.
    pub fn submitting(overrides: Vec<(&str, FormValue)>) -> Self {
        Self {
            script: Script::Overrides(
                overrides
                    .into_iter()
                    .map(|(key, value)| (key.to_string(), value))
                    .collect(),
            ),
            presented: Vec::new(),
        }
    }

    /// The last form this host was asked to present.
    pub fn last_form(&self) -> &FormSpec {
        self.presented.last().expect("no form was presented")
    }
}

impl FormHost for ScriptedHost {
    fn present(&mut self, form: &FormSpec) -> Result<Option<FormValues>> {
        self.presented.push(form.clone());

        let values = match &self.script {
            Script::Cancel => return Ok(None),
            Script::Defaults => form.default_values(),
            Script::Overrides(overrides) => {
                let mut values = form.default_values();
                for (key, value) in overrides {
                    values.set(key, value.clone());
                }
                values
            }
        };

        Ok(Some(values))
    }
}
