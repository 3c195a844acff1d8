use super::{FieldKind, FormHost, FormSpec, FormValue, FormValues};
use crate::error::Result;
use console::style;
use std::io;

/// Interactive terminal host: one prompt per field, in declaration order.
///
/// Text fields are pre-filled with the field default and may be submitted
/// empty. Esc or Ctrl-C at any prompt dismisses the whole form.
#[derive(Debug, Default)]
pub struct PromptHost;

impl PromptHost {
    pub fn new() -> Self {
        Self
    }
}

fn dismissed(err: &io::Error) -> bool {
    err.kind() == io::ErrorKind::Interrupted
}

impl FormHost for PromptHost {
    fn present(&mut self, form: &FormSpec) -> Result<Option<FormValues>> {
        cliclack::intro(style(format!(" {} ", form.title)).on_cyan().black())?;

        let mut values = FormValues::new();
        for field in &form.fields {
            let answer = match &field.kind {
                FieldKind::Text { default } => cliclack::input(&field.label)
                    .placeholder(&field.help)
                    .default_input(default)
                    .required(false)
                    .interact::<String>()
                    .map(FormValue::Text),
                FieldKind::Checkbox { default } => cliclack::confirm(&field.label)
                    .initial_value(*default)
                    .interact()
                    .map(FormValue::Flag),
            };

            match answer {
                Ok(value) => values.set(&field.key, value),
                Err(e) if dismissed(&e) => {
                    cliclack::outro_cancel("No changes saved")?;
                    return Ok(None);
                }
                Err(e) => return Err(e.into()),
            }
        }

        cliclack::outro(&form.submit_label)?;
        Ok(Some(values))
    }
}
