use crate::commands::{CmdMessage, CmdResult};
use crate::error::{FiltersError, Result};
use crate::store::ConfigStore;

pub fn run<S: ConfigStore>(store: &mut S, name: &str) -> Result<CmdResult> {
    let mut config = store.load()?;

    let position = config
        .object_filters
        .iter()
        .position(|filter| filter.name == name)
        .ok_or_else(|| FiltersError::FilterNotFound(name.to_string()))?;

    let removed = config.object_filters.remove(position);
    store.save(&config)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Filter deleted: {}",
        removed.name
    )));
    result.affected_filters.push(removed);
    Ok(result)
}
