use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::ConfigStore;

pub fn run<S: ConfigStore>(store: &S) -> Result<CmdResult> {
    let config = store.load()?;
    Ok(CmdResult::default().with_listed_filters(config.object_filters))
}
