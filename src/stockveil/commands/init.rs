use crate::commands::{CmdMessage, CmdResult, StorePaths};
use crate::error::Result;
use crate::model::Scope;
use crate::settings::VisibilitySettings;
use std::fs;

pub fn run(paths: &StorePaths, scope: Scope) -> Result<CmdResult> {
    let dir = paths.scope_dir(scope)?;
    fs::create_dir_all(&dir)?;

    // Write defaults only if no record exists yet; init must not clobber a
    // configured site.
    if !dir.join("settings.json").exists() {
        VisibilitySettings::default().save(&dir)?;
    }

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Initialized stockveil settings at {}",
        dir.display()
    )));
    Ok(result)
}
