use crate::commands::{CmdMessage, CmdResult, StorePaths};
use crate::error::Result;
use crate::model::Scope;
use crate::settings::VisibilitySettings;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &StorePaths, scope: Scope, action: ConfigAction) -> Result<CmdResult> {
    let dir = paths.scope_dir(scope)?;
    match action {
        ConfigAction::ShowAll => {
            let settings = VisibilitySettings::load(&dir)?;
            Ok(CmdResult::default().with_settings(settings))
        }
        ConfigAction::ShowKey(key) => {
            let settings = VisibilitySettings::load(&dir)?;
            let mut result = CmdResult::default();
            match settings.get(&key) {
                Some(val) => {
                    result.add_message(CmdMessage::info(val));
                    Ok(result)
                }
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown setting: {}", key)));
                    Ok(result)
                }
            }
        }
        ConfigAction::Set(key, value) => {
            let mut settings = VisibilitySettings::load(&dir)?;
            if let Err(e) = settings.set(&key, &value) {
                let mut res = CmdResult::default();
                res.add_message(CmdMessage::error(e));
                return Ok(res);
            }
            settings.save(&dir)?;
            let mut result = CmdResult::default().with_settings(settings.clone());
            let display_val = settings.get(&key).unwrap_or(value);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result)
        }
    }
}
