use crate::costs::BaseLedger;
use crate::progress::TechProgress;
use crate::ruleset::Ruleset;
use crate::types::AppResult;
use serde::Deserialize;
use std::{fs::File, path::Path};

pub fn load_ruleset(path: &Path) -> AppResult<Ruleset> {
    load_from_json(path)
}

pub fn load_progress(path: &Path) -> AppResult<TechProgress> {
    load_from_json(path)
}

pub fn load_ledger(path: &Path) -> AppResult<BaseLedger> {
    load_from_json(path)
}

fn load_from_json<T: for<'a> Deserialize<'a>>(path: &Path) -> AppResult<T> {
    let file = File::open(path)?;
    let data: T = serde_json::from_reader(file)?;
    Ok(data)
}
