use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use fs_err as fs;
use serde::Serialize;
use serde_json::to_string_pretty;
use uuid::Uuid;

use crate::wire::GenerateContentRequest;

/// One invocation's generation transaction.
#[derive(Debug, Clone, Serialize)]
pub struct Tx {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
}

impl Tx {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
        }
    }
}

pub struct SavedPaths {
    pub dir: PathBuf,
    pub prompt: PathBuf,
    pub request: Option<PathBuf>,
    pub response: Option<PathBuf>,
}

fn tx_dir(root: &Path, tx: &Tx) -> PathBuf {
    root.join("tx").join(tx.id.to_string())
}

/// Persist one generation stage's artifacts. The compiled prompt and the tx
/// metadata are always written; request/response are gated by their flags.
pub fn save_stage(
    root: &Path,
    tx: &Tx,
    prompt: &str,
    request: Option<&GenerateContentRequest>,
    response: Option<&str>,
    save_request: bool,
    save_response: bool,
) -> anyhow::Result<SavedPaths> {
    let dir = tx_dir(root, tx);
    fs::create_dir_all(&dir)?;

    fs::write(dir.join("meta.json"), to_string_pretty(tx)?)?;
    let prompt_path = dir.join("prompt.txt");
    fs::write(&prompt_path, prompt)?;

    let mut request_path = None;
    if save_request {
        if let Some(request) = request {
            let path = dir.join("generate.request.json");
            fs::write(&path, to_string_pretty(request)?)?;
            request_path = Some(path);
        }
    }

    let mut response_path = None;
    if save_response {
        if let Some(response) = response {
            let path = dir.join("generate.response.txt");
            fs::write(&path, response)?;
            response_path = Some(path);
        }
    }

    Ok(SavedPaths {
        dir,
        prompt: prompt_path,
        request: request_path,
        response: response_path,
    })
}

pub fn print_planned_paths(root: &Path, tx: &Tx) {
    let dir = tx_dir(root, tx);
    println!("debug: planned artifacts directory: {}", dir.display());
}

pub fn print_saved_paths(stage: &str, saved: &SavedPaths) {
    println!("debug[{stage}]: artifacts directory: {}", saved.dir.display());
    println!("debug[{stage}]: prompt saved at: {}", saved.prompt.display());
    if let Some(path) = &saved.request {
        println!("debug[{stage}]: request saved at: {}", path.display());
    } else {
        println!("debug[{stage}]: request not saved (flag off)");
    }
    if let Some(path) = &saved.response {
        println!("debug[{stage}]: response saved at: {}", path.display());
    } else {
        println!("debug[{stage}]: response not saved (flag off)");
    }
}
