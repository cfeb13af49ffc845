//! Secret environment listing command.

use std::path::Path;

use anyhow::Result;
use credfile_core::loader;

pub async fn handle_secrets_command(project_dir: &Path) -> Result<()> {
    match loader::read_secret_envs(project_dir).await? {
        Some(envs) => {
            let mut names: Vec<&String> = envs.keys().collect();
            names.sort();
            for name in names {
                println!("{}", name);
            }
        }
        None => println!("no secret environment values configured"),
    }

    Ok(())
}
