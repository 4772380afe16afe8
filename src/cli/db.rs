use std::process::ExitStatus;

use anyhow::bail;
use tokio::process::Command;

use crate::settings::Config;

fn check(status: ExitStatus) -> anyhow::Result<()> {
    if !status.success() {
        bail!("sqlx exited with {}", status);
    }
    Ok(())
}

pub async fn db_generate(migration_name: &str) -> anyhow::Result<()> {
    let status = Command::new("sqlx")
        .arg("migrate")
        .arg("add")
        .arg(migration_name)
        .arg("-r")
        .status()
        .await?;
    check(status)
}

pub async fn db_list(config: &Config) -> anyhow::Result<()> {
    let status = Command::new("sqlx")
        .arg("migrate")
        .arg("info")
        .arg("-D")
        .arg(&config.database_url)
        .status()
        .await?;
    check(status)
}

pub async fn db_migrate(config: &Config) -> anyhow::Result<()> {
    let status = Command::new("sqlx")
        .arg("migrate")
        .arg("run")
        .arg("-D")
        .arg(&config.database_url)
        .status()
        .await?;
    check(status)
}

pub async fn db_revert(config: &Config) -> anyhow::Result<()> {
    let status = Command::new("sqlx")
        .arg("migrate")
        .arg("revert")
        .arg("-D")
        .arg(&config.database_url)
        .status()
        .await?;
    check(status)
}
