use anyhow::Context;

use fl_config::FieldlineConfig;

use crate::context::find_project_root;

/// Load `.env` and the layered configuration.
///
/// Inside a Fieldline project (a directory tree with `.fieldline/`), the
/// project root's `.env` and `.fieldline/config.toml` are used even when run
/// from a subdirectory.
pub fn load_config() -> anyhow::Result<FieldlineConfig> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;

    let Some(root) = find_project_root(&cwd) else {
        dotenvy::dotenv().ok();
        return FieldlineConfig::load().map_err(anyhow::Error::from);
    };

    let env_path = root.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
    }

    FieldlineConfig::load_from(&root.join(".fieldline").join("config.toml"))
        .map_err(anyhow::Error::from)
}
