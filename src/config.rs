use crate::error::{NeighborFitError, Result};
use crate::types::config::NeighborFitConfig;
use std::fmt;
use std::path::{Path, PathBuf};
use toml::{Table, Value};

pub const DEFAULT_CONFIG_FILE: &str = "neighborfit.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".neighborfit/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/neighborfit/config.toml";

/// Where a configuration file sits in the override order, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layer {
    Global,
    Project,
    Local,
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Layer::Global => "global",
            Layer::Project => "project",
            Layer::Local => "local",
        })
    }
}

/// Loads the user's settings: the global file under `$HOME`, then
/// `neighborfit.toml` in `root`, then the local override.
///
/// Each layer is optional. Returns `None` only when none of them exists.
pub fn load_config(root: &Path) -> Result<Option<NeighborFitConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<Option<NeighborFitConfig>> {
    let project = root.join(DEFAULT_CONFIG_FILE);
    let local = root.join(DEFAULT_LOCAL_FILE);
    let layers = [
        (Layer::Global, global_path),
        (Layer::Project, Some(project.as_path())),
        (Layer::Local, Some(local.as_path())),
    ];

    let mut settings: Option<Table> = None;
    for (layer, path) in layers {
        let Some(path) = path.filter(|path| path.is_file()) else {
            tracing::debug!(%layer, "config layer absent");
            continue;
        };
        tracing::debug!(%layer, path = %path.display(), "applying config layer");
        let table = read_layer(path)?;
        overlay(settings.get_or_insert_with(Table::new), table);
    }

    let Some(settings) = settings else {
        return Ok(None);
    };
    let cfg: NeighborFitConfig = Value::Table(settings).try_into()?;
    cfg.validate()?;
    Ok(Some(cfg))
}

fn read_layer(path: &Path) -> Result<Table> {
    let content = std::fs::read_to_string(path)?;
    content
        .parse::<Table>()
        .map_err(|e| NeighborFitError::ConfigParse(format!("{}: {}", path.display(), e)))
}

/// Applies `layer` on top of `base`. Nested tables merge key by key; any
/// other value replaces what was there.
fn overlay(base: &mut Table, layer: Table) {
    for (key, incoming) in layer {
        let incoming = match (base.get_mut(&key), incoming) {
            (Some(Value::Table(existing)), Value::Table(nested)) => {
                overlay(existing, nested);
                continue;
            }
            (_, other) => other,
        };
        base.insert(key, incoming);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::dimension::Dimension;
    use std::fs;
    use tempfile::TempDir;

    fn write_global(dir: &TempDir, body: &str) -> PathBuf {
        let path = dir.path().join("config.toml");
        fs::write(&path, body).expect("global config should write");
        path
    }

    #[test]
    fn no_layers_means_no_config() {
        let root = TempDir::new().expect("temp dir should be created");
        let home = TempDir::new().expect("home temp dir should be created");
        let missing = home.path().join("config.toml");

        let cfg =
            load_config_with_global(root.path(), Some(&missing)).expect("load should not fail");
        assert!(cfg.is_none());
    }

    #[test]
    fn global_layer_applies_without_project_file() {
        let root = TempDir::new().expect("root temp dir should be created");
        let home = TempDir::new().expect("home temp dir should be created");
        let global = write_global(&home, "[survey.defaults]\nsafety = 10\n");

        let cfg = load_config_with_global(root.path(), Some(&global))
            .expect("load should succeed")
            .expect("global config should be picked up");
        let defaults = cfg.survey_defaults().expect("defaults should resolve");
        assert_eq!(defaults.weight(Dimension::Safety).get(), 10);
        assert_eq!(defaults.weight(Dimension::Commute).get(), 5);
    }

    #[test]
    fn local_override_applies_without_project_file() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::create_dir_all(root.path().join(".neighborfit")).expect("local dir should create");
        fs::write(
            root.path().join(DEFAULT_LOCAL_FILE),
            "[report]\nformat = \"json\"\n",
        )
        .expect("local override should write");

        let cfg = load_config_with_global(root.path(), None)
            .expect("load should succeed")
            .expect("local config should be picked up");
        assert_eq!(cfg.report_format(), Some("json"));
    }

    #[test]
    fn layers_override_in_global_project_local_order() {
        let root = TempDir::new().expect("root temp dir should be created");
        let home = TempDir::new().expect("home temp dir should be created");
        let global = write_global(
            &home,
            r#"
[survey.defaults]
safety = 10
outdoors = 3

[report]
format = "json"
"#,
        );

        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            "[survey.defaults]\nsafety = 8\n",
        )
        .expect("project config should write");

        fs::create_dir_all(root.path().join(".neighborfit")).expect("local dir should create");
        fs::write(
            root.path().join(DEFAULT_LOCAL_FILE),
            "[report]\nformat = \"md\"\n",
        )
        .expect("local override should write");

        let cfg = load_config_with_global(root.path(), Some(&global))
            .expect("load should succeed")
            .expect("merged config should exist");

        let defaults = cfg.survey_defaults().expect("defaults should resolve");
        assert_eq!(defaults.weight(Dimension::Safety).get(), 8);
        assert_eq!(defaults.weight(Dimension::Outdoors).get(), 3);
        assert_eq!(cfg.report_format(), Some("md"));
    }

    #[test]
    fn out_of_range_default_is_rejected() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            "[survey.defaults]\nsafety = 42\n",
        )
        .expect("project config should write");

        let err = load_config_with_global(root.path(), None).expect_err("load should fail");
        assert!(matches!(err, NeighborFitError::ConfigParse(_)));
    }

    #[test]
    fn malformed_layer_error_names_the_file() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(root.path().join(DEFAULT_CONFIG_FILE), "[survey\n")
            .expect("project config should write");

        let err = load_config_with_global(root.path(), None).expect_err("load should fail");
        assert!(err.to_string().contains(DEFAULT_CONFIG_FILE));
    }

    #[test]
    fn mistyped_setting_surfaces_as_toml_error() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            "[report]\nformat = 3\n",
        )
        .expect("project config should write");

        let err = load_config_with_global(root.path(), None).expect_err("load should fail");
        assert!(matches!(err, NeighborFitError::Toml(_)));
        assert!(err.is_invalid_input());
    }
}
