use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use super::constants::CONFIG_PATH_ENV;
use super::types::ScannerConfig;
use super::util::{env_non_empty, non_empty, refresh_secs_or_default};

impl ScannerConfig {
    pub(super) fn apply_file_config(&mut self, explicit_path: Option<&Path>) -> Result<bool> {
        let Some(path) = resolve_config_path(explicit_path) else {
            return Ok(false);
        };

        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("failed reading config file {}", path.display()))?;
        let file_cfg: FileConfig = toml::from_str(&raw)
            .with_context(|| format!("failed parsing TOML config {}", path.display()))?;

        self.apply_file_scan(file_cfg.scan);
        self.apply_file_output(file_cfg.output);
        self.apply_file_tools(file_cfg.tools);

        tracing::debug!(path = %path.display(), "loaded scanner config file");
        Ok(true)
    }

    fn apply_file_scan(&mut self, scan: Option<FileScanConfig>) {
        let Some(scan) = scan else {
            return;
        };
        if let Some(v) = scan.refresh_interval_secs {
            self.refresh_interval_secs = refresh_secs_or_default(v);
        }
    }

    fn apply_file_output(&mut self, output: Option<FileOutputConfig>) {
        let Some(output) = output else {
            return;
        };
        if let Some(v) = output.pretty {
            self.pretty = v;
        }
    }

    fn apply_file_tools(&mut self, tools: Option<FileToolsConfig>) {
        let Some(tools) = tools else {
            return;
        };

        let slots = [
            (&mut self.tools.lsusb, tools.lsusb),
            (&mut self.tools.ip, tools.ip),
            (&mut self.tools.powershell, tools.powershell),
            (&mut self.tools.system_profiler, tools.system_profiler),
            (&mut self.tools.networksetup, tools.networksetup),
            (&mut self.tools.ifconfig, tools.ifconfig),
        ];
        for (slot, value) in slots {
            if let Some(v) = non_empty(value) {
                *slot = Some(v);
            }
        }
    }
}

fn resolve_config_path(explicit_path: Option<&Path>) -> Option<PathBuf> {
    explicit_path
        .map(Path::to_path_buf)
        .or_else(|| env_non_empty(CONFIG_PATH_ENV).map(PathBuf::from))
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    scan: Option<FileScanConfig>,
    #[serde(default)]
    output: Option<FileOutputConfig>,
    #[serde(default)]
    tools: Option<FileToolsConfig>,
}

#[derive(Debug, Deserialize)]
struct FileScanConfig {
    #[serde(default)]
    refresh_interval_secs: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct FileOutputConfig {
    #[serde(default)]
    pretty: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct FileToolsConfig {
    #[serde(default)]
    lsusb: Option<String>,
    #[serde(default)]
    ip: Option<String>,
    #[serde(default)]
    powershell: Option<String>,
    #[serde(default)]
    system_profiler: Option<String>,
    #[serde(default)]
    networksetup: Option<String>,
    #[serde(default)]
    ifconfig: Option<String>,
}
