// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Windows event-log store driven through PowerShell

use evlog_core::store::{ChannelInfo, EventStore, RecordedEntry, Severity, StoreError};
use serde::Deserialize;
use std::process::Command;

/// Real host store, running one PowerShell command per operation.
///
/// Registration and resolution go through the `System.Diagnostics.EventLog`
/// statics; writes and enumeration use the `*-EventLog` cmdlets. Defaults
/// to `powershell.exe`; see [`PowerShellStore::with_program`] for hosts
/// where only `pwsh` is on the path.
#[derive(Clone, Debug)]
pub struct PowerShellStore {
    program: String,
}

impl Default for PowerShellStore {
    fn default() -> Self {
        Self {
            program: "powershell.exe".to_string(),
        }
    }
}

impl PowerShellStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different PowerShell executable, e.g. `pwsh`.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn run(&self, script: &str) -> Result<String, StoreError> {
        let output = Command::new(&self.program)
            .arg("-NoProfile")
            .arg("-NonInteractive")
            .arg("-Command")
            .arg(script)
            .output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(classify_failure(&stderr));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl EventStore for PowerShellStore {
    fn source_exists(&self, source: &str) -> Result<bool, StoreError> {
        let stdout = self.run(&format!(
            "[System.Diagnostics.EventLog]::SourceExists('{}')",
            escape_single_quoted(source)
        ))?;
        Ok(stdout.trim().eq_ignore_ascii_case("true"))
    }

    fn create_source(&self, source: &str, channel: &str) -> Result<(), StoreError> {
        self.run(&format!(
            "New-EventLog -LogName '{}' -Source '{}'",
            escape_single_quoted(channel),
            escape_single_quoted(source)
        ))?;
        Ok(())
    }

    fn write_entry(
        &self,
        source: &str,
        message: &str,
        severity: Severity,
    ) -> Result<(), StoreError> {
        self.run(&write_script(source, message, severity))?;
        Ok(())
    }

    fn delete_source(&self, source: &str) -> Result<(), StoreError> {
        self.run(&format!(
            "Remove-EventLog -Source '{}'",
            escape_single_quoted(source)
        ))?;
        Ok(())
    }

    fn channels(&self) -> Result<Vec<ChannelInfo>, StoreError> {
        let stdout =
            self.run("Get-EventLog -List | ForEach-Object { $_.Log } | ConvertTo-Json")?;
        let names: Vec<String> = parse_json_list(&stdout)?;
        Ok(names
            .into_iter()
            .map(|name| ChannelInfo { name })
            .collect())
    }

    fn entries(&self, channel: &str) -> Result<Vec<RecordedEntry>, StoreError> {
        // Get-EventLog reports newest first; Index ascending restores
        // write order.
        let stdout = self.run(&format!(
            "Get-EventLog -LogName '{}' | Sort-Object Index | \
             Select-Object Message, EntryType | ConvertTo-Json",
            escape_single_quoted(channel)
        ))?;
        let raw: Vec<RawEntry> = parse_json_list(&stdout)?;
        raw.into_iter().map(RawEntry::into_entry).collect()
    }

    fn channel_for_source(&self, source: &str) -> Result<Option<String>, StoreError> {
        let stdout = self.run(&format!(
            "[System.Diagnostics.EventLog]::LogNameFromSourceName('{}', '.')",
            escape_single_quoted(source)
        ))?;
        let name = stdout.trim();
        if name.is_empty() {
            Ok(None)
        } else {
            Ok(Some(name.to_string()))
        }
    }
}

/// Entry shape produced by `Select-Object Message, EntryType`; the
/// entry-type enum serializes as its numeric code.
#[derive(Debug, Deserialize)]
struct RawEntry {
    #[serde(rename = "Message")]
    message: String,
    #[serde(rename = "EntryType")]
    entry_type: u32,
}

impl RawEntry {
    fn into_entry(self) -> Result<RecordedEntry, StoreError> {
        let severity = Severity::from_entry_code(self.entry_type).ok_or_else(|| {
            StoreError::MalformedOutput(format!("unknown entry-type code: {}", self.entry_type))
        })?;
        Ok(RecordedEntry {
            message: self.message,
            severity,
        })
    }
}

fn write_script(source: &str, message: &str, severity: Severity) -> String {
    let source = escape_single_quoted(source);
    format!(
        "$channel = [System.Diagnostics.EventLog]::LogNameFromSourceName('{source}', '.'); \
         if (-not $channel) {{ throw 'source not registered: {source}' }}; \
         Write-EventLog -LogName $channel -Source '{source}' -EventId 0 \
         -EntryType {} -Message '{}'",
        severity.entry_type_name(),
        escape_single_quoted(message)
    )
}

fn classify_failure(stderr: &str) -> StoreError {
    if stderr.contains("Access is denied")
        || stderr.contains("UnauthorizedAccessException")
        || stderr.contains("SecurityException")
    {
        StoreError::AccessDenied(stderr.trim().to_string())
    } else if stderr.contains("does not exist") {
        StoreError::ChannelNotFound(stderr.trim().to_string())
    } else {
        StoreError::CommandFailed(stderr.trim().to_string())
    }
}

/// Escape for a single-quoted PowerShell string
fn escape_single_quoted(s: &str) -> String {
    s.replace('\'', "''")
}

/// PowerShell collapses a one-element pipeline to a bare value, so the
/// JSON may be an array, a single item, or nothing at all.
fn parse_json_list<T: serde::de::DeserializeOwned>(raw: &str) -> Result<Vec<T>, StoreError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(Vec::new());
    }

    let value: serde_json::Value =
        serde_json::from_str(raw).map_err(|e| StoreError::MalformedOutput(e.to_string()))?;
    let items = match value {
        serde_json::Value::Array(items) => items,
        single => vec![single],
    };

    items
        .into_iter()
        .map(|item| {
            serde_json::from_value(item).map_err(|e| StoreError::MalformedOutput(e.to_string()))
        })
        .collect()
}

#[cfg(test)]
#[path = "powershell_tests.rs"]
mod tests;
