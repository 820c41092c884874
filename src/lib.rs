use anyhow::{Result, anyhow};
use ratatui::crossterm::{
    ExecutableCommand,
    cursor::MoveToColumn,
    style::Print,
    terminal::{Clear, ClearType},
};
use std::{
    io::Write,
    path::{Path, PathBuf},
    time::Duration,
};

pub mod app_core;
pub mod catalog;
pub mod config;
pub mod domain;
pub mod key_handler;
pub mod logging;
pub mod player;
pub mod tui;
pub mod ui_state;

pub use catalog::Catalog;
pub use config::Settings;
pub use player::PlaybackController;

// ~30fps
pub const REFRESH_RATE: Duration = Duration::from_millis(33);

pub enum DurationStyle {
    Clean,
    Compact,
}

pub fn get_readable_duration(duration: Duration, style: DurationStyle) -> String {
    let mut secs = duration.as_secs();
    let mins = secs / 60;
    secs %= 60;

    match style {
        DurationStyle::Clean => match mins {
            0 => format!("{secs:02}s"),
            _ => format!("{mins}m {secs:02}s"),
        },
        DurationStyle::Compact => format!("{mins}:{secs:02}"),
    }
}

pub(crate) fn truncate_at_last_space(s: &str, limit: usize) -> String {
    if s.chars().count() <= limit {
        return s.to_string();
    }

    let byte_limit = s
        .char_indices()
        .map(|(i, _)| i)
        .nth(limit)
        .unwrap_or(s.len());

    let cut = match s[..byte_limit].rfind(' ') {
        Some(last_space) => last_space,
        None => s[..byte_limit]
            .char_indices()
            .map(|(i, _)| i)
            .last()
            .unwrap_or(0),
    };

    let mut truncated = s[..cut].to_string();
    truncated.push('…');
    truncated
}

pub fn overwrite_line(message: &str) -> Result<()> {
    let mut stdout = std::io::stdout();
    stdout
        .execute(MoveToColumn(0))?
        .execute(Clear(ClearType::CurrentLine))?
        .execute(Print(message))?;
    stdout.flush()?;
    Ok(())
}

pub fn expand_tilde<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    let path = path.as_ref();
    let path_str = path.to_string_lossy();

    if !path_str.starts_with('~') {
        return Ok(path.to_path_buf());
    }

    let home = dirs::home_dir().ok_or_else(|| anyhow!("Could not determine home directory!"))?;

    if path_str == "~" {
        return Ok(home);
    }

    if path_str.starts_with("~/") || path_str.starts_with("~\\") {
        return Ok(home.join(&path_str[2..]));
    }

    Err(anyhow!("Error reading path with tilde (~): {path_str}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readable_durations() {
        let d = Duration::from_secs(185);
        assert_eq!(get_readable_duration(d, DurationStyle::Compact), "3:05");
        assert_eq!(get_readable_duration(d, DurationStyle::Clean), "3m 05s");
        assert_eq!(
            get_readable_duration(Duration::from_secs(7), DurationStyle::Clean),
            "07s"
        );
    }

    #[test]
    fn truncation_prefers_word_boundaries() {
        assert_eq!(truncate_at_last_space("short", 10), "short");
        assert_eq!(truncate_at_last_space("Kochadaiyaan Theme", 15), "Kochadaiyaan…");
        assert_eq!(truncate_at_last_space("Kochadaiyaan", 5), "Koch…");
    }

    #[test]
    fn tilde_paths_expand_to_home() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        assert_eq!(
            expand_tilde("~/music/catalog.toml").unwrap(),
            home.join("music/catalog.toml")
        );
        assert_eq!(
            expand_tilde("/abs/catalog.toml").unwrap(),
            PathBuf::from("/abs/catalog.toml")
        );
        assert!(expand_tilde("~other/catalog.toml").is_err());
    }
}
