// modseek: Modrinth search and download client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::time::Duration;

use super::{DEFAULT_USER_AGENT, ProgressDisplay, TerminalProgress, build_client};
use crate::api::DownloadProgress;

#[test]
fn test_default_user_agent() {
    assert!(DEFAULT_USER_AGENT.starts_with("modseek/"));
}

#[test]
fn test_build_client() {
    assert!(build_client(None, None).is_ok());
    assert!(build_client(Some("tester/1.0"), Some(Duration::from_secs(3))).is_ok());
}

#[test]
fn test_terminal_progress_known_length() {
    let progress = TerminalProgress::new(ProgressDisplay::Silent);
    progress.set_max(Some("1000"));
    progress.update(600);
    progress.update(1000);
    assert_eq!(progress.length(), Some(1000));
    assert_eq!(progress.position(), 1000);
}

#[test]
fn test_terminal_progress_unknown_length() {
    let progress = TerminalProgress::new(ProgressDisplay::Silent);
    progress.set_max(Some("not a number"));
    progress.update(42);
    assert_eq!(progress.length(), None);
    assert_eq!(progress.position(), 42);
}
