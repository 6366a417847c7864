// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pinwall-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pinwall and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::sync::OnceLock;

use regex::Regex;

const FALLBACK_STEM: &str = "wall";

fn whitespace_runs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("static whitespace regex"))
}

fn reserved_chars() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"[<>:"/\\|?*\x00-\x1f\x7f]"#).expect("static reserved regex"))
}

/// File name for a wall export: whitespace runs become `-`, reserved characters are
/// dropped, and `.json` is appended.
pub fn export_file_name(wall_name: &str) -> String {
    let dashed = whitespace_runs().replace_all(wall_name.trim(), "-");
    let cleaned = reserved_chars().replace_all(&dashed, "");
    let stem = cleaned.trim_matches(|ch| ch == '.' || ch == '-');
    if stem.is_empty() {
        format!("{FALLBACK_STEM}.json")
    } else {
        format!("{stem}.json")
    }
}

#[cfg(test)]
mod tests {
    use super::export_file_name;

    #[test]
    fn whitespace_becomes_dashes() {
        assert_eq!(export_file_name("My   Wall"), "My-Wall.json");
        assert_eq!(export_file_name("Q3 plan\tdraft"), "Q3-plan-draft.json");
    }

    #[test]
    fn reserved_characters_are_removed() {
        assert_eq!(export_file_name("../etc/passwd"), "etcpasswd.json");
        assert_eq!(export_file_name("a:b*c?"), "abc.json");
    }

    #[test]
    fn empty_names_fall_back() {
        assert_eq!(export_file_name("   "), "wall.json");
        assert_eq!(export_file_name("///"), "wall.json");
    }
}
