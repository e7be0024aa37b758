// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Graphos-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Graphos and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::Canvas;

/// Shortens `text` to at most `max_len` chars, ending in `…` when anything was cut.
pub(crate) fn truncate_with_ellipsis(text: &str, max_len: usize) -> String {
    if max_len == 0 {
        return String::new();
    }

    if text_len(text) <= max_len {
        return text.to_owned();
    }

    let mut out: String = text.chars().take(max_len - 1).collect();
    out.push('…');
    out
}

pub(crate) fn text_len(text: &str) -> usize {
    text.chars().count()
}

/// Canvas rows with trailing blanks and trailing empty rows removed.
pub(crate) fn canvas_to_string_trimmed(canvas: &Canvas) -> String {
    let mut lines = canvas
        .lines()
        .into_iter()
        .map(|line| line.trim_end_matches(' ').to_owned())
        .collect::<Vec<_>>();

    while matches!(lines.last(), Some(line) if line.is_empty()) {
        lines.pop();
    }

    lines.join("\n")
}
