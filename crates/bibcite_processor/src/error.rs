/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use thiserror::Error;

/// Errors from loading reference files and choosing styles or formats.
#[derive(Debug, Error)]
pub enum ProcessorError {
    #[error("failed to parse {0}: {1}")]
    ParseError(String, String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unknown citation style: {0}")]
    UnknownStyle(String),

    #[error("unknown output format: {0}")]
    UnknownFormat(String),
}
