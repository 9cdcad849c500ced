// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("no transaction API configured (run `moneytrend config set-api <url>`)")]
    NotConfigured,
    #[error("invalid transaction API url '{0}'")]
    BadUrl(String),
    #[error("transaction request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("could not read transactions from {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed transaction payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Any failure while producing the report artifact. Shown to the user as a
/// single generic message.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Report export failed")]
    UnknownFormat(String),
    #[error("Report export failed")]
    Io(#[from] std::io::Error),
    #[error("Report export failed")]
    Csv(#[from] csv::Error),
    #[error("Report export failed")]
    Json(#[from] serde_json::Error),
}
