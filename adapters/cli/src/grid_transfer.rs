#![allow(clippy::missing_errors_doc)]

use std::{error::Error, fmt};

use base64::{engine::general_purpose::STANDARD_NO_PAD, Engine as _};
use colony_life_core::{Grid, GridError};
use serde::{Deserialize, Serialize};

const SNAPSHOT_DOMAIN: &str = "colony";
const SNAPSHOT_VERSION: &str = "v1";

/// Identifier prefix emitted before the encoded snapshot payload.
pub(crate) const SNAPSHOT_HEADER: &str = "colony:v1";
/// Delimiter used to separate the prefix, grid dimensions and payload.
const FIELD_DELIMITER: char = ':';

/// Single-line snapshot of a colony suitable for clipboard transfer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ColonySnapshot {
    /// Number of rows contained in the colony.
    pub rows: u32,
    /// Number of columns contained in the colony.
    pub cols: u32,
    /// Row-major cell ages composing the snapshot.
    pub cells: Vec<i32>,
}

impl ColonySnapshot {
    /// Captures the current state of the provided grid.
    pub(crate) fn from_grid(grid: &Grid) -> Self {
        Self {
            rows: grid.rows(),
            cols: grid.cols(),
            cells: grid.cells().to_vec(),
        }
    }

    /// Encodes the snapshot into a single-line string suitable for clipboard transfer.
    #[must_use]
    pub(crate) fn encode(&self) -> String {
        let payload = SerializableSnapshot {
            cells: self.cells.clone(),
        };
        let json = serde_json::to_vec(&payload).expect("colony snapshot serialization never fails");
        let encoded = STANDARD_NO_PAD.encode(json);
        format!("{SNAPSHOT_HEADER}:{}x{}:{encoded}", self.rows, self.cols)
    }

    /// Decodes a snapshot from the provided string representation.
    pub(crate) fn decode(value: &str) -> Result<Self, GridTransferError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(GridTransferError::EmptyPayload);
        }

        let mut parts = trimmed.split(FIELD_DELIMITER);
        let domain = parts.next().ok_or(GridTransferError::MissingPrefix)?;
        let version = parts.next().ok_or(GridTransferError::MissingVersion)?;
        let dimensions = parts.next().ok_or(GridTransferError::MissingDimensions)?;
        let payload = parts.next().ok_or(GridTransferError::MissingPayload)?;

        if domain != SNAPSHOT_DOMAIN {
            return Err(GridTransferError::InvalidPrefix(domain.to_owned()));
        }
        if version != SNAPSHOT_VERSION {
            return Err(GridTransferError::UnsupportedVersion(version.to_owned()));
        }

        let (rows, cols) = parse_dimensions(dimensions)?;
        let bytes = STANDARD_NO_PAD
            .decode(payload.as_bytes())
            .map_err(GridTransferError::InvalidEncoding)?;
        let decoded: SerializableSnapshot =
            serde_json::from_slice(&bytes).map_err(GridTransferError::InvalidPayload)?;

        Ok(Self {
            rows,
            cols,
            cells: decoded.cells,
        })
    }

    /// Validates the snapshot through the grid invariants and yields the grid.
    pub(crate) fn into_grid(self) -> Result<Grid, GridTransferError> {
        Grid::from_cells(self.rows, self.cols, self.cells).map_err(GridTransferError::InvalidGrid)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
struct SerializableSnapshot {
    cells: Vec<i32>,
}

/// Errors that can occur while decoding transfer strings.
#[derive(Debug)]
pub(crate) enum GridTransferError {
    /// The provided string was empty or contained only whitespace.
    EmptyPayload,
    /// The prefix segment was missing from the encoded snapshot.
    MissingPrefix,
    /// The encoded snapshot did not contain a version segment.
    MissingVersion,
    /// The encoded snapshot did not include grid dimensions.
    MissingDimensions,
    /// The encoded snapshot did not include the payload segment.
    MissingPayload,
    /// The encoded snapshot used an unexpected prefix segment.
    InvalidPrefix(String),
    /// The encoded snapshot used an unsupported version identifier.
    UnsupportedVersion(String),
    /// The grid dimensions could not be parsed from the encoded snapshot.
    InvalidDimensions(String),
    /// The base64 payload could not be decoded.
    InvalidEncoding(base64::DecodeError),
    /// The decoded payload could not be deserialised.
    InvalidPayload(serde_json::Error),
    /// The decoded cells violated the grid invariants.
    InvalidGrid(GridError),
}

impl fmt::Display for GridTransferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPayload => write!(f, "transfer snapshot is empty"),
            Self::MissingPrefix => write!(f, "transfer snapshot is missing its prefix"),
            Self::MissingVersion => write!(f, "transfer snapshot is missing its version"),
            Self::MissingDimensions => write!(f, "transfer snapshot is missing its dimensions"),
            Self::MissingPayload => write!(f, "transfer snapshot is missing its payload"),
            Self::InvalidPrefix(prefix) => write!(f, "unexpected snapshot prefix {prefix:?}"),
            Self::UnsupportedVersion(version) => {
                write!(f, "unsupported snapshot version {version:?}")
            }
            Self::InvalidDimensions(dimensions) => {
                write!(f, "could not parse snapshot dimensions {dimensions:?}")
            }
            Self::InvalidEncoding(source) => write!(f, "invalid snapshot encoding: {source}"),
            Self::InvalidPayload(source) => write!(f, "invalid snapshot payload: {source}"),
            Self::InvalidGrid(source) => write!(f, "snapshot violates grid invariants: {source}"),
        }
    }
}

impl Error for GridTransferError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidEncoding(source) => Some(source),
            Self::InvalidPayload(source) => Some(source),
            Self::InvalidGrid(source) => Some(source),
            _ => None,
        }
    }
}

fn parse_dimensions(value: &str) -> Result<(u32, u32), GridTransferError> {
    let invalid = || GridTransferError::InvalidDimensions(value.to_owned());
    let (rows, cols) = value.split_once('x').ok_or_else(invalid)?;
    let rows = rows.parse().map_err(|_| invalid())?;
    let cols = cols.parse().map_err(|_| invalid())?;
    Ok((rows, cols))
}
