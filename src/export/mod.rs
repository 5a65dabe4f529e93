//! Export of finished simulations.
//!
//! A [`TraceExport`] wraps a [`SimulationResult`] with enough metadata to
//! identify it later, and converts to JSON (for humans and web consumers) or
//! bincode (compact). State identifiers serialize as their labels.

use crate::core::{Automaton, Context, State};
use crate::simulate::SimulationResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::ExportError;

/// Version identifier for export format
pub const EXPORT_VERSION: u32 = 1;

/// Serializable snapshot of one simulation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TraceExport<S: State, C: Context> {
    /// Export format version
    pub version: u32,

    /// Unique export identifier
    pub id: String,

    /// When the export was created
    pub exported_at: DateTime<Utc>,

    /// Identifier of the automaton that produced the result
    pub automaton: String,

    /// Number of characters in the input, consumed or not
    pub input_length: usize,

    /// The simulation itself
    pub result: SimulationResult<S, C>,
}

impl<S: State, C: Context> TraceExport<S, C> {
    /// Snapshot `result`, which `automaton` produced from `input`.
    pub fn capture<A>(automaton: &A, input: &str, result: SimulationResult<S, C>) -> Self
    where
        A: Automaton<State = S, Context = C>,
    {
        Self {
            version: EXPORT_VERSION,
            id: Uuid::new_v4().to_string(),
            exported_at: Utc::now(),
            automaton: automaton.id().to_string(),
            input_length: input.chars().count(),
            result,
        }
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ExportError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ExportError::SerializationFailed(e.to_string()))
    }

    /// Deserialize from JSON, rejecting unknown versions.
    pub fn from_json(json: &str) -> Result<Self, ExportError> {
        let export: Self = serde_json::from_str(json)
            .map_err(|e| ExportError::DeserializationFailed(e.to_string()))?;
        export.check_version()
    }

    /// Serialize to bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ExportError> {
        bincode::serialize(self).map_err(|e| ExportError::SerializationFailed(e.to_string()))
    }

    /// Deserialize from bincode, rejecting unknown versions.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ExportError> {
        let export: Self = bincode::deserialize(bytes)
            .map_err(|e| ExportError::DeserializationFailed(e.to_string()))?;
        export.check_version()
    }

    fn check_version(self) -> Result<Self, ExportError> {
        if self.version != EXPORT_VERSION {
            return Err(ExportError::UnsupportedVersion {
                found: self.version,
                supported: EXPORT_VERSION,
            });
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::email::{EmailAutomaton, EmailContext, EmailState};
    use crate::password::{PasswordAutomaton, PasswordContext, PasswordState};

    #[test]
    fn capture_records_metadata() {
        let email = EmailAutomaton::default();
        let input = "a@@b.co";
        let export = TraceExport::capture(&email, input, email.simulate(input));

        assert_eq!(export.version, EXPORT_VERSION);
        assert_eq!(export.automaton, "email");
        assert_eq!(export.input_length, 7);
        assert_eq!(export.result.steps.len(), 3);
        assert!(Uuid::parse_str(&export.id).is_ok());
    }

    #[test]
    fn json_round_trip_preserves_result() {
        let password = PasswordAutomaton::default();
        let input = "Abcdefg1";
        let export = TraceExport::capture(&password, input, password.simulate(input));

        let json = export.to_json().unwrap();
        assert!(json.contains("\"111\""));

        let back: TraceExport<PasswordState, PasswordContext> =
            TraceExport::from_json(&json).unwrap();
        assert_eq!(back, export);
    }

    #[test]
    fn bytes_round_trip_preserves_result() {
        let email = EmailAutomaton::default();
        let input = "user.name+tag@sub.example.com";
        let export = TraceExport::capture(&email, input, email.simulate(input));

        let bytes = export.to_bytes().unwrap();
        let back: TraceExport<EmailState, EmailContext> = TraceExport::from_bytes(&bytes).unwrap();
        assert_eq!(back.result, export.result);
        assert_eq!(back.id, export.id);
    }

    #[test]
    fn unknown_version_is_rejected() {
        let email = EmailAutomaton::default();
        let mut export = TraceExport::capture(&email, "a@b.co", email.simulate("a@b.co"));
        export.version = EXPORT_VERSION + 1;

        let json = export.to_json().unwrap();
        let err = TraceExport::<EmailState, EmailContext>::from_json(&json).unwrap_err();
        assert!(matches!(
            err,
            ExportError::UnsupportedVersion { found: 2, supported: 1 }
        ));
    }

    #[test]
    fn garbage_is_a_deserialization_error() {
        let err = TraceExport::<EmailState, EmailContext>::from_bytes(&[1, 2, 3]).unwrap_err();
        assert!(matches!(err, ExportError::DeserializationFailed(_)));
    }
}
