// ABOUTME: Server version gate for version-dependent operations
// ABOUTME: Compares declared minimum versions against the negotiated server version

//! Version gating.
//!
//! Operations, properties and whole object types can declare a minimum
//! server version. When the owning handle is stored, the declared version is
//! compared against the version negotiated at connect time; an older server
//! fails the call with a runtime error naming both versions. Unstored
//! handles skip the check, since no server has been adopted yet.

use semver::Version;

use crate::error::{AcpError, Result};

/// What the gated item is, used to build the error message.
#[derive(Debug, Clone, Copy)]
pub(crate) enum GateSubject<'a> {
    /// A method, e.g. `"refresh"`
    Method(&'a str),
    /// A readable property, e.g. `"thickness"`
    PropertyRead(&'a str),
    /// A writable property, e.g. `"thickness"`
    PropertyWrite(&'a str),
    /// An object type, e.g. `"CutoffSelectionRule"`
    ObjectType(&'a str),
}

/// Parse a declared minimum version. Declarations are compile-time strings,
/// so a parse failure is a programming error surfaced as a runtime error.
pub(crate) fn parse_required(version: &str) -> Result<Version> {
    Version::parse(version).map_err(|err| {
        AcpError::runtime(format!(
            "Invalid minimum version declaration '{version}': {err}"
        ))
    })
}

/// Check a declared minimum version against the server version.
///
/// `server_version` is `None` for unstored handles, in which case the check
/// is skipped. `required` is `None` when the item carries no gate.
pub(crate) fn check_supported_since(
    required: Option<&str>,
    server_version: Option<&Version>,
    subject: GateSubject<'_>,
) -> Result<()> {
    let (Some(required), Some(server_version)) = (required, server_version) else {
        return Ok(());
    };
    let required_version = parse_required(required)?;
    if *server_version < required_version {
        let message = match subject {
            GateSubject::Method(name) => format!(
                "The '{name}' method is only supported since version {required_version} of the \
                 ACP gRPC server. The current server version is {server_version}."
            ),
            GateSubject::PropertyRead(name) => format!(
                "The property '{name}' is only readable since version {required_version} of the \
                 ACP gRPC server. The current server version is {server_version}."
            ),
            GateSubject::PropertyWrite(name) => format!(
                "The property '{name}' is only editable since version {required_version} of the \
                 ACP gRPC server. The current server version is {server_version}."
            ),
            GateSubject::ObjectType(name) => format!(
                "The '{name}' object is only supported since version {required_version} of the \
                 ACP gRPC server. The current server version is {server_version}."
            ),
        };
        return Err(AcpError::runtime(message));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    #[test]
    fn test_no_gate_passes() {
        check_supported_since(None, Some(&v("1.0.0")), GateSubject::Method("m")).unwrap();
    }

    #[test]
    fn test_unstored_skips_check() {
        check_supported_since(Some("9.0.0"), None, GateSubject::Method("m")).unwrap();
    }

    #[test]
    fn test_older_server_fails_with_both_versions() {
        let err = check_supported_since(
            Some("1.2.0"),
            Some(&v("1.1.0")),
            GateSubject::PropertyWrite("origin"),
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Runtime);
        let msg = err.to_string();
        assert!(msg.contains("origin"));
        assert!(msg.contains("1.2.0"));
        assert!(msg.contains("1.1.0"));
        assert!(msg.contains("editable"));
    }

    #[test]
    fn test_equal_and_newer_server_pass() {
        check_supported_since(Some("1.2.0"), Some(&v("1.2.0")), GateSubject::Method("m")).unwrap();
        check_supported_since(Some("1.2.0"), Some(&v("1.3.0")), GateSubject::Method("m")).unwrap();
    }

    #[test]
    fn test_object_type_message() {
        let err = check_supported_since(
            Some("1.3.0"),
            Some(&v("1.0.0")),
            GateSubject::ObjectType("SolidModel"),
        )
        .unwrap_err();
        assert!(err.to_string().contains("'SolidModel' object"));
    }
}
