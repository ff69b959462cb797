// ABOUTME: Get/compare/put engine behind every property accessor
// ABOUTME: Refreshes stored handles before reads and republishes on real changes

//! Property synchronization engine.
//!
//! Every property accessor expands to a call into this module. Reads on
//! stored handles first refresh the local state via `Get`; writes refresh,
//! compare the new wire value against the current one, and only issue a
//! `Put` when the value actually changed. Unstored handles read and write
//! locally. Read and write gates are checked before any round trip.

use crate::error::{AcpError, Result};
use crate::tree::base::{self, ObjectState, TreeObject};
use crate::tree::linked::Linked;
use crate::version::{check_supported_since, GateSubject};

/// Read a property value.
pub(crate) async fn get_property<T, V, F>(
    obj: &T,
    name: &'static str,
    readable_since: Option<&'static str>,
    read: F,
) -> Result<V>
where
    T: TreeObject,
    F: FnOnce(&ObjectState<T::Properties>) -> Result<V>,
{
    check_supported_since(
        readable_since,
        base::server_version(obj).as_ref(),
        GateSubject::PropertyRead(name),
    )?;
    base::get_if_stored(obj).await?;
    let state = base::lock_state(obj);
    read(&state)
}

/// Write a property value.
///
/// `read_wire` extracts the current wire value, `write_wire` installs the
/// new one; the `Put` is skipped when both compare equal.
pub(crate) async fn set_property<T, W, FR, FW>(
    obj: &T,
    name: &'static str,
    writable_since: Option<&'static str>,
    wire: W,
    read_wire: FR,
    write_wire: FW,
) -> Result<()>
where
    T: TreeObject,
    W: PartialEq,
    FR: FnOnce(&ObjectState<T::Properties>) -> W,
    FW: FnOnce(&mut ObjectState<T::Properties>, W),
{
    check_supported_since(
        writable_since,
        base::server_version(obj).as_ref(),
        GateSubject::PropertyWrite(name),
    )?;
    base::get_if_stored(obj).await?;
    let changed = {
        let mut state = base::lock_state(obj);
        if read_wire(&state) != wire {
            write_wire(&mut state, wire);
            true
        } else {
            false
        }
    };
    if changed {
        base::put_if_stored(obj).await?;
    }
    Ok(())
}

/// Resolve a link property into a typed handle. Empty paths read as `None`.
pub(crate) async fn get_linked<T, L, F>(
    obj: &T,
    name: &'static str,
    readable_since: Option<&'static str>,
    read: F,
) -> Result<Option<L>>
where
    T: TreeObject,
    L: Linked,
    F: FnOnce(&ObjectState<T::Properties>) -> String,
{
    check_supported_since(
        readable_since,
        base::server_version(obj).as_ref(),
        GateSubject::PropertyRead(name),
    )?;
    if !base::is_stored(obj) {
        return Err(AcpError::runtime(format!(
            "Cannot get linked object '{name}' from an unstored object."
        )));
    }
    base::get(obj).await?;
    let path = {
        let state = base::lock_state(obj);
        read(&state)
    };
    if path.is_empty() {
        return Ok(None);
    }
    let server = base::server_wrapper(obj)?;
    L::from_path(&path, &server).map(Some)
}

/// Write a link property. The target must be stored; `None` clears the
/// link.
pub(crate) async fn set_linked<T, L, FR, FW>(
    obj: &T,
    name: &'static str,
    writable_since: Option<&'static str>,
    value: Option<&L>,
    read_wire: FR,
    write_wire: FW,
) -> Result<()>
where
    T: TreeObject,
    L: Linked,
    FR: FnOnce(&ObjectState<T::Properties>) -> String,
    FW: FnOnce(&mut ObjectState<T::Properties>, String),
{
    let wire = match value {
        None => String::new(),
        Some(target) => {
            let path = target.path_value();
            if path.is_empty() {
                return Err(AcpError::invalid_argument(format!(
                    "Cannot set '{name}': cannot link to an unstored object."
                )));
            }
            path
        }
    };
    set_property(obj, name, writable_since, wire, read_wire, write_wire).await
}
