//! Process hardening, applied once before any input is looked at.
//!
//! On Linux the process gives up the ability to gain privileges (setuid,
//! file capabilities) and stops being dumpable, which also blocks ptrace
//! from unprivileged peers. Elsewhere this is a no-op.

use crate::error::Result;

#[cfg(target_os = "linux")]
pub fn restrict() -> Result<()> {
    use crate::error::PadError;

    // SAFETY: prctl with these options takes plain integer arguments and
    // touches no memory we own.
    let rc = unsafe { libc::prctl(libc::PR_SET_NO_NEW_PRIVS, 1, 0, 0, 0) };
    if rc != 0 {
        return Err(PadError::Sandbox(format!(
            "PR_SET_NO_NEW_PRIVS: {}",
            std::io::Error::last_os_error()
        )));
    }

    // SAFETY: as above.
    let rc = unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0, 0, 0, 0) };
    if rc != 0 {
        return Err(PadError::Sandbox(format!(
            "PR_SET_DUMPABLE: {}",
            std::io::Error::last_os_error()
        )));
    }

    tracing::trace!("process hardened");
    Ok(())
}

#[cfg(not(target_os = "linux"))]
pub fn restrict() -> Result<()> {
    Ok(())
}
