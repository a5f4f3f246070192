//! Architecture detection.

use once_cell::sync::Lazy;

static MACHINE: Lazy<String> = Lazy::new(sysinfo::System::cpu_arch);

/// Machine type string of the host, e.g. `x86_64`, `i686` or `armv7l`.
pub fn machine() -> &'static str {
    MACHINE.as_str()
}

/// Whether the running binary was built for a 64-bit target.
pub const fn is_64bit() -> bool {
    cfg!(target_pointer_width = "64")
}

/// Whether a machine string names an ARM processor.
///
/// Only the `arm` prefix is matched, case-insensitively.
pub fn is_arm(machine: &str) -> bool {
    machine
        .get(..3)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("arm"))
}
