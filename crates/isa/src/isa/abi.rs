//! Bonjour calling-convention register aliases.
//!
//! Maps the roles a debugger or runtime cares about onto register-file slots.

use crate::common::reg::Register;

/// Frame pointer.
pub const REG_FP: Register = Register::Fp;
/// Stack pointer.
pub const REG_SP: Register = Register::Sp;
/// First return value.
pub const REG_RET1: Register = Register::R0;
/// First argument (shares `$r0` with the return value).
pub const REG_ARG1: Register = Register::R0;
/// Second argument.
pub const REG_ARGN: Register = Register::R1;
/// Program counter.
pub const REG_PC: Register = Register::Pc;
/// Condition-code register.
pub const REG_CC: Register = Register::Cc;
