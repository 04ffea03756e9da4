//! libcrypto symbols the `openssl` crate does not wrap.

use libc::{c_char, c_int, c_void};

pub const OPENSSL_FULL_VERSION_STRING: c_int = 7;
pub const OPENSSL_CPU_INFO: c_int = 9;

pub const OPENSSL_INIT_LOAD_CRYPTO_STRINGS: u64 = 0x0000_0002;
pub const OPENSSL_INIT_ADD_ALL_CIPHERS: u64 = 0x0000_0004;
pub const OPENSSL_INIT_ADD_ALL_DIGESTS: u64 = 0x0000_0008;

extern "C" {
    pub fn OpenSSL_version(kind: c_int) -> *const c_char;
    pub fn OPENSSL_init_crypto(opts: u64, settings: *const c_void) -> c_int;
    pub fn OPENSSL_atexit(handler: extern "C" fn()) -> c_int;
    pub fn OPENSSL_cleanup();
}
