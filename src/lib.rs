/// Use mimalloc as the global allocator for all binaries.
/// Faster than glibc malloc for small allocations, with better
/// thread-local caching and reduced fragmentation.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

pub mod common;
pub mod hmac;
pub mod xorsum;
