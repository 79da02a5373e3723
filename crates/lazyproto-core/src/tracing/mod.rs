//! Observability for lazyproto.
//! `tracing` crate with `EnvFilter`, configured through `LAZYPROTO_LOG`.

pub mod setup;

pub use setup::init_tracing;
