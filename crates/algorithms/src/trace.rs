//! Engine trace hooks
//!
//! With the `trace` feature the engine emits TRACE-level `tracing` events at
//! each compression, counter increment and finalization. Without it the hooks
//! expand to nothing beyond borrowing their arguments.

use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(feature = "trace")] {
        macro_rules! trace_engine {
            ($name:literal, $($field:ident = $value:expr),+ $(,)?) => {
                ::tracing::event!(name: $name, ::tracing::Level::TRACE, { $($field = $value),+ })
            };
        }
    } else {
        macro_rules! trace_engine {
            ($name:literal, $($field:ident = $value:expr),+ $(,)?) => {
                { $(let _ = &$value;)+ }
            };
        }
    }
}

pub(crate) use trace_engine;
