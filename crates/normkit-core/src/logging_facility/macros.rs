//! Canonical logging macros
//!
//! Every operation event carries `component`, `op` and `event`. Extra fields
//! follow the usual `tracing` syntax.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use normkit_core::log_op_start;
/// log_op_start!("register_all");
/// log_op_start!("register_all", count = 3usize);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        ::tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        ::tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use normkit_core::log_op_end;
/// log_op_end!("register_all", count = 3usize);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr) => {
        ::tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_END,
        );
    };
    ($op:expr, $($field:tt)*) => {
        ::tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_END,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// The error is converted into `ExError` so the event carries the stable
/// `err.code` and `err.kind` fields.
///
/// # Example
///
/// ```
/// # use normkit_core::{log_op_error, errors::NormError};
/// let err = NormError::SchemaAlreadyRegistered { name: "user".to_string() };
/// log_op_error!("register", err);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        ::tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_END_ERROR,
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code(),
        );
    }};
    ($op:expr, $err:expr, $($field:tt)*) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        ::tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_END_ERROR,
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code(),
            $($field)*
        );
    }};
}
